//! Thread-related value objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value Object: Thread Summary
///
/// A listing-level view of a conversation thread, as returned by the inbox
/// provider and the searcher. Contains enough for an inbox screen without
/// exposing the driver's persistence model.
///
/// ## Example
///
/// ```rust
/// use postroom_domain::value_objects::ThreadSummary;
///
/// let thread = ThreadSummary::new("thread_8f2", "Deployment window")
///     .with_participant("alice")
///     .with_participant("bob");
///
/// assert_eq!(thread.participants.len(), 2);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreadSummary {
    /// Opaque thread identifier assigned by the storage driver
    pub id: String,
    /// Subject line of the thread
    pub subject: String,
    /// Identifiers of every participant in the thread
    pub participants: Vec<String>,
    /// Number of messages the thread currently holds
    pub message_count: usize,
    /// Timestamp of the most recent message, if any was sent yet
    pub last_message_at: Option<DateTime<Utc>>,
    /// Whether the viewing participant has unread messages in this thread
    pub unread: bool,
}

impl ThreadSummary {
    /// Create a summary with no participants or messages
    pub fn new<I: Into<String>, S: Into<String>>(id: I, subject: S) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            participants: Vec::new(),
            message_count: 0,
            last_message_at: None,
            unread: false,
        }
    }

    /// Add a participant
    pub fn with_participant<P: Into<String>>(mut self, participant: P) -> Self {
        self.participants.push(participant.into());
        self
    }

    /// Set the message count
    pub fn with_message_count(mut self, count: usize) -> Self {
        self.message_count = count;
        self
    }

    /// Set the timestamp of the latest message
    pub fn with_last_message_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_message_at = Some(at);
        self
    }

    /// Mark the thread as holding unread messages
    pub fn with_unread(mut self, unread: bool) -> Self {
        self.unread = unread;
        self
    }
}
