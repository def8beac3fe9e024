//! Message composition value objects
//!
//! Drafts are what callers hand to the composer; an [`OutboundMessage`] is
//! what the composer hands to the sender. How a sent message is persisted is
//! the storage driver's concern.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value Object: New-Thread Draft
///
/// Input for composing the first message of a new conversation thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ThreadDraft {
    /// Identifier of the participant writing the message
    pub sender: String,
    /// Subject line for the new thread
    pub subject: String,
    /// Message body
    pub body: String,
    /// Identifiers of the recipients
    pub recipients: Vec<String>,
}

impl ThreadDraft {
    /// Create an empty draft authored by `sender`
    pub fn new<S: Into<String>>(sender: S) -> Self {
        Self {
            sender: sender.into(),
            subject: String::new(),
            body: String::new(),
            recipients: Vec::new(),
        }
    }

    /// Set the subject line
    pub fn with_subject<S: Into<String>>(mut self, subject: S) -> Self {
        self.subject = subject.into();
        self
    }

    /// Set the message body
    pub fn with_body<B: Into<String>>(mut self, body: B) -> Self {
        self.body = body.into();
        self
    }

    /// Add a recipient
    pub fn with_recipient<R: Into<String>>(mut self, recipient: R) -> Self {
        self.recipients.push(recipient.into());
        self
    }
}

/// Value Object: Reply Draft
///
/// Input for composing a reply within an existing thread. Recipients are not
/// listed here: replying addresses the thread's existing participants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReplyDraft {
    /// Thread the reply belongs to
    pub thread_id: String,
    /// Identifier of the participant writing the reply
    pub sender: String,
    /// Message body
    pub body: String,
}

impl ReplyDraft {
    /// Create an empty reply to `thread_id` authored by `sender`
    pub fn new<T: Into<String>, S: Into<String>>(thread_id: T, sender: S) -> Self {
        Self {
            thread_id: thread_id.into(),
            sender: sender.into(),
            body: String::new(),
        }
    }

    /// Set the message body
    pub fn with_body<B: Into<String>>(mut self, body: B) -> Self {
        self.body = body.into();
        self
    }
}

/// Value Object: Outbound Message
///
/// A fully composed message ready for the sender service. `thread_id` is
/// `None` for the first message of a new thread; the driver assigns the
/// thread on delivery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutboundMessage {
    /// Existing thread the message belongs to, if replying
    pub thread_id: Option<String>,
    /// Subject line, present only for new threads
    pub subject: Option<String>,
    /// Identifier of the sending participant
    pub sender: String,
    /// Identifiers of the recipients
    pub recipients: Vec<String>,
    /// Message body
    pub body: String,
    /// When the composer produced this message
    pub composed_at: DateTime<Utc>,
}

impl OutboundMessage {
    /// Compose the opening message of a new thread from a draft
    pub fn from_thread_draft(draft: ThreadDraft) -> Self {
        Self {
            thread_id: None,
            subject: Some(draft.subject),
            sender: draft.sender,
            recipients: draft.recipients,
            body: draft.body,
            composed_at: Utc::now(),
        }
    }

    /// Compose a reply message from a draft
    pub fn from_reply_draft(draft: ReplyDraft) -> Self {
        Self {
            thread_id: Some(draft.thread_id),
            subject: None,
            sender: draft.sender,
            recipients: Vec::new(),
            body: draft.body,
            composed_at: Utc::now(),
        }
    }

    /// Whether this message opens a new thread
    pub fn opens_thread(&self) -> bool {
        self.thread_id.is_none()
    }
}
