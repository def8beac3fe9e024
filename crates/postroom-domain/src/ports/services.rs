//! Messaging Service Ports
//!
//! Contracts for every messaging capability the composition layer wires up.
//! Each port covers one concern; a storage driver typically implements all of
//! them against its own persistence model.
//!
//! # Implementations
//!
//! - **Null**: No-op providers for testing and as wiring defaults
//! - Storage drivers: backed by the configured persistence layer
//!
//! Every port exposes `provider_name` so the composition layer can report
//! which implementation ended up behind an interface.

use crate::error::Result;
use crate::value_objects::{OutboundMessage, ReplyDraft, ThreadDraft, ThreadSummary};
use async_trait::async_trait;

/// Message Composer Port
///
/// Turns user-supplied drafts into fully composed outbound messages.
///
/// # Example
///
/// ```ignore
/// use postroom_domain::ports::MessageComposer;
/// use postroom_domain::value_objects::ThreadDraft;
///
/// let draft = ThreadDraft::new("alice")
///     .with_subject("Hello")
///     .with_recipient("bob");
/// let message = composer.compose_thread(draft).await?;
/// ```
#[async_trait]
pub trait MessageComposer: Send + Sync + std::fmt::Debug {
    /// Compose the opening message of a new thread
    async fn compose_thread(&self, draft: ThreadDraft) -> Result<OutboundMessage>;

    /// Compose a reply within an existing thread
    async fn compose_reply(&self, draft: ReplyDraft) -> Result<OutboundMessage>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

/// Message Sender Port
///
/// Delivers a composed message to its recipients.
#[async_trait]
pub trait MessageSender: Send + Sync + std::fmt::Debug {
    /// Deliver a composed message
    ///
    /// # Returns
    /// The identifier of the thread the message landed in
    async fn send(&self, message: OutboundMessage) -> Result<String>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

/// Inbox Provider Port
///
/// Read access to a participant's threads.
#[async_trait]
pub trait InboxProvider: Send + Sync + std::fmt::Debug {
    /// Threads where the participant received messages
    async fn inbox_threads(&self, participant: &str) -> Result<Vec<ThreadSummary>>;

    /// Threads where the participant sent messages
    async fn sent_threads(&self, participant: &str) -> Result<Vec<ThreadSummary>>;

    /// Look up a single thread by identifier
    async fn thread(&self, thread_id: &str) -> Result<Option<ThreadSummary>>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

/// Thread Reader Port
///
/// Tracks per-participant read state on threads.
#[async_trait]
pub trait ThreadReader: Send + Sync + std::fmt::Debug {
    /// Mark a thread as read for a participant
    async fn mark_read(&self, participant: &str, thread_id: &str) -> Result<()>;

    /// Mark a thread as unread for a participant
    async fn mark_unread(&self, participant: &str, thread_id: &str) -> Result<()>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

/// Thread Deleter Port
///
/// Soft deletion: a deleted thread disappears from the participant's views
/// but stays in storage until removed.
#[async_trait]
pub trait ThreadDeleter: Send + Sync + std::fmt::Debug {
    /// Mark a thread as deleted for a participant
    async fn mark_deleted(&self, participant: &str, thread_id: &str) -> Result<()>;

    /// Undo a soft deletion for a participant
    async fn restore(&self, participant: &str, thread_id: &str) -> Result<()>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

/// Thread Remover Port
///
/// Hard removal from storage. Not reversible.
#[async_trait]
pub trait ThreadRemover: Send + Sync + std::fmt::Debug {
    /// Permanently remove a thread and its messages
    async fn remove(&self, thread_id: &str) -> Result<()>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

/// Thread Searcher Port
///
/// Full-text search over a participant's threads.
#[async_trait]
pub trait ThreadSearcher: Send + Sync + std::fmt::Debug {
    /// Search threads visible to `participant` matching `query`
    async fn search(&self, participant: &str, query: &str) -> Result<Vec<ThreadSummary>>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}

/// Thread Updater Port
///
/// Recomputes denormalized thread metadata (unread counts, last-message
/// timestamps) after messages change.
#[async_trait]
pub trait ThreadUpdater: Send + Sync + std::fmt::Debug {
    /// Recompute metadata for a single thread
    async fn refresh_metadata(&self, thread_id: &str) -> Result<()>;

    /// Get the name/identifier of this provider implementation
    fn provider_name(&self) -> &str;
}
