//! Null messaging service providers
//!
//! No-op implementations of every messaging service port. Useful for
//! testing, and wired as the defaults until a storage driver supplies real
//! implementations: composition always succeeds even in a bare install.
//!
//! Composition is pure data shaping, so the null composer does real work;
//! everything touching storage accepts the call and does nothing.

use async_trait::async_trait;
use postroom_domain::error::Result;
use postroom_domain::ports::services::{
    InboxProvider, MessageComposer, MessageSender, ThreadDeleter, ThreadReader, ThreadRemover,
    ThreadSearcher, ThreadUpdater,
};
use postroom_domain::value_objects::{OutboundMessage, ReplyDraft, ThreadDraft, ThreadSummary};

/// Thread identifier the null sender reports for messages that open a thread
const NULL_THREAD_ID: &str = "null-thread";

/// Null composer: shapes drafts into outbound messages without validation
#[derive(Debug, Clone, Default)]
pub struct NullMessageComposer;

impl NullMessageComposer {
    /// Create a new null composer
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MessageComposer for NullMessageComposer {
    async fn compose_thread(&self, draft: ThreadDraft) -> Result<OutboundMessage> {
        Ok(OutboundMessage::from_thread_draft(draft))
    }

    async fn compose_reply(&self, draft: ReplyDraft) -> Result<OutboundMessage> {
        Ok(OutboundMessage::from_reply_draft(draft))
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

/// Null sender: accepts every message and delivers nothing
#[derive(Debug, Clone, Default)]
pub struct NullMessageSender;

impl NullMessageSender {
    /// Create a new null sender
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl MessageSender for NullMessageSender {
    async fn send(&self, message: OutboundMessage) -> Result<String> {
        tracing::debug!(
            sender = %message.sender,
            recipients = message.recipients.len(),
            "Null sender discarding message"
        );
        Ok(message
            .thread_id
            .unwrap_or_else(|| NULL_THREAD_ID.to_string()))
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

/// Null inbox provider: every mailbox is empty
#[derive(Debug, Clone, Default)]
pub struct NullInboxProvider;

impl NullInboxProvider {
    /// Create a new null inbox provider
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InboxProvider for NullInboxProvider {
    async fn inbox_threads(&self, _participant: &str) -> Result<Vec<ThreadSummary>> {
        Ok(Vec::new())
    }

    async fn sent_threads(&self, _participant: &str) -> Result<Vec<ThreadSummary>> {
        Ok(Vec::new())
    }

    async fn thread(&self, _thread_id: &str) -> Result<Option<ThreadSummary>> {
        Ok(None)
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

/// Null reader: read-state changes are accepted and forgotten
#[derive(Debug, Clone, Default)]
pub struct NullThreadReader;

impl NullThreadReader {
    /// Create a new null reader
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ThreadReader for NullThreadReader {
    async fn mark_read(&self, _participant: &str, _thread_id: &str) -> Result<()> {
        Ok(())
    }

    async fn mark_unread(&self, _participant: &str, _thread_id: &str) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

/// Null deleter: soft deletions are accepted and forgotten
#[derive(Debug, Clone, Default)]
pub struct NullThreadDeleter;

impl NullThreadDeleter {
    /// Create a new null deleter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ThreadDeleter for NullThreadDeleter {
    async fn mark_deleted(&self, _participant: &str, _thread_id: &str) -> Result<()> {
        Ok(())
    }

    async fn restore(&self, _participant: &str, _thread_id: &str) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

/// Null remover: hard removals are accepted and forgotten
#[derive(Debug, Clone, Default)]
pub struct NullThreadRemover;

impl NullThreadRemover {
    /// Create a new null remover
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ThreadRemover for NullThreadRemover {
    async fn remove(&self, thread_id: &str) -> Result<()> {
        tracing::debug!(thread_id, "Null remover ignoring removal");
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

/// Null searcher: every query matches nothing
#[derive(Debug, Clone, Default)]
pub struct NullThreadSearcher;

impl NullThreadSearcher {
    /// Create a new null searcher
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ThreadSearcher for NullThreadSearcher {
    async fn search(&self, _participant: &str, _query: &str) -> Result<Vec<ThreadSummary>> {
        Ok(Vec::new())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

/// Null updater: metadata refreshes are accepted and forgotten
#[derive(Debug, Clone, Default)]
pub struct NullThreadUpdater;

impl NullThreadUpdater {
    /// Create a new null updater
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ThreadUpdater for NullThreadUpdater {
    async fn refresh_metadata(&self, _thread_id: &str) -> Result<()> {
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use postroom_domain::registry::{
    SERVICE_PROVIDERS, ServiceInstance, ServiceKind, ServiceProviderConfig, ServiceProviderEntry,
};
use std::sync::Arc;

#[linkme::distributed_slice(SERVICE_PROVIDERS)]
static NULL_COMPOSER: ServiceProviderEntry = ServiceProviderEntry {
    kind: ServiceKind::Composer,
    name: "null",
    description: "Pass-through composer with no validation",
    factory: |_config: &ServiceProviderConfig| {
        Ok(ServiceInstance::Composer(Arc::new(
            NullMessageComposer::new(),
        )))
    },
};

#[linkme::distributed_slice(SERVICE_PROVIDERS)]
static NULL_DELETER: ServiceProviderEntry = ServiceProviderEntry {
    kind: ServiceKind::Deleter,
    name: "null",
    description: "No-op soft deleter",
    factory: |_config: &ServiceProviderConfig| {
        Ok(ServiceInstance::Deleter(Arc::new(NullThreadDeleter::new())))
    },
};

#[linkme::distributed_slice(SERVICE_PROVIDERS)]
static NULL_PROVIDER: ServiceProviderEntry = ServiceProviderEntry {
    kind: ServiceKind::Provider,
    name: "null",
    description: "Inbox provider with empty mailboxes",
    factory: |_config: &ServiceProviderConfig| {
        Ok(ServiceInstance::Provider(Arc::new(
            NullInboxProvider::new(),
        )))
    },
};

#[linkme::distributed_slice(SERVICE_PROVIDERS)]
static NULL_READER: ServiceProviderEntry = ServiceProviderEntry {
    kind: ServiceKind::Reader,
    name: "null",
    description: "No-op read-state tracker",
    factory: |_config: &ServiceProviderConfig| {
        Ok(ServiceInstance::Reader(Arc::new(NullThreadReader::new())))
    },
};

#[linkme::distributed_slice(SERVICE_PROVIDERS)]
static NULL_REMOVER: ServiceProviderEntry = ServiceProviderEntry {
    kind: ServiceKind::Remover,
    name: "null",
    description: "No-op hard remover",
    factory: |_config: &ServiceProviderConfig| {
        Ok(ServiceInstance::Remover(Arc::new(NullThreadRemover::new())))
    },
};

#[linkme::distributed_slice(SERVICE_PROVIDERS)]
static NULL_SEARCHER: ServiceProviderEntry = ServiceProviderEntry {
    kind: ServiceKind::Searcher,
    name: "null",
    description: "Searcher that matches nothing",
    factory: |_config: &ServiceProviderConfig| {
        Ok(ServiceInstance::Searcher(Arc::new(
            NullThreadSearcher::new(),
        )))
    },
};

#[linkme::distributed_slice(SERVICE_PROVIDERS)]
static NULL_SENDER: ServiceProviderEntry = ServiceProviderEntry {
    kind: ServiceKind::Sender,
    name: "null",
    description: "Sender that discards every message",
    factory: |_config: &ServiceProviderConfig| {
        Ok(ServiceInstance::Sender(Arc::new(NullMessageSender::new())))
    },
};

#[linkme::distributed_slice(SERVICE_PROVIDERS)]
static NULL_UPDATER: ServiceProviderEntry = ServiceProviderEntry {
    kind: ServiceKind::Updater,
    name: "null",
    description: "No-op metadata updater",
    factory: |_config: &ServiceProviderConfig| {
        Ok(ServiceInstance::Updater(Arc::new(NullThreadUpdater::new())))
    },
};
