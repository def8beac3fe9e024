//! Main messaging module configuration

use crate::constants::SENTINEL_FIELD_TYPE;
use postroom_domain::constants::BRIDGE_USER_DIRECTORY;
use postroom_domain::registry::ServiceKind;
use serde::{Deserialize, Serialize};

pub use super::logging::LoggingConfig;

/// Storage driver selecting which wiring resource backs the model classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageDriver {
    /// Relational storage
    #[default]
    Orm,
    /// Document storage. The value still parses so the wiring pass can
    /// reject it with an error naming the driver.
    Odm,
    /// Operator-supplied storage
    Custom,
}

impl StorageDriver {
    /// The configuration value for this driver
    pub fn as_str(self) -> &'static str {
        match self {
            StorageDriver::Orm => "orm",
            StorageDriver::Odm => "odm",
            StorageDriver::Custom => "custom",
        }
    }

    /// Name of the wiring resource holding this driver's defaults
    pub fn resource_name(self) -> String {
        format!("drivers/{}.toml", self.as_str())
    }
}

impl std::fmt::Display for StorageDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level configuration for the messaging module
///
/// Every section has working defaults: `MessagingConfig::default()` wires
/// successfully with the null providers and the user directory bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MessagingConfig {
    /// Storage driver backing the model classes
    pub driver: StorageDriver,

    /// Form theme template path
    pub theme: String,

    /// Bridges to enable, by registry name
    pub bridges: Vec<String>,

    /// Model class paths
    pub models: ModelsConfig,

    /// Service definition ids, one per messaging service kind
    pub services: ServicesConfig,

    /// Form field types
    pub fields: FieldsConfig,

    /// New-thread and reply form wiring
    pub forms: FormsConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            driver: StorageDriver::default(),
            theme: "postroom/form_theme.html.tera".to_string(),
            bridges: vec![BRIDGE_USER_DIRECTORY.to_string()],
            models: ModelsConfig::default(),
            services: ServicesConfig::default(),
            fields: FieldsConfig::default(),
            forms: FormsConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Model class paths for the storage driver
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelsConfig {
    /// Message model class path
    pub message_class: String,

    /// Per-participant message metadata class path
    pub message_metadata_class: String,

    /// Thread model class path
    pub thread_class: String,

    /// Per-participant thread metadata class path
    pub thread_metadata_class: String,
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            message_class: "postroom_storage::orm::Message".to_string(),
            message_metadata_class: "postroom_storage::orm::MessageMetadata".to_string(),
            thread_class: "postroom_storage::orm::Thread".to_string(),
            thread_metadata_class: "postroom_storage::orm::ThreadMetadata".to_string(),
        }
    }
}

/// Service definition ids, one per messaging service kind
///
/// Each value names a service definition declared by a wiring resource.
/// The wiring pass aliases `postroom.<kind>` to the configured id and the
/// resolver realizes the definition through the provider registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesConfig {
    /// Definition id for the message composer
    pub composer: String,

    /// Definition id for the thread deleter
    pub deleter: String,

    /// Definition id for the inbox provider
    pub provider: String,

    /// Definition id for the read-state tracker
    pub reader: String,

    /// Definition id for the thread remover
    pub remover: String,

    /// Definition id for the thread searcher
    pub searcher: String,

    /// Definition id for the message sender
    pub sender: String,

    /// Definition id for the thread metadata updater
    pub updater: String,
}

impl ServicesConfig {
    /// The configured definition id for a service kind
    pub fn id_for(&self, kind: ServiceKind) -> &str {
        match kind {
            ServiceKind::Composer => &self.composer,
            ServiceKind::Deleter => &self.deleter,
            ServiceKind::Provider => &self.provider,
            ServiceKind::Reader => &self.reader,
            ServiceKind::Remover => &self.remover,
            ServiceKind::Searcher => &self.searcher,
            ServiceKind::Sender => &self.sender,
            ServiceKind::Updater => &self.updater,
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            composer: "postroom.composer.default".to_string(),
            deleter: "postroom.deleter.default".to_string(),
            provider: "postroom.provider.default".to_string(),
            reader: "postroom.reader.default".to_string(),
            remover: "postroom.remover.default".to_string(),
            searcher: "postroom.searcher.default".to_string(),
            sender: "postroom.sender.default".to_string(),
            updater: "postroom.updater.default".to_string(),
        }
    }
}

/// Form field types
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldsConfig {
    /// Recipient field type. The default is a sentinel the wiring pass
    /// replaces when the user directory bridge is enabled.
    pub recipient: String,

    /// Subject field type
    pub subject: String,

    /// Message content field type
    pub content: String,
}

impl Default for FieldsConfig {
    fn default() -> Self {
        Self {
            recipient: SENTINEL_FIELD_TYPE.to_string(),
            subject: "text".to_string(),
            content: "textarea".to_string(),
        }
    }
}

/// Wiring for a single form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormConfig {
    /// Definition id for the form type
    #[serde(rename = "type")]
    pub form_type: String,

    /// Definition id for the form factory
    pub factory: String,

    /// Definition id for the form handler
    pub handler: String,

    /// Form name used in submitted data
    pub name: String,

    /// Form model class path
    pub model: String,
}

/// New-thread and reply form wiring
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsConfig {
    /// Form opening a new thread
    pub new_thread: FormConfig,

    /// Form replying to an existing thread
    pub reply: FormConfig,
}

impl Default for FormsConfig {
    fn default() -> Self {
        Self {
            new_thread: FormConfig {
                form_type: "postroom.new_thread_form.type.default".to_string(),
                factory: "postroom.new_thread_form.factory.default".to_string(),
                handler: "postroom.new_thread_form.handler.default".to_string(),
                name: "message".to_string(),
                model: "postroom::forms::NewThreadMessage".to_string(),
            },
            reply: FormConfig {
                form_type: "postroom.reply_form.type.default".to_string(),
                factory: "postroom.reply_form.factory.default".to_string(),
                handler: "postroom.reply_form.handler.default".to_string(),
                name: "reply".to_string(),
                model: "postroom::forms::ReplyMessage".to_string(),
            },
        }
    }
}
