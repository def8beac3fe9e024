//! Infrastructure layer constants
//!
//! Contains the container keys, wiring resource names, and sentinel values
//! used by the wiring pass. Domain-specific constants (bridge names,
//! provider names) are defined in `postroom_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "postroom.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "postroom";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "POSTROOM";

/// Environment variable that overrides the configured log filter
pub const LOG_ENV_VAR: &str = "POSTROOM_LOG";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

// ============================================================================
// WIRING RESOURCE NAMES
// ============================================================================

/// Wiring resource with the relational storage defaults
pub const RESOURCE_DRIVER_ORM: &str = "drivers/orm.toml";

/// Wiring resource loaded when the operator supplies their own storage
pub const RESOURCE_DRIVER_CUSTOM: &str = "drivers/custom.toml";

/// Wiring resource declaring the default messaging service definitions
pub const RESOURCE_SERVICES: &str = "services.toml";

/// Wiring resource declaring the form service definitions
pub const RESOURCE_FORMS: &str = "forms.toml";

/// Wiring resource with draft validation limits
pub const RESOURCE_VALIDATOR: &str = "validator.toml";

/// Wiring resource loaded when the user directory bridge is enabled
pub const RESOURCE_BRIDGE_USER_DIRECTORY: &str = "bridges/user_directory.toml";

/// Wiring resource loaded when the paginator bridge is enabled
pub const RESOURCE_BRIDGE_PAGINATOR: &str = "bridges/paginator.toml";

// ============================================================================
// CONTAINER KEYS - MODELS AND THEME
// ============================================================================

/// Container parameter holding the form theme template path
pub const PARAM_FORM_THEME: &str = "postroom.form.theme";

/// Container parameter holding the message model class path
pub const PARAM_MESSAGE_CLASS: &str = "postroom.message_class";

/// Container parameter holding the per-participant message metadata class path
pub const PARAM_MESSAGE_METADATA_CLASS: &str = "postroom.message_metadata_class";

/// Container parameter holding the thread model class path
pub const PARAM_THREAD_CLASS: &str = "postroom.thread_class";

/// Container parameter holding the per-participant thread metadata class path
pub const PARAM_THREAD_METADATA_CLASS: &str = "postroom.thread_metadata_class";

// ============================================================================
// CONTAINER KEYS - SERVICES
// ============================================================================

/// Prefix of the eight messaging service aliases
///
/// The full alias name is the prefix followed by the service kind's
/// configuration key, e.g. `postroom.composer`.
pub const SERVICE_ALIAS_PREFIX: &str = "postroom.";

// ============================================================================
// CONTAINER KEYS - FIELDS AND FORMS
// ============================================================================

/// Container parameter holding the recipient field type
pub const PARAM_FIELD_TYPE_RECIPIENT: &str = "postroom.field_type.recipient";

/// Container parameter holding the subject field type
pub const PARAM_FIELD_TYPE_SUBJECT: &str = "postroom.field_type.subject";

/// Container parameter holding the message content field type
pub const PARAM_FIELD_TYPE_CONTENT: &str = "postroom.field_type.content";

/// Alias pointing at the new-thread form type definition
pub const ALIAS_NEW_THREAD_FORM_TYPE: &str = "postroom.new_thread_form.type";

/// Alias pointing at the new-thread form factory definition
pub const ALIAS_NEW_THREAD_FORM_FACTORY: &str = "postroom.new_thread_form.factory";

/// Alias pointing at the new-thread form handler definition
pub const ALIAS_NEW_THREAD_FORM_HANDLER: &str = "postroom.new_thread_form.handler";

/// Container parameter holding the new-thread form name
pub const PARAM_NEW_THREAD_FORM_NAME: &str = "postroom.new_thread_form.name";

/// Container parameter holding the new-thread form model class path
pub const PARAM_NEW_THREAD_FORM_MODEL: &str = "postroom.new_thread_form.model";

/// Alias pointing at the reply form type definition
pub const ALIAS_REPLY_FORM_TYPE: &str = "postroom.reply_form.type";

/// Alias pointing at the reply form factory definition
pub const ALIAS_REPLY_FORM_FACTORY: &str = "postroom.reply_form.factory";

/// Alias pointing at the reply form handler definition
pub const ALIAS_REPLY_FORM_HANDLER: &str = "postroom.reply_form.handler";

/// Container parameter holding the reply form name
pub const PARAM_REPLY_FORM_NAME: &str = "postroom.reply_form.name";

/// Container parameter holding the reply form model class path
pub const PARAM_REPLY_FORM_MODEL: &str = "postroom.reply_form.model";

// ============================================================================
// SENTINELS AND BRIDGE VALUES
// ============================================================================

/// Sentinel recipient field type meaning "no custom type configured"
///
/// The wiring pass replaces this value when the user directory bridge is
/// enabled; a configured type is left untouched.
pub const SENTINEL_FIELD_TYPE: &str = "_default_";

/// Recipient field type installed by the user directory bridge
pub const USER_DIRECTORY_RECIPIENT_TYPE: &str = "user_directory_recipient";

// Re-export domain constants so infrastructure callers need a single import
pub use postroom_domain::constants::*;
