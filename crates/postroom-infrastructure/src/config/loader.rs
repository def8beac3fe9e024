//! Configuration loader
//!
//! Handles loading configuration from various sources including
//! TOML files, environment variables, and default values.

use crate::config::MessagingConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use postroom_domain::error::{Error, Result};
use postroom_domain::registry::ServiceKind;
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `MessagingConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `POSTROOM_DRIVER`)
    pub fn load(&self) -> Result<MessagingConfig> {
        // Start with default configuration
        let mut figment = Figment::new().merge(Serialized::defaults(MessagingConfig::default()));

        // Add configuration file if specified
        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else {
            // Try to find default config file
            if let Some(default_path) = Self::find_default_config_path() {
                if default_path.exists() {
                    figment = figment.merge(Toml::file(&default_path));
                    log_config_loaded(&default_path, true);
                }
            }
        }

        // Add environment variables
        // Uses underscore as separator for nested keys (e.g., POSTROOM_LOGGING_LEVEL)
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("_"));

        // Extract and deserialize configuration
        let config: MessagingConfig = figment
            .extract()
            .context("Failed to extract configuration")?;

        // Validate configuration
        self.validate_config(&config)?;

        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &MessagingConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)?;

        Ok(())
    }

    /// Get the current configuration file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Find default configuration file paths to try
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        // Try various common config file locations
        let candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
            dirs::config_dir()
                .map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME))
                .unwrap_or_default(),
            dirs::home_dir()
                .map(|d| {
                    d.join(format!(".{}", DEFAULT_CONFIG_DIR))
                        .join(DEFAULT_CONFIG_FILENAME)
                })
                .unwrap_or_default(),
        ];

        candidates.into_iter().find(|path| path.exists())
    }

    /// Validate configuration values
    fn validate_config(&self, config: &MessagingConfig) -> Result<()> {
        validate_messaging_config(config)
    }
}

/// Validate the messaging module configuration
///
/// Performs validation of all configuration sections. Driver support is not
/// checked here: the wiring pass rejects retired drivers itself so the error
/// surfaces at composition time regardless of how the config was built.
pub fn validate_messaging_config(config: &MessagingConfig) -> Result<()> {
    validate_theme_config(config)?;
    validate_bridges_config(config)?;
    validate_models_config(config)?;
    validate_services_config(config)?;
    validate_fields_config(config)?;
    validate_forms_config(config)?;
    validate_logging_config(config)?;
    Ok(())
}

fn validate_theme_config(config: &MessagingConfig) -> Result<()> {
    if config.theme.is_empty() {
        return Err(Error::configuration("theme cannot be empty"));
    }
    Ok(())
}

fn validate_bridges_config(config: &MessagingConfig) -> Result<()> {
    if config.bridges.iter().any(|name| name.is_empty()) {
        return Err(Error::configuration("bridges cannot contain empty names"));
    }
    Ok(())
}

fn validate_models_config(config: &MessagingConfig) -> Result<()> {
    let classes = [
        ("models.message_class", &config.models.message_class),
        (
            "models.message_metadata_class",
            &config.models.message_metadata_class,
        ),
        ("models.thread_class", &config.models.thread_class),
        (
            "models.thread_metadata_class",
            &config.models.thread_metadata_class,
        ),
    ];
    for (key, value) in classes {
        if value.is_empty() {
            return Err(Error::configuration(format!("{} cannot be empty", key)));
        }
    }
    Ok(())
}

fn validate_services_config(config: &MessagingConfig) -> Result<()> {
    for kind in ServiceKind::ALL {
        if config.services.id_for(kind).is_empty() {
            return Err(Error::configuration(format!("services.{} cannot be empty", kind)));
        }
    }
    Ok(())
}

fn validate_fields_config(config: &MessagingConfig) -> Result<()> {
    let fields = [
        ("fields.recipient", &config.fields.recipient),
        ("fields.subject", &config.fields.subject),
        ("fields.content", &config.fields.content),
    ];
    for (key, value) in fields {
        if value.is_empty() {
            return Err(Error::configuration(format!("{} cannot be empty", key)));
        }
    }
    Ok(())
}

fn validate_forms_config(config: &MessagingConfig) -> Result<()> {
    validate_form_config("forms.new_thread", &config.forms.new_thread)?;
    validate_form_config("forms.reply", &config.forms.reply)?;
    Ok(())
}

fn validate_form_config(prefix: &str, form: &crate::config::FormConfig) -> Result<()> {
    let keys = [
        ("type", &form.form_type),
        ("factory", &form.factory),
        ("handler", &form.handler),
        ("name", &form.name),
        ("model", &form.model),
    ];
    for (key, value) in keys {
        if value.is_empty() {
            return Err(Error::configuration(format!("{}.{} cannot be empty", prefix, key)));
        }
    }
    Ok(())
}

fn validate_logging_config(config: &MessagingConfig) -> Result<()> {
    crate::logging::parse_log_level(&config.logging.level)?;
    Ok(())
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration builder for programmatic configuration
pub struct ConfigBuilder {
    config: MessagingConfig,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            config: MessagingConfig::default(),
        }
    }

    /// Set the storage driver
    pub fn with_driver(mut self, driver: crate::config::StorageDriver) -> Self {
        self.config.driver = driver;
        self
    }

    /// Set the form theme template path
    pub fn with_theme<S: Into<String>>(mut self, theme: S) -> Self {
        self.config.theme = theme.into();
        self
    }

    /// Replace the enabled bridge list
    pub fn with_bridges(mut self, bridges: Vec<String>) -> Self {
        self.config.bridges = bridges;
        self
    }

    /// Add a bridge to the enabled list
    pub fn with_bridge<S: Into<String>>(mut self, bridge: S) -> Self {
        self.config.bridges.push(bridge.into());
        self
    }

    /// Set the recipient field type
    pub fn with_recipient_field_type<S: Into<String>>(mut self, field_type: S) -> Self {
        self.config.fields.recipient = field_type.into();
        self
    }

    /// Set the definition id for a service kind
    pub fn with_service_id<S: Into<String>>(mut self, kind: ServiceKind, id: S) -> Self {
        let id = id.into();
        match kind {
            ServiceKind::Composer => self.config.services.composer = id,
            ServiceKind::Deleter => self.config.services.deleter = id,
            ServiceKind::Provider => self.config.services.provider = id,
            ServiceKind::Reader => self.config.services.reader = id,
            ServiceKind::Remover => self.config.services.remover = id,
            ServiceKind::Searcher => self.config.services.searcher = id,
            ServiceKind::Sender => self.config.services.sender = id,
            ServiceKind::Updater => self.config.services.updater = id,
        }
        self
    }

    /// Set logging configuration
    pub fn with_logging(mut self, logging: crate::config::LoggingConfig) -> Self {
        self.config.logging = logging;
        self
    }

    /// Build the configuration
    pub fn build(self) -> MessagingConfig {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
