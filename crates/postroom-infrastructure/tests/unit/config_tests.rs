//! Tests for configuration types, loading, and validation

use postroom_domain::error::Error;
use postroom_domain::registry::ServiceKind;
use postroom_infrastructure::config::{
    validate_messaging_config, ConfigBuilder, ConfigLoader, MessagingConfig, StorageDriver,
};
use postroom_infrastructure::constants::SENTINEL_FIELD_TYPE;
use std::io::Write;

#[test]
fn test_default_config_values() {
    let config = MessagingConfig::default();

    assert_eq!(config.driver, StorageDriver::Orm);
    assert!(!config.theme.is_empty());
    assert_eq!(config.bridges, vec!["user_directory".to_string()]);
    assert_eq!(config.fields.recipient, SENTINEL_FIELD_TYPE);
    assert_eq!(config.fields.subject, "text");
    assert_eq!(config.fields.content, "textarea");
    assert_eq!(config.services.composer, "postroom.composer.default");
    assert_eq!(config.forms.new_thread.name, "message");
    assert_eq!(config.forms.reply.name, "reply");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_default_config_validates() {
    assert!(validate_messaging_config(&MessagingConfig::default()).is_ok());
}

#[test]
fn test_driver_parsing() {
    let config: MessagingConfig = toml::from_str("driver = \"custom\"").unwrap();
    assert_eq!(config.driver, StorageDriver::Custom);

    // A retired driver still parses; the wiring pass rejects it later
    let config: MessagingConfig = toml::from_str("driver = \"odm\"").unwrap();
    assert_eq!(config.driver, StorageDriver::Odm);

    let result: Result<MessagingConfig, _> = toml::from_str("driver = \"ldap\"");
    assert!(result.is_err());
}

#[test]
fn test_driver_resource_names() {
    assert_eq!(StorageDriver::Orm.resource_name(), "drivers/orm.toml");
    assert_eq!(StorageDriver::Custom.resource_name(), "drivers/custom.toml");
    assert_eq!(StorageDriver::Orm.to_string(), "orm");
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let config: MessagingConfig = toml::from_str(
        r#"
        [models]
        message_class = "acme::Message"
        "#,
    )
    .unwrap();

    assert_eq!(config.models.message_class, "acme::Message");
    assert_eq!(
        config.models.thread_class,
        MessagingConfig::default().models.thread_class
    );
}

#[test]
fn test_validation_names_offending_key() {
    let mut config = MessagingConfig::default();
    config.theme = String::new();
    let err = validate_messaging_config(&config).unwrap_err();
    assert!(err.to_string().contains("theme"), "got: {}", err);

    let mut config = MessagingConfig::default();
    config.services.searcher = String::new();
    let err = validate_messaging_config(&config).unwrap_err();
    assert!(
        err.to_string().contains("services.searcher"),
        "got: {}",
        err
    );

    let mut config = MessagingConfig::default();
    config.models.thread_metadata_class = String::new();
    let err = validate_messaging_config(&config).unwrap_err();
    assert!(
        err.to_string().contains("models.thread_metadata_class"),
        "got: {}",
        err
    );

    let mut config = MessagingConfig::default();
    config.forms.reply.factory = String::new();
    let err = validate_messaging_config(&config).unwrap_err();
    assert!(
        err.to_string().contains("forms.reply.factory"),
        "got: {}",
        err
    );
}

#[test]
fn test_validation_rejects_empty_bridge_names() {
    let mut config = MessagingConfig::default();
    config.bridges.push(String::new());
    let err = validate_messaging_config(&config).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_validation_rejects_bad_log_level() {
    let mut config = MessagingConfig::default();
    config.logging.level = "verbose".to_string();
    let err = validate_messaging_config(&config).unwrap_err();
    assert!(err.to_string().contains("verbose"), "got: {}", err);
}

#[test]
fn test_loader_reads_toml_file() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(
        file,
        r#"
        driver = "custom"
        theme = "acme/messages.html.tera"

        [fields]
        recipient = "acme_recipient"
        "#
    )
    .unwrap();

    let config = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap();

    assert_eq!(config.driver, StorageDriver::Custom);
    assert_eq!(config.theme, "acme/messages.html.tera");
    assert_eq!(config.fields.recipient, "acme_recipient");
    // Untouched sections keep their defaults
    assert_eq!(config.services.sender, "postroom.sender.default");
}

#[test]
fn test_loader_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigLoader::new()
        .with_config_path(dir.path().join("absent.toml"))
        .load()
        .unwrap();
    assert_eq!(config.driver, StorageDriver::Orm);
}

#[test]
fn test_loader_rejects_invalid_file_values() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    writeln!(file, "theme = \"\"").unwrap();

    let err = ConfigLoader::new()
        .with_config_path(file.path())
        .load()
        .unwrap_err();
    assert!(err.to_string().contains("theme"), "got: {}", err);
}

#[test]
fn test_loader_save_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("postroom.toml");
    let loader = ConfigLoader::new().with_config_path(&path);

    let mut config = MessagingConfig::default();
    config.theme = "saved/theme.html.tera".to_string();
    loader.save_to_file(&config, &path).unwrap();

    let loaded = loader.load().unwrap();
    assert_eq!(loaded.theme, "saved/theme.html.tera");
}

#[test]
fn test_config_builder() {
    let config = ConfigBuilder::new()
        .with_driver(StorageDriver::Custom)
        .with_theme("builder/theme.html.tera")
        .with_bridges(vec![])
        .with_bridge("paginator")
        .with_recipient_field_type("acme_recipient")
        .with_service_id(ServiceKind::Sender, "acme.sender")
        .build();

    assert_eq!(config.driver, StorageDriver::Custom);
    assert_eq!(config.theme, "builder/theme.html.tera");
    assert_eq!(config.bridges, vec!["paginator".to_string()]);
    assert_eq!(config.fields.recipient, "acme_recipient");
    assert_eq!(config.services.sender, "acme.sender");
    assert_eq!(config.services.id_for(ServiceKind::Sender), "acme.sender");
}
