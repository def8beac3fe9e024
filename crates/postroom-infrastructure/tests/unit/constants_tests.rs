//! Tests for infrastructure constants

use postroom_infrastructure::constants::*;

#[test]
fn test_config_constants() {
    assert_eq!(DEFAULT_CONFIG_FILENAME, "postroom.toml");
    assert_eq!(DEFAULT_CONFIG_DIR, "postroom");
    assert_eq!(CONFIG_ENV_PREFIX, "POSTROOM");
    assert!(LOG_ENV_VAR.starts_with(CONFIG_ENV_PREFIX));
}

#[test]
fn test_resource_names_are_toml_documents() {
    let resources = [
        RESOURCE_DRIVER_ORM,
        RESOURCE_DRIVER_CUSTOM,
        RESOURCE_SERVICES,
        RESOURCE_FORMS,
        RESOURCE_VALIDATOR,
        RESOURCE_BRIDGE_USER_DIRECTORY,
        RESOURCE_BRIDGE_PAGINATOR,
    ];
    for name in resources {
        assert!(name.ends_with(".toml"), "{} is not a TOML document", name);
    }
}

#[test]
fn test_container_keys_share_prefix() {
    let keys = [
        PARAM_FORM_THEME,
        PARAM_MESSAGE_CLASS,
        PARAM_MESSAGE_METADATA_CLASS,
        PARAM_THREAD_CLASS,
        PARAM_THREAD_METADATA_CLASS,
        PARAM_FIELD_TYPE_RECIPIENT,
        PARAM_FIELD_TYPE_SUBJECT,
        PARAM_FIELD_TYPE_CONTENT,
        ALIAS_NEW_THREAD_FORM_TYPE,
        ALIAS_NEW_THREAD_FORM_FACTORY,
        ALIAS_NEW_THREAD_FORM_HANDLER,
        PARAM_NEW_THREAD_FORM_NAME,
        PARAM_NEW_THREAD_FORM_MODEL,
        ALIAS_REPLY_FORM_TYPE,
        ALIAS_REPLY_FORM_FACTORY,
        ALIAS_REPLY_FORM_HANDLER,
        PARAM_REPLY_FORM_NAME,
        PARAM_REPLY_FORM_MODEL,
    ];
    for key in keys {
        assert!(key.starts_with(SERVICE_ALIAS_PREFIX), "{} lacks prefix", key);
    }
}

#[test]
fn test_sentinel_differs_from_bridge_field_type() {
    assert_ne!(SENTINEL_FIELD_TYPE, USER_DIRECTORY_RECIPIENT_TYPE);
}

#[test]
fn test_domain_constants_are_reexported() {
    assert_eq!(BRIDGE_USER_DIRECTORY, "user_directory");
    assert_eq!(BRIDGE_PAGINATOR, "paginator");
    assert_eq!(PROVIDER_NULL, "null");
}
