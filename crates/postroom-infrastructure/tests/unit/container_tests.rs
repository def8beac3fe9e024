//! Tests for the container builder and wiring resource parsing

use postroom_domain::registry::ServiceKind;
use postroom_infrastructure::wiring::{service_alias, ContainerBuilder, WiringResource};

fn resource_from(name: &str, raw: &str) -> WiringResource {
    WiringResource::from_toml(name, raw).unwrap()
}

#[test]
fn test_service_alias_names() {
    assert_eq!(service_alias(ServiceKind::Composer), "postroom.composer");
    assert_eq!(service_alias(ServiceKind::Updater), "postroom.updater");
}

#[test]
fn test_parse_wiring_resource() {
    let resource = resource_from(
        "services.toml",
        r#"
        [parameters]
        "postroom.storage.backend" = "orm"
        "postroom.validation.recipients.max" = 10

        [services."postroom.sender.default"]
        kind = "sender"
        provider = "null"
        description = "Delivers composed messages"
        "#,
    );

    assert_eq!(resource.name, "services.toml");
    assert_eq!(
        resource.parameters["postroom.storage.backend"],
        serde_json::json!("orm")
    );
    assert_eq!(
        resource.parameters["postroom.validation.recipients.max"],
        serde_json::json!(10)
    );
    let definition = &resource.services["postroom.sender.default"];
    assert_eq!(definition.kind, "sender");
    assert_eq!(definition.provider, "null");
    assert!(definition.extra.is_empty());
}

#[test]
fn test_parse_definition_extra_settings() {
    let resource = resource_from(
        "driver.toml",
        r#"
        [services."postroom.sender.queued"]
        kind = "sender"
        provider = "queued"

        [services."postroom.sender.queued".extra]
        queue = "outbound"
        batch_size = 50
        "#,
    );

    let definition = &resource.services["postroom.sender.queued"];
    assert_eq!(definition.extra["queue"], serde_json::json!("outbound"));
    assert_eq!(definition.extra["batch_size"], serde_json::json!(50));
}

#[test]
fn test_parse_error_names_resource() {
    let err = WiringResource::from_toml("broken.toml", "kind = {").unwrap_err();
    assert!(err.to_string().contains("broken.toml"), "got: {}", err);
}

#[test]
fn test_parse_rejects_definition_without_kind() {
    let result = WiringResource::from_toml(
        "broken.toml",
        r#"
        [services."postroom.sender.default"]
        provider = "null"
        "#,
    );
    assert!(result.is_err());
}

#[test]
fn test_merge_records_load_order() {
    let mut builder = ContainerBuilder::new();
    builder.merge_resource(resource_from("first.toml", ""));
    builder.merge_resource(resource_from("second.toml", ""));

    let container = builder.freeze();
    assert_eq!(container.loaded_resources(), ["first.toml", "second.toml"]);
}

#[test]
fn test_later_merge_wins() {
    let mut builder = ContainerBuilder::new();
    builder.merge_resource(resource_from(
        "driver.toml",
        r#"
        [parameters]
        "postroom.storage.backend" = "orm"

        [services."postroom.sender.default"]
        kind = "sender"
        provider = "orm"
        "#,
    ));
    builder.merge_resource(resource_from(
        "overrides.toml",
        r#"
        [parameters]
        "postroom.storage.backend" = "tuned"

        [services."postroom.sender.default"]
        kind = "sender"
        provider = "null"
        "#,
    ));

    let container = builder.freeze();
    assert_eq!(container.parameter_str("postroom.storage.backend"), Some("tuned"));
    assert_eq!(
        container.definition("postroom.sender.default").unwrap().provider,
        "null"
    );
}

#[test]
fn test_set_parameter_replaces_earlier_write() {
    let mut builder = ContainerBuilder::new();
    builder.set_parameter("postroom.field_type.recipient", "_default_");
    assert_eq!(
        builder.parameter_str("postroom.field_type.recipient"),
        Some("_default_")
    );

    builder.set_parameter("postroom.field_type.recipient", "user_directory_recipient");

    let container = builder.freeze();
    assert_eq!(
        container.parameter_str("postroom.field_type.recipient"),
        Some("user_directory_recipient")
    );
}

#[test]
fn test_aliases_and_lookups() {
    let mut builder = ContainerBuilder::new();
    builder.set_alias("postroom.sender", "postroom.sender.default");
    builder.set_parameter("postroom.form.theme", "a/theme.html.tera");

    let container = builder.freeze();
    assert_eq!(container.alias("postroom.sender"), Some("postroom.sender.default"));
    assert_eq!(container.alias("postroom.composer"), None);
    assert_eq!(container.parameter("postroom.missing"), None);
    assert_eq!(container.parameter_names(), ["postroom.form.theme"]);
    assert_eq!(container.alias_names(), ["postroom.sender"]);
    assert!(container.definition_ids().is_empty());
}
