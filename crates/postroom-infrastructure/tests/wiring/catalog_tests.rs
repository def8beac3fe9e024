//! Tests for the embedded wiring resource catalog

use postroom_domain::error::Error;
use postroom_domain::registry::ServiceKind;
use postroom_infrastructure::constants::*;
use postroom_infrastructure::wiring::{EmbeddedWiringCatalog, WiringCatalog};

#[test]
fn test_every_embedded_resource_parses() {
    let catalog = EmbeddedWiringCatalog::new();
    for name in EmbeddedWiringCatalog::resource_names() {
        let resource = catalog.load(name).unwrap();
        assert_eq!(resource.name, name);
    }
}

#[test]
fn test_unknown_resource_is_not_found() {
    let err = EmbeddedWiringCatalog::new().load("drivers/odm.toml").unwrap_err();
    match err {
        Error::NotFound { resource } => {
            assert!(resource.contains("drivers/odm.toml"), "got: {}", resource);
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_services_resource_declares_default_definitions() {
    let resource = EmbeddedWiringCatalog::new().load(RESOURCE_SERVICES).unwrap();

    for kind in ServiceKind::ALL {
        let id = format!("postroom.{}.default", kind);
        let definition = resource
            .services
            .get(&id)
            .unwrap_or_else(|| panic!("missing definition '{}'", id));
        assert_eq!(definition.kind, kind.as_str());
        assert_eq!(definition.provider, PROVIDER_NULL);
        assert!(definition.description.is_some());
    }
}

#[test]
fn test_driver_resources_declare_their_backend() {
    let catalog = EmbeddedWiringCatalog::new();

    let orm = catalog.load(RESOURCE_DRIVER_ORM).unwrap();
    assert_eq!(
        orm.parameters["postroom.storage.backend"],
        serde_json::json!("orm")
    );
    assert!(orm.services.contains_key("postroom.thread_repository.orm"));

    let custom = catalog.load(RESOURCE_DRIVER_CUSTOM).unwrap();
    assert_eq!(
        custom.parameters["postroom.storage.backend"],
        serde_json::json!("custom")
    );
    assert!(custom.services.is_empty());
}

#[test]
fn test_forms_resource_matches_configured_default_ids() {
    let resource = EmbeddedWiringCatalog::new().load(RESOURCE_FORMS).unwrap();
    let config = postroom_infrastructure::config::MessagingConfig::default();

    for id in [
        &config.forms.new_thread.form_type,
        &config.forms.new_thread.factory,
        &config.forms.new_thread.handler,
        &config.forms.reply.form_type,
        &config.forms.reply.factory,
        &config.forms.reply.handler,
    ] {
        assert!(resource.services.contains_key(id), "missing '{}'", id);
    }
}

#[test]
fn test_bridge_resources_contribute_their_wiring() {
    let catalog = EmbeddedWiringCatalog::new();

    let user_directory = catalog.load(RESOURCE_BRIDGE_USER_DIRECTORY).unwrap();
    assert_eq!(
        user_directory.parameters["postroom.user_directory.enabled"],
        serde_json::json!(true)
    );
    let field_type = &user_directory.services["postroom.user_directory.recipient_field_type"];
    assert_eq!(field_type.kind, "form_type");

    let paginator = catalog.load(RESOURCE_BRIDGE_PAGINATOR).unwrap();
    assert_eq!(
        paginator.parameters["postroom.paginator.threads_per_page"],
        serde_json::json!(25)
    );
    assert!(paginator.services.contains_key("postroom.pager.default"));
}
