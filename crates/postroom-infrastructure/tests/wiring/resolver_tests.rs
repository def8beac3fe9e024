//! Tests for typed service resolution

use postroom_domain::error::Error;
use postroom_domain::registry::ServiceKind;
use postroom_infrastructure::constants::PROVIDER_NULL;
use postroom_infrastructure::wiring::{
    list_available_providers, resolve_messaging_services, service_alias, Container,
    ContainerBuilder, ServiceDefinition, WiringResource,
};
use std::collections::{BTreeMap, HashMap};

fn null_definition(kind: ServiceKind) -> ServiceDefinition {
    ServiceDefinition {
        kind: kind.as_str().to_string(),
        provider: PROVIDER_NULL.to_string(),
        description: None,
        extra: HashMap::new(),
    }
}

/// Container with every kind aliased to a null-backed definition
fn null_container() -> Container {
    let mut services = BTreeMap::new();
    let mut builder = ContainerBuilder::new();
    for kind in ServiceKind::ALL {
        let id = format!("test.{}", kind);
        services.insert(id.clone(), null_definition(kind));
        builder.set_alias(service_alias(kind), id);
    }
    builder.merge_resource(WiringResource {
        name: "test.toml".to_string(),
        parameters: BTreeMap::new(),
        services,
    });
    builder.freeze()
}

fn container_with(tweak: impl FnOnce(&mut BTreeMap<String, ServiceDefinition>)) -> Container {
    let mut services = BTreeMap::new();
    let mut builder = ContainerBuilder::new();
    for kind in ServiceKind::ALL {
        let id = format!("test.{}", kind);
        services.insert(id.clone(), null_definition(kind));
        builder.set_alias(service_alias(kind), id);
    }
    tweak(&mut services);
    builder.merge_resource(WiringResource {
        name: "test.toml".to_string(),
        parameters: BTreeMap::new(),
        services,
    });
    builder.freeze()
}

#[test]
fn test_resolves_null_backed_definitions() {
    let services = resolve_messaging_services(&null_container()).unwrap();

    assert_eq!(services.composer.provider_name(), PROVIDER_NULL);
    assert_eq!(services.sender.provider_name(), PROVIDER_NULL);
    assert_eq!(services.provider_names().len(), 8);

    let debug = format!("{:?}", services);
    assert!(debug.contains("MessagingServices"));
    assert!(debug.contains("null"));
}

#[test]
fn test_missing_alias_is_a_configuration_error() {
    let container = ContainerBuilder::new().freeze();
    let err = resolve_messaging_services(&container).unwrap_err();

    match err {
        Error::Configuration { message, .. } => {
            assert!(message.contains("postroom.composer"), "got: {}", message);
        }
        other => panic!("expected Configuration, got {:?}", other),
    }
}

#[test]
fn test_missing_definition_names_id_and_alias() {
    let container = container_with(|services| {
        services.remove("test.reader");
    });
    let err = resolve_messaging_services(&container).unwrap_err();

    match err {
        Error::NotFound { resource } => {
            assert!(resource.contains("test.reader"), "got: {}", resource);
            assert!(resource.contains("postroom.reader"), "got: {}", resource);
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_definition_kind_mismatch_is_rejected() {
    let container = container_with(|services| {
        if let Some(definition) = services.get_mut("test.deleter") {
            definition.kind = "sender".to_string();
        }
    });
    let err = resolve_messaging_services(&container).unwrap_err();

    match err {
        Error::Configuration { message, .. } => {
            assert!(message.contains("test.deleter"), "got: {}", message);
            assert!(message.contains("sender"), "got: {}", message);
            assert!(message.contains("deleter"), "got: {}", message);
        }
        other => panic!("expected Configuration, got {:?}", other),
    }
}

#[test]
fn test_unknown_provider_error_lists_alternatives() {
    let container = container_with(|services| {
        if let Some(definition) = services.get_mut("test.composer") {
            definition.provider = "bogus".to_string();
        }
    });
    let err = resolve_messaging_services(&container).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("Unknown composer provider 'bogus'"), "got: {}", message);
    assert!(message.contains(PROVIDER_NULL), "got: {}", message);
}

#[test]
fn test_list_available_providers_contains_registered_entries() {
    let available = list_available_providers();

    let bridge_names: Vec<&str> = available.bridges.iter().map(|(name, _)| *name).collect();
    assert!(bridge_names.contains(&"user_directory"));
    assert!(bridge_names.contains(&"paginator"));

    for kind in ServiceKind::ALL {
        assert!(
            available
                .services
                .iter()
                .any(|(entry_kind, name, _)| *entry_kind == kind && *name == PROVIDER_NULL),
            "no null provider listed for {}",
            kind
        );
    }

    let display = available.to_string();
    assert!(display.contains("Available bridges"));
    assert!(display.contains("Available service providers"));
}
