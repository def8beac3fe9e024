//! Tests for error context extensions

use postroom_domain::error::Error;
use postroom_infrastructure::error_ext::ErrorContext;

fn fail_io() -> Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn test_context_converts_to_configuration_error() {
    let err = fail_io().context("Failed to read wiring resource").unwrap_err();

    match err {
        Error::Configuration { message, source } => {
            assert!(message.starts_with("Failed to read wiring resource"));
            assert!(message.contains("gone"));
            assert!(source.is_some());
        }
        other => panic!("expected Configuration error, got {:?}", other),
    }
}

#[test]
fn test_with_context_is_lazy() {
    let ok: Result<u32, std::io::Error> = Ok(7);
    let value = ok
        .with_context(|| -> String { panic!("context closure ran on success") })
        .unwrap();
    assert_eq!(value, 7);
}

#[test]
fn test_with_context_formats_on_failure() {
    let name = "forms.toml";
    let err = fail_io()
        .with_context(|| format!("Failed to parse wiring resource '{}'", name))
        .unwrap_err();
    assert!(err.to_string().contains("forms.toml"), "got: {}", err);
}
