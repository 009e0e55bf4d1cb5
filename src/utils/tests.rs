use super::error::MappingError;
use super::logging;

#[test]
fn logging_init_accepts_levels() {
    // Should not panic
    logging::init("info");
    logging::init("debug");
    logging::init("warn");
}

#[test]
fn test_parse_level() {
    assert_eq!(logging::parse_level("WARNING"), tracing::Level::WARN);
    assert_eq!(logging::parse_level("trace"), tracing::Level::TRACE);
    assert_eq!(logging::parse_level("bogus"), tracing::Level::INFO);
}

#[test]
fn test_malformed_annotation_message() {
    let err = MappingError::MalformedAnnotation {
        key: "iothub-message-source",
        expected: "string",
        found: "long",
    };
    assert_eq!(
        err.to_string(),
        "malformed annotation 'iothub-message-source': expected string, found long"
    );
}
