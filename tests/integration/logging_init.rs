//! Logging bootstrap writes pipeline events to the configured file

use super::test_utils::{fixture_path, parser};
use charm::logging::{init_logging, LoggingConfig};
use charm::CharmError;
use tempfile::TempDir;

#[test]
fn test_file_logging_records_conversion() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("logs").join("charm.log");
    let config = LoggingConfig {
        level: "debug".to_string(),
        format: "json".to_string(),
        output: "file".to_string(),
        file: log_file.clone(),
        ..LoggingConfig::default()
    };

    init_logging(Some(&config)).unwrap();
    parser().parse_from_path(fixture_path()).unwrap();

    let contents = std::fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("Converted definition source"));

    // A second subscriber cannot be installed in the same process
    let err = init_logging(Some(&config)).unwrap_err();
    assert!(matches!(err, CharmError::Config(_)));
}
