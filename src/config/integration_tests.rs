#[cfg(test)]
mod integration_tests {
    use crate::config::{load_and_validate_config, load_config};
    use crate::errors::ConfigError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn yaml_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    /// The bundled sample config loads and validates
    #[test]
    fn test_bundled_demo_yaml_loading() {
        let config = load_and_validate_config("configs/demo.yaml").unwrap();

        assert_eq!(config.processor_name, "DemoProcessor");
        assert_eq!(config.fibonacci_terms, 10);
        assert_eq!(config.prime_limit, 30);
        assert_eq!(config.items.len(), 3);
        assert_eq!(config.items[0].display_name(), "Item 1");
    }

    #[test]
    fn test_empty_mapping_uses_defaults() {
        let file = yaml_file("{}\n");
        let config = load_and_validate_config(file.path()).unwrap();
        assert_eq!(config, crate::config::DemoConfig::default());
    }

    #[test]
    fn test_missing_file_reports_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");

        let err = load_config(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("nope.yaml"));
    }

    #[test]
    fn test_malformed_yaml_reports_parse_error() {
        let file = yaml_file("items: [unterminated\n");
        assert!(matches!(load_config(file.path()), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_validation_runs_after_parsing() {
        let file = yaml_file("processor_name: \"\"\n");

        assert!(load_config(file.path()).is_ok());
        assert!(matches!(
            load_and_validate_config(file.path()),
            Err(ConfigError::Invalid { .. })
        ));
    }
}
