//! Configuration file loading and validation.

use std::path::Path;

use crate::error::ConfigError;
use crate::types::SessionConfig;

/// Loads and validates a `testvec.toml` configuration from a project directory.
///
/// Reads `<project_dir>/testvec.toml`, parses it, and validates required fields.
pub fn load_config(project_dir: &Path) -> Result<SessionConfig, ConfigError> {
    let config_path = project_dir.join("testvec.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `testvec.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<SessionConfig, ConfigError> {
    let config: SessionConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and values are consistent.
fn validate_config(config: &SessionConfig) -> Result<(), ConfigError> {
    if config.bench.entity.is_empty() {
        return Err(ConfigError::MissingField("bench.entity".to_string()));
    }
    if config.vectors.count == 0 {
        return Err(ConfigError::ValidationError(
            "vectors.count must be at least 1".to_string(),
        ));
    }
    if config.vectors.inputs == config.vectors.outputs {
        return Err(ConfigError::ValidationError(
            "vectors.inputs and vectors.outputs must differ".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
[bench]
entity = "adder_tb"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.bench.entity, "adder_tb");
        assert_eq!(config.vectors.inputs, "inputs.dat");
        assert_eq!(config.vectors.outputs, "outputs.dat");
        assert_eq!(config.vectors.count, 100);
        assert_eq!(config.vectors.seed, None);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[bench]
entity = "fifo_tb"

[vectors]
inputs = "stim.dat"
outputs = "gold.dat"
count = 2000
seed = 99
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.bench.entity, "fifo_tb");
        assert_eq!(config.vectors.inputs, "stim.dat");
        assert_eq!(config.vectors.outputs, "gold.dat");
        assert_eq!(config.vectors.count, 2000);
        assert_eq!(config.vectors.seed, Some(99));
    }

    #[test]
    fn empty_entity_is_missing_field() {
        let toml = r#"
[bench]
entity = ""
"#;
        assert!(matches!(
            load_config_from_str(toml),
            Err(ConfigError::MissingField(f)) if f == "bench.entity"
        ));
    }

    #[test]
    fn zero_count_fails_validation() {
        let toml = r#"
[bench]
entity = "adder_tb"

[vectors]
count = 0
"#;
        assert!(matches!(
            load_config_from_str(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn identical_file_names_fail_validation() {
        let toml = r#"
[bench]
entity = "adder_tb"

[vectors]
inputs = "same.dat"
outputs = "same.dat"
"#;
        assert!(matches!(
            load_config_from_str(toml),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        assert!(matches!(
            load_config_from_str("[bench\nentity = 3"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("testvec.toml"),
            "[bench]\nentity = \"alu_tb\"\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.bench.entity, "alu_tb");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_config(dir.path()),
            Err(ConfigError::IoError(_))
        ));
    }
}
