use anyhow::{Context, Result};

use crate::config::Config;

pub fn load_from_file(file_path: &str) -> Result<Config> {
    let contents = std::fs::read_to_string(file_path).context("error reading config file")?;
    let config: Config = serde_yml::from_str(&contents).context("yaml parsing failed")?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "device: class1\naccess_token: abc123\napi_url: http://localhost:9000/v1/devices\nlog_level: debug"
        )
        .unwrap();

        let config = load_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.device(), "class1");
        assert_eq!(config.access_token(), "abc123");
        assert_eq!(config.api_url(), "http://localhost:9000/v1/devices");
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn optional_fields_fall_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "device: class1\naccess_token: abc123").unwrap();

        let config = load_from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.api_url(), "https://api.particle.io/v1/devices");
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn missing_file_reports_read_context() {
        let err = load_from_file("/nowhere/photon.yml").unwrap_err();
        assert!(err.to_string().contains("error reading config file"));
    }

    #[test]
    fn malformed_yaml_reports_parse_context() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "device: [unclosed").unwrap();

        let err = load_from_file(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("yaml parsing failed"));
    }
}
