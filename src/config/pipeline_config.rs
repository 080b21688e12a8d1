use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfigFile {
    pub pipeline: PipelineSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSection {
    pub raw_dir: Option<String>,
    pub output_path: Option<String>,
}

/// Where the raw scraper exports live and where the cleaned dataset goes.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub raw_dir: String,
    pub output_path: String,
}

impl PipelineConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read pipeline config file: {}", path))?;

        let config_file: PipelineConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse pipeline config file: {}", path))?;

        let defaults = Self::default();
        Ok(Self {
            raw_dir: config_file.pipeline.raw_dir.unwrap_or(defaults.raw_dir),
            output_path: config_file
                .pipeline
                .output_path
                .unwrap_or(defaults.output_path),
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.raw_dir.is_empty() {
            return Err(anyhow::anyhow!("Raw listing directory cannot be empty"));
        }

        if self.output_path.is_empty() {
            return Err(anyhow::anyhow!("Output path cannot be empty"));
        }

        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            raw_dir: "./data/raw/rents/tutti/".to_string(),
            output_path: "./data/raw/rents/tutti.json".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.raw_dir, "./data/raw/rents/tutti/");
        assert_eq!(config.output_path, "./data/raw/rents/tutti.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[pipeline]\nraw_dir = \"/tmp/listings/\"\noutput_path = \"/tmp/out.json\""
        )
        .unwrap();

        let config = PipelineConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.raw_dir, "/tmp/listings/");
        assert_eq!(config.output_path, "/tmp/out.json");
    }

    #[test]
    fn test_from_file_partial_section_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[pipeline]\nraw_dir = \"/tmp/listings/\"").unwrap();

        let config = PipelineConfig::from_file(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.raw_dir, "/tmp/listings/");
        assert_eq!(config.output_path, "./data/raw/rents/tutti.json");
    }

    #[test]
    fn test_validate_rejects_empty_paths() {
        let config = PipelineConfig {
            raw_dir: String::new(),
            output_path: "./out.json".to_string(),
        };
        assert!(config.validate().is_err());

        let config = PipelineConfig {
            raw_dir: "./data/".to_string(),
            output_path: String::new(),
        };
        assert!(config.validate().is_err());
    }
}
