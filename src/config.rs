//! YAML Configuration File Support for titleguard
//!
//! Loads the detector settings from a single YAML file so hosts and the CLI
//! share one source of truth. Every field is optional except `version`.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "editorial site"
//!
//! tokenizer:
//!   normalize_unicode: false
//!
//! detector:
//!   allow_duplicates: false
//!   limit: 1000
//!   similarity_threshold: 0.5
//!   max_similar_items: 6
//!   use_parallel: false
//! ```

use std::fs;
use std::path::Path;

use canonical::TokenizerConfig;
use matcher::MatchConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct TitleGuardConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub tokenizer: TokenizerYamlConfig,

    #[serde(default)]
    pub detector: DetectorYamlConfig,
}

impl TitleGuardConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: TitleGuardConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.match_config().map(|_| ())
    }

    /// Runtime configuration for `TitleMatcher`.
    pub fn into_match_config(self) -> Result<MatchConfig, ConfigLoadError> {
        self.match_config()
    }

    /// Detector settings mapped onto `MatchConfig`, validated by its own rules.
    fn match_config(&self) -> Result<MatchConfig, ConfigLoadError> {
        let detector = &self.detector;
        let cfg = MatchConfig {
            corpus_limit: detector.limit,
            similarity_threshold: detector.similarity_threshold,
            max_neighbors_per_item: detector.max_similar_items,
            allow_duplicate_titles: detector.allow_duplicates,
            tokenizer: TokenizerConfig {
                normalize_unicode: self.tokenizer.normalize_unicode,
            },
            use_parallel: detector.use_parallel,
        };
        cfg.validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;
        Ok(cfg)
    }
}

impl Default for TitleGuardConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            tokenizer: TokenizerYamlConfig::default(),
            detector: DetectorYamlConfig::default(),
        }
    }
}

/// Tokenizer YAML configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenizerYamlConfig {
    #[serde(default)]
    pub normalize_unicode: bool,
}

/// Detector YAML configuration, named after the host settings it mirrors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectorYamlConfig {
    #[serde(default)]
    pub allow_duplicates: bool,

    #[serde(default = "default_limit")]
    pub limit: usize,

    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    #[serde(default = "default_max_similar_items")]
    pub max_similar_items: usize,

    #[serde(default)]
    pub use_parallel: bool,
}

impl Default for DetectorYamlConfig {
    fn default() -> Self {
        Self {
            allow_duplicates: false,
            limit: default_limit(),
            similarity_threshold: default_similarity_threshold(),
            max_similar_items: default_max_similar_items(),
            use_parallel: false,
        }
    }
}

// Helper functions for serde defaults
fn default_limit() -> usize {
    1000
}
fn default_similarity_threshold() -> f64 {
    0.5
}
fn default_max_similar_items() -> usize {
    6
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
detector:
  similarity_threshold: 0.7
  max_similar_items: 3
"#;

        let config = TitleGuardConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.detector.similarity_threshold, 0.7);
        assert_eq!(config.detector.max_similar_items, 3);
        assert_eq!(config.detector.limit, 1000);
        assert!(!config.detector.allow_duplicates);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
detector:
  allow_duplicates: true
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = TitleGuardConfig::from_file(temp_file.path()).unwrap();
        assert!(config.detector.allow_duplicates);
    }

    #[test]
    fn test_missing_file() {
        let result = TitleGuardConfig::from_file("/definitely/not/here.yaml");
        assert!(matches!(result, Err(ConfigLoadError::FileRead(_))));
    }

    #[test]
    fn test_default_config_matches_match_config() {
        let cfg = TitleGuardConfig::default().into_match_config().unwrap();
        assert_eq!(cfg, MatchConfig::default());
    }

    #[test]
    fn test_unsupported_version() {
        let result = TitleGuardConfig::from_yaml("version: \"2\"\n");
        assert!(matches!(
            result,
            Err(ConfigLoadError::UnsupportedVersion(v)) if v == "2"
        ));
    }

    #[test]
    fn test_threshold_validation() {
        let yaml = r#"
version: "1.0"
detector:
  similarity_threshold: 1.5
"#;

        let result = TitleGuardConfig::from_yaml(yaml);
        assert!(result.unwrap_err().to_string().contains("similarity_threshold"));
    }

    #[test]
    fn test_zero_limit_validation() {
        let yaml = r#"
version: "1.0"
detector:
  limit: 0
"#;

        let result = TitleGuardConfig::from_yaml(yaml);
        assert!(matches!(
            result,
            Err(ConfigLoadError::Validation(msg)) if msg.contains("corpus_limit")
        ));
    }

    #[test]
    fn test_into_match_config_rechecks_edited_values() {
        let mut config = TitleGuardConfig::default();
        config.detector.max_similar_items = 0;

        let result = config.into_match_config();
        assert!(matches!(
            result,
            Err(ConfigLoadError::Validation(msg)) if msg.contains("max_neighbors_per_item")
        ));
    }

    #[test]
    fn test_into_match_config() {
        let yaml = r#"
version: "1.0"
tokenizer:
  normalize_unicode: true
detector:
  allow_duplicates: true
  limit: 50
  similarity_threshold: 0.3
  max_similar_items: 2
  use_parallel: true
"#;

        let cfg = TitleGuardConfig::from_yaml(yaml)
            .unwrap()
            .into_match_config()
            .unwrap();
        assert_eq!(cfg.corpus_limit, 50);
        assert_eq!(cfg.similarity_threshold, 0.3);
        assert_eq!(cfg.max_neighbors_per_item, 2);
        assert!(cfg.allow_duplicate_titles);
        assert!(cfg.tokenizer.normalize_unicode);
        assert!(cfg.use_parallel);
    }

    #[test]
    fn test_malformed_yaml() {
        let result = TitleGuardConfig::from_yaml("version: [unclosed");
        assert!(matches!(result, Err(ConfigLoadError::YamlParse(_))));
    }
}
