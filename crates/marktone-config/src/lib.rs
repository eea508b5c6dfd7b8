use marktone_engine::{Features, MarkdownProcessor, RuleError, RuleSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to build rule table: {0}")]
    RuleError(#[from] RuleError),
}

/// User configuration: which Markdown features are on, and extra reference entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub features: Features,
    /// Lookup entries for reference links and images, available to every document.
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in lookup values (local image paths)
        for value in config.metadata.values_mut() {
            if let Some(expanded) = Self::expand_value(value) {
                *value = expanded;
            }
        }

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/marktone");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Builds a processor with the enabled features and the configured lookup entries.
    pub fn processor(&self) -> Result<MarkdownProcessor, ConfigError> {
        let rules = RuleSet::markdown(&self.features)?;
        Ok(MarkdownProcessor::new(rules).with_metadata_lookup(self.metadata.clone()))
    }

    fn expand_value(value: &str) -> Option<String> {
        shellexpand::full(value)
            .ok()
            .map(|expanded| expanded.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marktone_engine::CharacterStyle;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        // Should contain the expected config file name
        assert!(path_str.ends_with(".config/marktone/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            features: Features {
                mentions: false,
                ..Features::default()
            },
            metadata: BTreeMap::from([("home".to_string(), "https://example.com".to_string())]),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config: Config = toml::from_str(
            r#"
[features]
emphasis = false
"#,
        )
        .unwrap();

        assert!(!config.features.emphasis);
        assert!(config.features.links);
        assert!(config.features.preserve_empty_lines);
        assert!(config.metadata.is_empty());

        let empty: Config = toml::from_str("").unwrap();
        assert_eq!(empty, Config::default());
    }

    #[test]
    fn test_expand_value_with_tilde() {
        let expanded = Config::expand_value("~/images/logo.png").unwrap();

        assert!(!expanded.starts_with('~'));
        assert!(expanded.ends_with("images/logo.png"));
    }

    #[test]
    fn test_expand_value_with_env_var() {
        unsafe {
            env::set_var("MARKTONE_TEST_ASSETS", "/test/assets");
        }

        let expanded = Config::expand_value("$MARKTONE_TEST_ASSETS/cat.png");
        assert_eq!(expanded.as_deref(), Some("/test/assets/cat.png"));

        unsafe {
            env::remove_var("MARKTONE_TEST_ASSETS");
        }
    }

    #[test]
    fn test_expand_value_leaves_urls_alone() {
        let url = "https://example.com/docs";
        assert_eq!(Config::expand_value(url).as_deref(), Some(url));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_config_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[features]\nlists = \"yes\"").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/dir/config.toml");
        let test_config = Config {
            features: Features {
                hidden_blocks: false,
                ..Features::default()
            },
            metadata: BTreeMap::from([("docs".to_string(), "/docs".to_string())]),
        };

        // Test saving (creates parent directories)
        test_config.save_to_path(&config_file).unwrap();

        // Test loading
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_processor_uses_features_and_metadata() {
        let config = Config {
            features: Features {
                emphasis: false,
                ..Features::default()
            },
            metadata: BTreeMap::from([("docs".to_string(), "/docs".to_string())]),
        };

        let doc = config.processor().unwrap().process("*plain* [read][docs]");
        let tokens = &doc.lines[0].tokens;

        assert_eq!(tokens[0].text, "*plain* ");
        assert!(tokens[0].styles.is_empty());
        assert_eq!(tokens[1].text, "read");
        assert_eq!(tokens[1].styles, vec![CharacterStyle::Link]);
        assert_eq!(tokens[1].metadata, vec!["/docs".to_string()]);
    }
}
