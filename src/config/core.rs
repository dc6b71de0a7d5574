use crate::errors::ConfigError;
use crate::wrapper::DEFAULT_BINARY;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_RULESET: &str = "PSR12";
pub const DEFAULT_REPORT: &str = "var/codesniff/report.txt";

/// Root configuration structure, read from `.codesniff.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SniffConfig {
    /// Standard name or path to a ruleset directory/XML file
    pub ruleset: String,

    /// Where the full report is written
    pub report: PathBuf,

    /// File extensions to scan; empty means the engine's defaults
    pub extensions: Vec<String>,

    /// Engine binary, either a name on PATH or a path
    pub binary: PathBuf,

    /// Paths scanned when none are given on the command line
    pub paths: Vec<PathBuf>,
}

impl Default for SniffConfig {
    fn default() -> Self {
        Self {
            ruleset: DEFAULT_RULESET.to_string(),
            report: PathBuf::from(DEFAULT_REPORT),
            extensions: vec!["php".to_string()],
            binary: PathBuf::from(DEFAULT_BINARY),
            paths: Vec::new(),
        }
    }
}

impl SniffConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ruleset.trim().is_empty() {
            return Err(ConfigError::Invalid("ruleset must not be empty".to_string()));
        }
        if self.report.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("report must not be empty".to_string()));
        }
        if self.binary.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("binary must not be empty".to_string()));
        }
        Ok(())
    }

    /// Strip leading dots and surrounding whitespace, drop empty entries
    pub fn normalize(&mut self) {
        self.extensions = self
            .extensions
            .iter()
            .map(|ext| ext.trim().trim_start_matches('.').to_string())
            .filter(|ext| !ext.is_empty())
            .collect();
    }

    /// Apply command-line values on top of the file configuration
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(ruleset) = overrides.ruleset {
            self.ruleset = ruleset;
        }
        if let Some(report) = overrides.report {
            self.report = report;
        }
        if let Some(extensions) = overrides.extensions {
            self.extensions = extensions;
        }
        if let Some(binary) = overrides.binary {
            self.binary = binary;
        }
        self.normalize();
        self
    }
}

/// Values supplied on the command line; `None` keeps the file value
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub ruleset: Option<String>,
    pub report: Option<PathBuf>,
    pub extensions: Option<Vec<String>>,
    pub binary: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SniffConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_ruleset_is_invalid() {
        let config = SniffConfig {
            ruleset: "  ".to_string(),
            ..SniffConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = SniffConfig::default().with_overrides(ConfigOverrides {
            ruleset: Some("Magento2".to_string()),
            extensions: Some(vec![".php".to_string(), "phtml".to_string(), " ".to_string()]),
            ..ConfigOverrides::default()
        });

        assert_eq!(config.ruleset, "Magento2");
        assert_eq!(config.extensions, vec!["php", "phtml"]);
        assert_eq!(config.report, PathBuf::from(DEFAULT_REPORT));
        assert_eq!(config.binary, PathBuf::from(DEFAULT_BINARY));
    }
}
