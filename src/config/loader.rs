use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::core::SniffConfig;
use crate::errors::ConfigError;

pub const CONFIG_FILE_NAME: &str = ".codesniff.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// A configuration together with the file it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: SniffConfig,
    pub source: Option<PathBuf>,
}

impl LoadedConfig {
    /// Directory relative paths in the configuration are resolved against
    pub fn root(&self) -> Option<&Path> {
        self.source.as_deref().and_then(Path::parent)
    }
}

/// Pure function to parse and validate config from TOML string
pub fn parse_config(contents: &str, path: &Path) -> Result<SniffConfig, ConfigError> {
    let mut config = toml::from_str::<SniffConfig>(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    config.normalize();
    config.validate()?;
    Ok(config)
}

/// Load an explicitly named config file; every failure is an error
pub fn load_config_file(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&contents, path)?;
    debug!("Loaded config from {}", path.display());
    Ok(LoadedConfig {
        config,
        source: Some(path.to_path_buf()),
    })
}

/// Generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

fn try_load_config_from_path(config_path: &Path) -> Option<LoadedConfig> {
    match load_config_file(config_path) {
        Ok(loaded) => Some(loaded),
        Err(ConfigError::Read { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            None
        }
        Err(e) => {
            warn!("Ignoring {}: {}", config_path.display(), e);
            None
        }
    }
}

/// Search `start` and its ancestors for `.codesniff.toml`, falling back to defaults
pub fn discover_config(start: &Path) -> LoadedConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            LoadedConfig {
                config: SniffConfig::default(),
                source: None,
            }
        })
}

/// Contents written by `codesniff init`
pub fn default_config_toml() -> String {
    let defaults = SniffConfig::default();
    format!(
        r#"# codesniff configuration

# Standard name (e.g. PSR12) or path to a ruleset
ruleset = "{ruleset}"

# Destination of the full report
report = "{report}"

# Extensions to scan; leave empty for the engine's defaults
extensions = ["php", "phtml"]

# PHP_CodeSniffer binary, looked up on PATH unless it contains a directory
binary = "{binary}"

# Paths scanned when none are given on the command line
paths = ["app", "lib"]
"#,
        ruleset = defaults.ruleset,
        report = defaults.report.display(),
        binary = defaults.binary.display(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_parse_partial_config_uses_defaults() {
        let config = parse_config(
            indoc! {r#"
                ruleset = "dev/tests/static/Magento"
                extensions = [".php", "phtml"]
            "#},
            Path::new(".codesniff.toml"),
        )
        .unwrap();

        assert_eq!(config.ruleset, "dev/tests/static/Magento");
        assert_eq!(config.extensions, vec!["php", "phtml"]);
        assert_eq!(config.binary, SniffConfig::default().binary);
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        let err = parse_config("rules = \"PSR12\"", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_parse_rejects_empty_ruleset() {
        let err = parse_config("ruleset = \"\"", Path::new("x.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_default_config_toml_round_trips() {
        let config = parse_config(&default_config_toml(), Path::new("x.toml")).unwrap();
        assert_eq!(config.ruleset, SniffConfig::default().ruleset);
        assert_eq!(config.paths, vec![PathBuf::from("app"), PathBuf::from("lib")]);
    }

    #[test]
    fn test_directory_ancestors_respects_depth() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c"), PathBuf::from("/a/b")]);
    }
}
