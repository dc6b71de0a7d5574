use super::run::{anchored, load_config};
use crate::config::ConfigOverrides;
use crate::wrapper::PhpcsProcess;
use anyhow::Result;
use colored::*;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    pub binary: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
}

/// Print where the engine binary resolves to. Returns `false` when it cannot be found.
pub fn check_engine(check: CheckConfig) -> Result<bool> {
    let loaded = load_config(check.config_path.as_deref())?;
    let config = anchored(loaded).with_overrides(ConfigOverrides {
        binary: check.binary,
        ..ConfigOverrides::default()
    });

    let wrapper = PhpcsProcess::new(config.binary.clone());
    match wrapper.resolve_binary() {
        Some(path) => {
            println!("{} phpcs found at {}", "✓".green(), path.display());
            Ok(true)
        }
        None => {
            println!(
                "{} {} not found",
                "✗".red(),
                config.binary.display().to_string().bold()
            );
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_binary_path_is_found() {
        let temp_dir = TempDir::new().unwrap();
        let binary = temp_dir.path().join("phpcs");
        std::fs::write(&binary, "#!/bin/sh\n").unwrap();
        let config = temp_dir.path().join(".codesniff.toml");
        std::fs::write(&config, "").unwrap();

        let found = check_engine(CheckConfig {
            binary: Some(binary),
            config_path: Some(config),
        })
        .unwrap();
        assert!(found);
    }

    #[test]
    fn test_missing_binary_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join(".codesniff.toml");
        std::fs::write(&config, "binary = \"bin/phpcs\"\n").unwrap();

        let found = check_engine(CheckConfig {
            binary: None,
            config_path: Some(config),
        })
        .unwrap();
        assert!(!found);
    }
}
