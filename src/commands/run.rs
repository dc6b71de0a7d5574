use crate::config::{discover_config, load_config_file, ConfigOverrides, LoadedConfig, SniffConfig};
use crate::files::collect_files;
use crate::tool::CodeSniffer;
use crate::wrapper::PhpcsProcess;
use anyhow::{bail, Context, Result};
use colored::*;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Everything the `run` command needs, already parsed from the command line
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    pub paths: Vec<PathBuf>,
    pub overrides: ConfigOverrides,
    pub config_path: Option<PathBuf>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Clean,
    Violations,
}

impl RunStatus {
    pub fn exit_code(self) -> u8 {
        match self {
            RunStatus::Clean => 0,
            RunStatus::Violations => 1,
        }
    }
}

/// Load the named config file, or discover one from the current directory
pub fn load_config(config_path: Option<&Path>) -> Result<LoadedConfig> {
    match config_path {
        Some(path) => Ok(load_config_file(path)?),
        None => {
            let cwd = std::env::current_dir().context("Failed to determine current directory")?;
            Ok(discover_config(&cwd))
        }
    }
}

fn anchor(path: &Path, root: Option<&Path>) -> PathBuf {
    match root {
        Some(root) if path.is_relative() => root.join(path),
        _ => path.to_path_buf(),
    }
}

/// Resolve relative paths from the config file against the file's directory.
/// A bare binary name stays as-is so it is still looked up on PATH.
pub(crate) fn anchored(loaded: LoadedConfig) -> SniffConfig {
    let root = loaded.root().map(Path::to_path_buf);
    let root = root.as_deref();
    let mut config = loaded.config;

    config.report = anchor(&config.report, root);
    config.paths = config.paths.iter().map(|p| anchor(p, root)).collect();
    if config.binary.components().count() > 1 {
        config.binary = anchor(&config.binary, root);
    }
    config
}

pub fn run_standards(run: RunConfig) -> Result<RunStatus> {
    let loaded = load_config(run.config_path.as_deref())?;
    let config = anchored(loaded).with_overrides(run.overrides);

    let paths = if run.paths.is_empty() {
        config.paths.clone()
    } else {
        run.paths
    };
    if paths.is_empty() {
        bail!("No paths to check: pass paths or set `paths` in the config file");
    }

    let files = collect_files(&paths, &config.extensions)?;
    info!(files = files.len(), ruleset = %config.ruleset, "collected files");

    let mut sniffer = CodeSniffer::new(
        config.ruleset.clone(),
        config.report.clone(),
        PhpcsProcess::new(config.binary.clone()),
    );
    sniffer.set_extensions(config.extensions.clone());

    if run.dry_run {
        let settings = sniffer.configuration_for(&files);
        println!("{}", serde_json::to_string_pretty(&settings)?);
        return Ok(RunStatus::Clean);
    }

    if files.is_empty() {
        warn!("no files matched {:?}", config.extensions);
        println!("{} no matching files to check", "✓".green());
        return Ok(RunStatus::Clean);
    }

    if !sniffer.can_run() {
        bail!(
            "{} not found; install PHP_CodeSniffer or set `binary` in the config file",
            config.binary.display()
        );
    }

    let outcome = sniffer.run(&files)?;

    if outcome.is_clean() {
        println!(
            "{} {} files comply with {}",
            "✓".green(),
            files.len(),
            config.ruleset.bold()
        );
        Ok(RunStatus::Clean)
    } else {
        println!(
            "{} {} violations found; report written to {}",
            "✗".red(),
            config.ruleset.bold(),
            outcome.report.display()
        );
        Ok(RunStatus::Violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE_NAME;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &Path, contents: &str) -> PathBuf {
        let path = dir.join(CONFIG_FILE_NAME);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_anchored_resolves_against_config_dir() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            temp_dir.path(),
            "report = \"out/report.txt\"\npaths = [\"app\"]\nbinary = \"vendor/bin/phpcs\"\n",
        );

        let config = anchored(load_config(Some(&path)).unwrap());
        assert_eq!(config.report, temp_dir.path().join("out/report.txt"));
        assert_eq!(config.paths, vec![temp_dir.path().join("app")]);
        assert_eq!(config.binary, temp_dir.path().join("vendor/bin/phpcs"));
    }

    #[test]
    fn test_anchored_keeps_bare_binary_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(temp_dir.path(), "binary = \"phpcs\"\n");

        let config = anchored(load_config(Some(&path)).unwrap());
        assert_eq!(config.binary, PathBuf::from("phpcs"));
    }

    #[test]
    fn test_missing_engine_is_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("A.php"), "<?php\n").unwrap();
        let path = write_config(temp_dir.path(), "binary = \"./no/such/phpcs\"\n");

        let err = run_standards(RunConfig {
            paths: vec![temp_dir.path().to_path_buf()],
            config_path: Some(path),
            ..RunConfig::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_dry_run_does_not_need_engine() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("A.php"), "<?php\n").unwrap();
        let path = write_config(temp_dir.path(), "binary = \"./no/such/phpcs\"\n");

        let status = run_standards(RunConfig {
            paths: vec![temp_dir.path().to_path_buf()],
            config_path: Some(path),
            dry_run: true,
            ..RunConfig::default()
        })
        .unwrap();
        assert_eq!(status, RunStatus::Clean);
    }

    #[test]
    fn test_no_paths_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(temp_dir.path(), "ruleset = \"PSR12\"\n");

        let err = run_standards(RunConfig {
            config_path: Some(path),
            ..RunConfig::default()
        })
        .unwrap_err();
        assert!(err.to_string().contains("No paths"));
    }
}
