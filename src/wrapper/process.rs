use crate::errors::WrapperError;
use crate::settings::{RunConfiguration, RunOutcome};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

use super::Wrapper;

/// Binary looked up on `PATH` when none is configured.
pub const DEFAULT_BINARY: &str = "phpcs";

const ENGINE: &str = "phpcs";

/// Runs PHP_CodeSniffer as a child process.
///
/// Settings are turned into the command line `phpcs` itself would accept,
/// so a run is equivalent to invoking the binary by hand with
/// [`cli_arguments`].
#[derive(Debug, Clone)]
pub struct PhpcsProcess {
    binary: PathBuf,
    working_dir: Option<PathBuf>,
    settings: Option<RunConfiguration>,
}

impl Default for PhpcsProcess {
    fn default() -> Self {
        Self::new(DEFAULT_BINARY)
    }
}

impl PhpcsProcess {
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            working_dir: None,
            settings: None,
        }
    }

    /// Run the engine from `dir`; relative file and report paths resolve against it.
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Settings applied by the last successful `set_settings`.
    pub fn settings(&self) -> Option<&RunConfiguration> {
        self.settings.as_ref()
    }

    /// Locate the engine binary. Bare names are searched on `PATH`, anything
    /// with a directory component must exist as given.
    pub fn resolve_binary(&self) -> Option<PathBuf> {
        if self.binary.components().count() > 1 || self.binary.is_absolute() {
            let path = self.resolve(&self.binary);
            return path.is_file().then_some(path);
        }
        which::which(&self.binary).ok()
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.working_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn prepare_report_dirs(&self, config: &RunConfiguration) -> Result<(), WrapperError> {
        for report in config.reports.values() {
            let target = self.resolve(report);
            let Some(parent) = target.parent() else {
                continue;
            };
            if parent.as_os_str().is_empty() {
                continue;
            }
            std::fs::create_dir_all(parent).map_err(|source| WrapperError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        Ok(())
    }
}

fn validate(config: &RunConfiguration) -> Result<(), WrapperError> {
    if config.standards.is_empty() {
        return Err(WrapperError::configuration(ENGINE, "no coding standard given"));
    }
    if config.standards.iter().any(|s| s.trim().is_empty()) {
        return Err(WrapperError::configuration(ENGINE, "empty coding standard name"));
    }
    if config.full_report().is_none() {
        return Err(WrapperError::configuration(
            ENGINE,
            "no destination for the full report",
        ));
    }
    Ok(())
}

/// Command-line equivalent of a run configuration.
///
/// Extensions are omitted when empty so the engine falls back to its own
/// defaults; file arguments always come last.
pub fn cli_arguments(config: &RunConfiguration) -> Vec<OsString> {
    let mut args: Vec<OsString> = Vec::with_capacity(config.files.len() + 4);

    args.push(format!("--standard={}", config.standards.join(",")).into());
    if !config.extensions.is_empty() {
        args.push(format!("--extensions={}", config.extensions.join(",")).into());
    }
    args.push(format!("--warning-severity={}", config.warning_severity).into());

    for (format, path) in &config.reports {
        let mut arg = OsString::from(format!("--report-{format}="));
        arg.push(path.as_os_str());
        args.push(arg);
    }

    args.extend(config.files.iter().map(OsString::from));
    args
}

impl Wrapper for PhpcsProcess {
    fn set_settings(&mut self, config: RunConfiguration) -> Result<(), WrapperError> {
        validate(&config)?;
        debug!(
            files = config.files.len(),
            standards = ?config.standards,
            "phpcs settings applied"
        );
        self.settings = Some(config);
        Ok(())
    }

    fn run(&mut self) -> Result<RunOutcome, WrapperError> {
        let config = self.settings.as_ref().ok_or_else(|| WrapperError::NotConfigured {
            engine: ENGINE.to_string(),
        })?;

        self.prepare_report_dirs(config)?;

        let args = cli_arguments(config);
        let mut command = Command::new(&self.binary);
        command.args(&args);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        debug!(binary = %self.binary.display(), ?args, "spawning phpcs");
        let output = command.output().map_err(|source| WrapperError::Spawn {
            program: self.binary.display().to_string(),
            source,
        })?;

        let report = config
            .full_report()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        match output.status.code() {
            Some(code @ 0..=2) => {
                info!(exit_code = code, report = %report.display(), "phpcs finished");
                Ok(RunOutcome::new(code, report))
            }
            Some(code) => Err(WrapperError::execution(
                ENGINE,
                format!("exit code {code}"),
                diagnostic(&output.stderr, &output.stdout),
            )),
            None => Err(WrapperError::execution(
                ENGINE,
                "termination by signal",
                diagnostic(&output.stderr, &output.stdout),
            )),
        }
    }

    fn is_available(&self) -> bool {
        self.resolve_binary().is_some()
    }
}

fn diagnostic(stderr: &[u8], stdout: &[u8]) -> String {
    let stderr = String::from_utf8_lossy(stderr);
    let text = if stderr.trim().is_empty() {
        String::from_utf8_lossy(stdout)
    } else {
        stderr
    };
    text.trim().to_string()
}
