//! Coding-standard tool adapter.
//!
//! [`CodeSniffer`] owns the static part of a scan (which standard to apply,
//! where the report goes, which extensions to scan) and turns each
//! `run(files)` into a fresh [`RunConfiguration`] for its [`Wrapper`].

use crate::errors::WrapperError;
use crate::settings::{RunConfiguration, RunOutcome};
use crate::wrapper::Wrapper;
use std::path::{Path, PathBuf};
use tracing::{debug, info_span};

/// A coding-standard checker that can be asked to scan a list of files.
pub trait CodingStandardTool {
    /// Whether the underlying engine is usable in this environment.
    fn can_run(&self) -> bool;

    /// Scan `files` and report the engine's outcome.
    fn run(&mut self, files: &[String]) -> Result<RunOutcome, WrapperError>;
}

/// A tool whose scan can be narrowed to a set of file extensions.
pub trait ExtensionAware {
    fn set_extensions(&mut self, extensions: Vec<String>);
}

/// Adapter from a rule set and report destination to a [`Wrapper`] call pair.
///
/// Every `run` performs exactly one `set_settings` followed by exactly one
/// `run` on the wrapper. Errors from either step are returned unchanged; if
/// `set_settings` fails the scan is not started.
///
/// ```
/// use codesniff::testkit::{RecordingWrapper, WrapperCall};
/// use codesniff::{CodeSniffer, RunConfiguration};
///
/// let mut sniffer = CodeSniffer::new("PSR12", "report.txt", RecordingWrapper::new());
/// sniffer.set_extensions(vec!["php".into()]);
/// sniffer.run(&["src/Foo.php".to_string()]).unwrap();
///
/// let expected = RunConfiguration::new(
///     vec!["src/Foo.php".into()],
///     "PSR12",
///     vec!["php".into()],
///     "report.txt",
/// );
/// assert_eq!(
///     sniffer.wrapper().calls(),
///     vec![WrapperCall::SetSettings(expected), WrapperCall::Run]
/// );
/// ```
#[derive(Debug)]
pub struct CodeSniffer<W> {
    rule_set: String,
    report_destination: PathBuf,
    extensions: Vec<String>,
    wrapper: W,
}

impl<W: Wrapper> CodeSniffer<W> {
    pub fn new(
        rule_set: impl Into<String>,
        report_destination: impl Into<PathBuf>,
        wrapper: W,
    ) -> Self {
        Self {
            rule_set: rule_set.into(),
            report_destination: report_destination.into(),
            extensions: Vec::new(),
            wrapper,
        }
    }

    /// Replace the extensions scanned by subsequent runs.
    pub fn set_extensions(&mut self, extensions: Vec<String>) {
        self.extensions = extensions;
    }

    pub fn rule_set(&self) -> &str {
        &self.rule_set
    }

    pub fn report_destination(&self) -> &Path {
        &self.report_destination
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn wrapper(&self) -> &W {
        &self.wrapper
    }

    pub fn wrapper_mut(&mut self) -> &mut W {
        &mut self.wrapper
    }

    pub fn into_wrapper(self) -> W {
        self.wrapper
    }

    /// Settings a run over `files` would hand to the wrapper right now.
    pub fn configuration_for(&self, files: &[String]) -> RunConfiguration {
        RunConfiguration::new(
            files.to_vec(),
            self.rule_set.clone(),
            self.extensions.clone(),
            self.report_destination.clone(),
        )
    }

    pub fn can_run(&self) -> bool {
        self.wrapper.is_available()
    }

    /// Configure the wrapper for `files` and run it once.
    ///
    /// # Errors
    ///
    /// Whatever the wrapper returns from `set_settings` or `run`, unchanged.
    pub fn run(&mut self, files: &[String]) -> Result<RunOutcome, WrapperError> {
        let _span = info_span!("code_sniffer", rule_set = %self.rule_set).entered();

        let config = self.configuration_for(files);
        debug!(
            files = config.files.len(),
            extensions = ?config.extensions,
            "applying settings"
        );
        self.wrapper.set_settings(config)?;
        self.wrapper.run()
    }
}

impl<W: Wrapper> CodingStandardTool for CodeSniffer<W> {
    fn can_run(&self) -> bool {
        CodeSniffer::can_run(self)
    }

    fn run(&mut self, files: &[String]) -> Result<RunOutcome, WrapperError> {
        CodeSniffer::run(self, files)
    }
}

impl<W: Wrapper> ExtensionAware for CodeSniffer<W> {
    fn set_extensions(&mut self, extensions: Vec<String>) {
        CodeSniffer::set_extensions(self, extensions);
    }
}
