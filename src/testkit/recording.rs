use crate::errors::WrapperError;
use crate::settings::{RunConfiguration, RunOutcome};
use crate::wrapper::Wrapper;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// One call observed by a [`RecordingWrapper`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WrapperCall {
    SetSettings(RunConfiguration),
    Run,
}

#[derive(Debug, Default)]
struct State {
    calls: Vec<WrapperCall>,
    last_settings: Option<RunConfiguration>,
    settings_error: Option<WrapperError>,
    run_error: Option<WrapperError>,
}

/// In-memory [`Wrapper`] that records calls instead of running an engine.
///
/// By default every call succeeds and `run` reports a clean scan against the
/// full report of the last settings received.
#[derive(Debug, Clone)]
pub struct RecordingWrapper {
    state: Arc<RwLock<State>>,
    exit_code: i32,
    available: bool,
}

impl Default for RecordingWrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingWrapper {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(State::default())),
            exit_code: 0,
            available: true,
        }
    }

    /// Exit code reported by successful runs.
    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }

    /// Report the engine as missing from `is_available`.
    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    /// Fail the next `set_settings` call with `error`.
    pub fn failing_settings(self, error: WrapperError) -> Self {
        self.state.write().expect("Lock poisoned").settings_error = Some(error);
        self
    }

    /// Fail the next `run` call with `error`.
    pub fn failing_run(self, error: WrapperError) -> Self {
        self.state.write().expect("Lock poisoned").run_error = Some(error);
        self
    }

    /// Every call received so far, oldest first.
    pub fn calls(&self) -> Vec<WrapperCall> {
        self.state.read().expect("Lock poisoned").calls.clone()
    }

    /// Configurations received through `set_settings`, oldest first.
    pub fn settings_calls(&self) -> Vec<RunConfiguration> {
        self.state
            .read()
            .expect("Lock poisoned")
            .calls
            .iter()
            .filter_map(|call| match call {
                WrapperCall::SetSettings(config) => Some(config.clone()),
                WrapperCall::Run => None,
            })
            .collect()
    }

    pub fn run_count(&self) -> usize {
        self.state
            .read()
            .expect("Lock poisoned")
            .calls
            .iter()
            .filter(|call| matches!(call, WrapperCall::Run))
            .count()
    }

    /// Forget recorded calls, keeping configured responses.
    pub fn clear(&self) {
        let mut state = self.state.write().expect("Lock poisoned");
        state.calls.clear();
        state.last_settings = None;
    }
}

impl Wrapper for RecordingWrapper {
    fn set_settings(&mut self, config: RunConfiguration) -> Result<(), WrapperError> {
        let mut state = self.state.write().expect("Lock poisoned");
        state.calls.push(WrapperCall::SetSettings(config.clone()));
        if let Some(err) = state.settings_error.take() {
            return Err(err);
        }
        state.last_settings = Some(config);
        Ok(())
    }

    fn run(&mut self) -> Result<RunOutcome, WrapperError> {
        let mut state = self.state.write().expect("Lock poisoned");
        state.calls.push(WrapperCall::Run);
        if let Some(err) = state.run_error.take() {
            return Err(err);
        }
        let report = state
            .last_settings
            .as_ref()
            .and_then(RunConfiguration::full_report)
            .unwrap_or(Path::new(""))
            .to_path_buf();
        Ok(RunOutcome::new(self.exit_code, report))
    }

    fn is_available(&self) -> bool {
        self.available
    }
}
