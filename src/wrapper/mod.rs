//! Boundary between the tool adapter and the static-analysis engine.
//!
//! A [`Wrapper`] accepts a [`RunConfiguration`] and later executes it. The
//! adapter only ever talks to this trait, so the real engine
//! ([`PhpcsProcess`]) and test doubles
//! ([`RecordingWrapper`](crate::testkit::RecordingWrapper)) are
//! interchangeable.

mod process;

pub use process::{cli_arguments, PhpcsProcess, DEFAULT_BINARY};

use crate::errors::WrapperError;
use crate::settings::{RunConfiguration, RunOutcome};

/// Invocation surface of an external coding-standard engine.
pub trait Wrapper {
    /// Store the settings for the next run.
    ///
    /// # Errors
    ///
    /// Returns [`WrapperError::Configuration`] when the engine cannot accept
    /// the configuration.
    fn set_settings(&mut self, config: RunConfiguration) -> Result<(), WrapperError>;

    /// Execute a scan with the most recently applied settings.
    ///
    /// # Errors
    ///
    /// Returns an execution, spawn or I/O error when the scan cannot complete.
    fn run(&mut self) -> Result<RunOutcome, WrapperError>;

    /// Whether the engine can be invoked at all.
    fn is_available(&self) -> bool {
        true
    }
}

impl<W: Wrapper + ?Sized> Wrapper for &mut W {
    fn set_settings(&mut self, config: RunConfiguration) -> Result<(), WrapperError> {
        (**self).set_settings(config)
    }

    fn run(&mut self) -> Result<RunOutcome, WrapperError> {
        (**self).run()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}

impl<W: Wrapper + ?Sized> Wrapper for Box<W> {
    fn set_settings(&mut self, config: RunConfiguration) -> Result<(), WrapperError> {
        (**self).set_settings(config)
    }

    fn run(&mut self) -> Result<RunOutcome, WrapperError> {
        (**self).run()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }
}
