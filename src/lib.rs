//! Coding-standard checks through an external PHP_CodeSniffer engine.
//!
//! The core is [`CodeSniffer`], a tool adapter that turns a rule set, a
//! report destination and an extension list into a [`RunConfiguration`] and
//! hands it to a [`Wrapper`] around the engine. [`PhpcsProcess`] runs the
//! real `phpcs` binary; [`testkit::RecordingWrapper`] records calls instead.

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod files;
pub mod observability;
pub mod settings;
pub mod testkit;
pub mod tool;
pub mod wrapper;

// Re-export commonly used types
pub use crate::config::{ConfigOverrides, SniffConfig};
pub use crate::errors::{ConfigError, WrapperError};
pub use crate::files::{collect_files, FileCollector};
pub use crate::settings::{RunConfiguration, RunOutcome, FULL_REPORT, WARNINGS_SUPPRESSED};
pub use crate::tool::{CodeSniffer, CodingStandardTool, ExtensionAware};
pub use crate::wrapper::{PhpcsProcess, Wrapper};
