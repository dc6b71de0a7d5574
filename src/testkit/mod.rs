//! Test doubles for the wrapper boundary.
//!
//! [`RecordingWrapper`] stands in for the static-analysis engine: it records
//! every call the adapter makes, in order, and answers with a configurable
//! outcome or error. Clones share the same log, so a test can hand one clone
//! to the adapter and inspect the other afterwards.
//!
//! # Quick Start
//!
//! ```rust
//! use codesniff::testkit::{RecordingWrapper, WrapperCall};
//! use codesniff::CodeSniffer;
//!
//! let recorder = RecordingWrapper::new();
//! let mut sniffer = CodeSniffer::new("PSR12", "report.txt", recorder.clone());
//! sniffer.run(&["a.php".to_string()]).unwrap();
//!
//! assert_eq!(recorder.run_count(), 1);
//! assert!(matches!(recorder.calls()[0], WrapperCall::SetSettings(_)));
//! ```

mod recording;

pub use recording::{RecordingWrapper, WrapperCall};
