//! The settings mapping handed across the wrapper boundary, and what comes back.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Report format key under which the report destination is registered.
pub const FULL_REPORT: &str = "full";

/// Minimum severity for warnings to be reported. Zero turns warnings off.
pub const WARNINGS_SUPPRESSED: u8 = 0;

/// Settings for a single scan, built fresh by the adapter on every run.
///
/// Serializes with the engine's own key names:
///
/// ```json
/// {
///   "files": ["a.php", "b.php"],
///   "standards": ["some/ruleset/directory"],
///   "extensions": ["php", "phtml"],
///   "warningSeverity": 0,
///   "reports": { "full": "some/report/file.xml" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunConfiguration {
    pub files: Vec<String>,
    pub standards: Vec<String>,
    pub extensions: Vec<String>,
    pub warning_severity: u8,
    pub reports: BTreeMap<String, PathBuf>,
}

impl RunConfiguration {
    /// Assemble the configuration for one run: a single standard, warnings
    /// suppressed and a full report written to `report`.
    pub fn new(
        files: Vec<String>,
        rule_set: impl Into<String>,
        extensions: Vec<String>,
        report: impl Into<PathBuf>,
    ) -> Self {
        let mut reports = BTreeMap::new();
        reports.insert(FULL_REPORT.to_string(), report.into());

        Self {
            files,
            standards: vec![rule_set.into()],
            extensions,
            warning_severity: WARNINGS_SUPPRESSED,
            reports,
        }
    }

    /// Destination of the full report, if one is registered.
    pub fn full_report(&self) -> Option<&Path> {
        self.reports.get(FULL_REPORT).map(PathBuf::as_path)
    }
}

/// Result of a completed scan.
///
/// Exit codes follow the engine's convention: `0` for a clean scan, `1` or
/// `2` when violations were found (`2` meaning some are auto-fixable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    pub exit_code: i32,
    pub report: PathBuf,
}

impl RunOutcome {
    pub fn new(exit_code: i32, report: impl Into<PathBuf>) -> Self {
        Self {
            exit_code,
            report: report.into(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.exit_code == 0
    }

    pub fn has_violations(&self) -> bool {
        self.exit_code != 0
    }
}
