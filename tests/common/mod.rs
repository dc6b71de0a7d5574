// Test utility module for codesniff integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const RULE_SET: &str = "some/ruleset/directory";
pub const REPORT_FILE: &str = "some/report/file.xml";

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Shell script standing in for phpcs: records its arguments to `args.txt`
/// next to itself, writes `stderr` to stderr and exits with `exit_code`.
#[cfg(unix)]
pub fn write_fake_phpcs(dir: &Path, name: &str, exit_code: i32, stderr: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = dir.join(name);
    let args_file = dir.join(format!("{name}.args"));
    let body = format!(
        "#!/bin/sh\nprintf '%s\\n' \"$@\" > '{}'\nprintf '%s' '{}' >&2\nexit {}\n",
        args_file.display(),
        stderr,
        exit_code
    );
    fs::write(&script, body).unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
    script
}

/// Arguments recorded by a fake phpcs script, one per line.
pub fn recorded_args(dir: &Path, name: &str) -> Vec<String> {
    fs::read_to_string(dir.join(format!("{name}.args")))
        .unwrap()
        .lines()
        .map(String::from)
        .collect()
}
