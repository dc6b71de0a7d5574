use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "codesniff")]
#[command(about = "Coding-standard checks through PHP_CodeSniffer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check files against the configured coding standard
    Run {
        /// Files or directories to check (defaults to `paths` in the config file)
        paths: Vec<PathBuf>,

        /// Standard name or ruleset path
        #[arg(long, env = "CODESNIFF_RULESET")]
        ruleset: Option<String>,

        /// Destination of the full report
        #[arg(long)]
        report: Option<PathBuf>,

        /// Extensions to scan
        #[arg(long, value_delimiter = ',')]
        extensions: Option<Vec<String>>,

        /// PHP_CodeSniffer binary
        #[arg(long, env = "CODESNIFF_BINARY")]
        binary: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .codesniff.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the engine settings as JSON instead of running the engine
        #[arg(long = "dry-run")]
        dry_run: bool,
    },

    /// Report whether the engine binary can be found
    Check {
        /// PHP_CodeSniffer binary
        #[arg(long, env = "CODESNIFF_BINARY")]
        binary: Option<PathBuf>,

        /// Configuration file (defaults to the nearest .codesniff.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
