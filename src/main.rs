use clap::Parser;
use codesniff::cli::{Cli, Commands};
use codesniff::commands::{self, CheckConfig, RunConfig};
use codesniff::config::ConfigOverrides;
use codesniff::observability::init_tracing;
use colored::*;
use std::process::ExitCode;

const ERROR_EXIT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);
    if cli.plain {
        colored::control::set_override(false);
    }

    match dispatch(cli.command) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::from(ERROR_EXIT)
        }
    }
}

fn dispatch(command: Commands) -> anyhow::Result<u8> {
    match command {
        Commands::Run {
            paths,
            ruleset,
            report,
            extensions,
            binary,
            config,
            dry_run,
        } => {
            let run = RunConfig {
                paths,
                overrides: ConfigOverrides {
                    ruleset,
                    report,
                    extensions,
                    binary,
                },
                config_path: config,
                dry_run,
            };
            Ok(commands::run_standards(run)?.exit_code())
        }
        Commands::Check { binary, config } => {
            let found = commands::check_engine(CheckConfig {
                binary,
                config_path: config,
            })?;
            Ok(if found { 0 } else { 1 })
        }
        Commands::Init { force } => {
            commands::init_config(force)?;
            Ok(0)
        }
    }
}
