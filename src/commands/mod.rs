//! CLI command implementations.
//!
//! - **run**: check files through the tool adapter and the phpcs process wrapper
//! - **check**: report whether the engine binary can be found
//! - **init**: write a default `.codesniff.toml`

pub mod check;
pub mod init;
pub mod run;

pub use check::{check_engine, CheckConfig};
pub use init::{init_config, init_config_in};
pub use run::{load_config, run_standards, RunConfig, RunStatus};
