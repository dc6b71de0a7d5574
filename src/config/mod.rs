//! `.codesniff.toml` configuration: the rule set, report destination and
//! extension list the tool adapter is constructed with.

mod core;
mod loader;

pub use self::core::{ConfigOverrides, SniffConfig, DEFAULT_REPORT, DEFAULT_RULESET};
pub use loader::{
    default_config_toml, directory_ancestors, discover_config, load_config_file, parse_config,
    LoadedConfig, CONFIG_FILE_NAME,
};
