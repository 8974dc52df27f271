//! User configuration for `gone`.
//!
//! A single optional TOML file, by default `<config_dir>/gone/config.toml`.
//! A missing file means defaults.

pub mod parser;
pub mod paths;
pub mod schema;
pub mod store;

pub use parser::{parse_config, parse_config_str};
pub use paths::default_config_path;
pub use schema::GoneConfig;
pub use store::ConfigStore;
