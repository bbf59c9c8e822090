//! Session configuration for test-vector generation.
//!
//! Everything a generation run needs is carried in an explicit
//! [`SessionConfig`] (loaded from `testvec.toml`) rather than read from
//! ambient process state: the bench entity name, the vector file names, the
//! transaction count, and the RNG seed. HDL generics come in through
//! [`generics`]: defaults extracted from captured entity source listings,
//! overridden by `-g NAME=VALUE` command-line arguments.

#![warn(missing_docs)]

pub mod error;
pub mod generics;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use generics::{
    parse_entity_constants, parse_vhdl_bool, parse_vhdl_option, GenericOverrides, Generics,
};
pub use loader::{load_config, load_config_from_str};
pub use types::{BenchConfig, SessionConfig, VectorConfig};
