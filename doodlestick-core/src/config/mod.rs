//! Configuration types and parser
//!
//! Configuration is a small TOML file embedded in the firmware image.
//! Everything has a default, so a missing file or section still boots.

pub mod toml;
pub mod types;

pub use toml::{parse_config, ParseError};
pub use types::*;
