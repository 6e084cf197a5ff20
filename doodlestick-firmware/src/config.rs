//! Embedded configuration loading

use defmt::*;

use doodlestick_core::config::{parse_config, DoodleConfig};

/// Configuration compiled into the firmware (validated by build.rs)
const EMBEDDED_CONFIG: &str = include_str!("../doodle.toml");

/// Parse the embedded configuration, falling back to built-in defaults
pub fn load() -> DoodleConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Parsed embedded configuration successfully");
            config
        }
        Err(e) => {
            warn!("Embedded configuration invalid ({}), using defaults", e);
            DoodleConfig::default()
        }
    }
}
