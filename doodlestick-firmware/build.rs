//! Build script for doodlestick-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates doodle.toml before it is embedded

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Keys accepted in each section, with an inclusive integer range
/// (`None` for string keys)
const SCHEMA: &[(&str, &[(&str, Option<(i64, i64)>)])] = &[
    (
        "joystick",
        &[
            ("neutral_x", Some((0, 4095))),
            ("neutral_y", Some((0, 4095))),
            ("threshold", Some((0, 4095))),
        ],
    ),
    ("cursor", &[("blink_threshold", Some((1, 255)))]),
    (
        "timer",
        &[("base_tick_ms", Some((1, 60_000))), ("prescaler", Some((0, 255)))],
    ),
    ("keypad", &[("repeat", None)]),
];

const REPEAT_POLICIES: &[&str] = &["on_press", "every_poll"];

/// Validate doodle.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=doodle.toml");

    let config_path = Path::new("doodle.toml");
    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: doodle.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds doodle.toml from the firmware directory.    ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => panic!("\nERROR: Failed to read doodle.toml: {}\n", e),
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => panic!("\nERROR: Invalid TOML syntax in doodle.toml:\n{}\n", e),
    };

    let errors = check_schema(&config);
    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid doodlestick configuration                        ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

fn check_schema(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let root = match config.as_table() {
        Some(t) => t,
        None => return vec!["top level must be a table".to_string()],
    };

    for (section, body) in root {
        let keys = match SCHEMA.iter().find(|(name, _)| name == section) {
            Some((_, keys)) => keys,
            None => {
                errors.push(format!("unknown section [{}]", section));
                continue;
            }
        };

        let body = match body.as_table() {
            Some(t) => t,
            None => {
                errors.push(format!("[{}] must be a table", section));
                continue;
            }
        };

        for (key, value) in body {
            match keys.iter().find(|(name, _)| name == key) {
                None => errors.push(format!("[{}] unknown key '{}'", section, key)),
                Some((_, Some((min, max)))) => match value.as_integer() {
                    Some(v) if (*min..=*max).contains(&v) => {}
                    Some(_) => errors.push(format!(
                        "[{}] {} must be {}-{}",
                        section, key, min, max
                    )),
                    None => errors.push(format!("[{}] {} must be an integer", section, key)),
                },
                Some((_, None)) => match value.as_str() {
                    Some(s) if REPEAT_POLICIES.contains(&s) => {}
                    _ => errors.push(format!(
                        "[{}] {} must be one of {:?}",
                        section, key, REPEAT_POLICIES
                    )),
                },
            }
        }
    }

    errors
}
