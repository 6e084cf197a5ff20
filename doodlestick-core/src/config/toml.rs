//! Minimal TOML reader for the device configuration
//!
//! Handles only what `doodle.toml` uses:
//! - `[section]` headers (`joystick`, `cursor`, `timer`, `keypad`)
//! - `key = value` pairs with integer or string values
//! - Comments (`# ...`), whole-line or trailing
//!
//! Keys that are absent keep their defaults.

use super::types::DoodleConfig;
use crate::input::RepeatPolicy;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Key not known in its section
    UnknownKey,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Line is neither a header nor a key/value pair
    Syntax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Joystick,
    Cursor,
    Timer,
    Keypad,
}

/// Parse TOML text into a [`DoodleConfig`]
pub fn parse_config(input: &str) -> Result<DoodleConfig, ParseError> {
    let mut config = DoodleConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = strip_comment(line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('[') {
            let name = header.strip_suffix(']').ok_or(ParseError::InvalidSection)?;
            section = parse_section_header(name)?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ParseError::Syntax)?;
        apply_value(&mut config, section, key, value)?;
    }

    validate(&config)?;
    Ok(config)
}

fn parse_section_header(name: &str) -> Result<Section, ParseError> {
    match name.trim() {
        "joystick" => Ok(Section::Joystick),
        "cursor" => Ok(Section::Cursor),
        "timer" => Ok(Section::Timer),
        "keypad" => Ok(Section::Keypad),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Drop a trailing comment unless the `#` sits inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let (key, value) = (key.trim(), value.trim());
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Parse a quoted string value
fn parse_string(value: &str) -> Result<&str, ParseError> {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or(ParseError::InvalidValue)
}

/// Parse an integer value (underscores allowed as separators)
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    let mut digits: heapless::String<16> = heapless::String::new();
    for c in value.chars().filter(|c| *c != '_') {
        digits.push(c).map_err(|_| ParseError::InvalidValue)?;
    }
    digits.parse().map_err(|_| ParseError::InvalidValue)
}

fn parse_repeat(value: &str) -> Result<RepeatPolicy, ParseError> {
    match parse_string(value)? {
        "on_press" => Ok(RepeatPolicy::OnPress),
        "every_poll" => Ok(RepeatPolicy::EveryPoll),
        _ => Err(ParseError::InvalidValue),
    }
}

fn apply_value(
    config: &mut DoodleConfig,
    section: Section,
    key: &str,
    value: &str,
) -> Result<(), ParseError> {
    match (section, key) {
        (Section::Joystick, "neutral_x") => config.joystick.neutral_x = parse_int(value)?,
        (Section::Joystick, "neutral_y") => config.joystick.neutral_y = parse_int(value)?,
        (Section::Joystick, "threshold") => config.joystick.threshold = parse_int(value)?,
        (Section::Cursor, "blink_threshold") => config.cursor.blink_threshold = parse_int(value)?,
        (Section::Timer, "base_tick_ms") => config.timer.base_tick_ms = parse_int(value)?,
        (Section::Timer, "prescaler") => config.timer.prescaler = parse_int(value)?,
        (Section::Keypad, "repeat") => config.keypad.repeat = parse_repeat(value)?,
        _ => return Err(ParseError::UnknownKey),
    }
    Ok(())
}

fn validate(config: &DoodleConfig) -> Result<(), ParseError> {
    if config.cursor.blink_threshold == 0 || config.timer.base_tick_ms == 0 {
        return Err(ParseError::InvalidValue);
    }
    Ok(())
}
