//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::clock::{DEFAULT_BASE_TICK_MS, DEFAULT_PRESCALER};
use crate::cursor::DEFAULT_BLINK_THRESHOLD;
use crate::input::{JoystickCalibration, RepeatPolicy};

/// Cursor behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CursorConfig {
    /// Rest ticks between blink toggles
    pub blink_threshold: u8,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            blink_threshold: DEFAULT_BLINK_THRESHOLD,
        }
    }
}

/// Movement timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimerConfig {
    /// Period unit; the tick period is `base_tick_ms * (prescaler + 1)`
    pub base_tick_ms: u32,
    /// Power-on prescaler (Speed mode overrides it)
    pub prescaler: u8,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            base_tick_ms: DEFAULT_BASE_TICK_MS,
            prescaler: DEFAULT_PRESCALER,
        }
    }
}

/// Keypad behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeypadConfig {
    pub repeat: RepeatPolicy,
}

/// Complete device configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DoodleConfig {
    pub joystick: JoystickCalibration,
    pub cursor: CursorConfig,
    pub timer: TimerConfig,
    pub keypad: KeypadConfig,
}

impl DoodleConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
