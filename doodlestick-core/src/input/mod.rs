//! Input acquisition
//!
//! - Analog joystick axes delivered through single-slot mailboxes
//! - Joystick calibration (neutral band)
//! - 3×4 keypad scanning and repeat filtering
//! - Button edge detection

pub mod analog;
pub mod button;
pub mod joystick;
pub mod keypad;

pub use analog::{AnalogMailbox, Axis};
pub use button::EdgeDetector;
pub use joystick::{JoystickCalibration, JoystickReading};
pub use keypad::{scan, Key, KeyFilter, RepeatPolicy, KEYPAD_COLS, KEYPAD_ROWS};
