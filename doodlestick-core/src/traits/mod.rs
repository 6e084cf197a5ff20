//! Hardware abstraction traits
//!
//! These traits are the only way the core touches hardware. Drivers
//! implement them over GPIO pins; tests implement them with recorders.

pub mod input;
pub mod keypad;
pub mod matrix;

pub use input::{ButtonInput, ConversionStarter};
pub use keypad::KeypadBus;
pub use matrix::MatrixBus;
