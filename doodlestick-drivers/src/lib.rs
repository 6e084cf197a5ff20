//! Hardware driver implementations
//!
//! Concrete implementations of the bus traits defined in
//! doodlestick-core, written against `embedded-hal` 1.0 digital pins:
//!
//! - HUB75 row-pair matrix bus
//! - Column-driven 3×4 keypad
//! - Joystick push button
//!
//! Pins are required to be infallible (`Error = Infallible`), which is the
//! case for on-chip GPIO on every HAL this firmware targets.

#![no_std]
#![deny(unsafe_code)]

pub mod button;
pub mod keypad;
pub mod matrix;
mod pin;

pub use button::GpioButton;
pub use keypad::GpioKeypad;
pub use matrix::{Hub75Bus, Hub75Pins};
