//! Shared state between tasks and the main loop
//!
//! The analog mailbox and movement clock are single-word atomics written
//! by producer tasks; the start signals wake the converter tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use doodlestick_core::input::joystick::{DEFAULT_NEUTRAL_X, DEFAULT_NEUTRAL_Y};
use doodlestick_core::input::{AnalogMailbox, Axis};
use doodlestick_core::traits::ConversionStarter;
use doodlestick_core::MovementClock;

/// Latest joystick samples (written by the converter tasks)
pub static MAILBOX: AnalogMailbox = AnalogMailbox::new(DEFAULT_NEUTRAL_X, DEFAULT_NEUTRAL_Y);

/// Movement-due flag and Speed-mode prescaler (written by the movement task)
pub static CLOCK: MovementClock = MovementClock::new();

/// Start an x-axis conversion
pub static START_X: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Start a y-axis conversion
pub static START_Y: Signal<CriticalSectionRawMutex, ()> = Signal::new();

pub fn start_signal(axis: Axis) -> &'static Signal<CriticalSectionRawMutex, ()> {
    match axis {
        Axis::X => &START_X,
        Axis::Y => &START_Y,
    }
}

/// Starts conversions by waking the converter task of the axis
pub struct SignalStarter;

impl ConversionStarter for SignalStarter {
    fn start_conversion(&mut self, axis: Axis) {
        start_signal(axis).signal(());
    }
}
