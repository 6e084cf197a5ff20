//! HUB75 matrix bus
//!
//! Six color lines (R1 G1 B1 for the upper half, R2 G2 B2 for the lower),
//! three address lines, clock, latch and an active-low output enable.

use core::convert::Infallible;

use doodlestick_core::traits::MatrixBus;
use doodlestick_core::Color;
use embedded_hal::digital::OutputPin;

use crate::pin::drive;

/// Pins of a HUB75 connector with three address lines (up to 8 row-pairs)
pub struct Hub75Pins<P> {
    /// R1, G1, B1
    pub upper: [P; 3],
    /// R2, G2, B2
    pub lower: [P; 3],
    /// A, B, C
    pub address: [P; 3],
    pub clock: P,
    pub latch: P,
    /// Active-low
    pub output_enable: P,
}

/// [`MatrixBus`] over HUB75 pins
pub struct Hub75Bus<P> {
    pins: Hub75Pins<P>,
}

impl<P: OutputPin<Error = Infallible>> Hub75Bus<P> {
    /// Take the pins and park the bus: output blanked, latch and clock low,
    /// color lines low, address 0
    pub fn new(pins: Hub75Pins<P>) -> Self {
        let mut bus = Self { pins };
        bus.set_output_enable(false);
        bus.set_latch(false);
        drive(&mut bus.pins.clock, false);
        bus.clear_color_bus();
        bus.set_row_address(0);
        bus
    }

    pub fn release(self) -> Hub75Pins<P> {
        self.pins
    }
}

fn drive_color<P: OutputPin<Error = Infallible>>(lines: &mut [P; 3], color: Color) {
    let [r, g, b] = lines;
    drive(r, color.r);
    drive(g, color.g);
    drive(b, color.b);
}

impl<P: OutputPin<Error = Infallible>> MatrixBus for Hub75Bus<P> {
    fn set_row_address(&mut self, pair: u8) {
        for (bit, line) in self.pins.address.iter_mut().enumerate() {
            drive(line, pair & (1 << bit) != 0);
        }
    }

    fn set_output_enable(&mut self, enabled: bool) {
        drive(&mut self.pins.output_enable, !enabled);
    }

    fn set_latch(&mut self, asserted: bool) {
        drive(&mut self.pins.latch, asserted);
    }

    fn pulse_clock(&mut self) {
        drive(&mut self.pins.clock, true);
        drive(&mut self.pins.clock, false);
    }

    fn set_color_bus(&mut self, upper: Color, lower: Color) {
        drive_color(&mut self.pins.upper, upper);
        drive_color(&mut self.pins.lower, lower);
    }

    fn clear_color_bus(&mut self) {
        drive_color(&mut self.pins.upper, Color::BLACK);
        drive_color(&mut self.pins.lower, Color::BLACK);
    }
}
