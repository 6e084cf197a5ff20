//! Joystick push button

use core::convert::Infallible;

use doodlestick_core::traits::ButtonInput;
use embedded_hal::digital::InputPin;

use crate::pin::read;

/// Push button on a GPIO input
///
/// The reference joystick switches to ground with a pull-up, so it is
/// active-low.
pub struct GpioButton<I> {
    pin: I,
    active_low: bool,
}

impl<I: InputPin<Error = Infallible>> GpioButton<I> {
    pub fn new(pin: I, active_low: bool) -> Self {
        Self { pin, active_low }
    }

    /// Button that reads low while pressed
    pub fn new_active_low(pin: I) -> Self {
        Self::new(pin, true)
    }

    pub fn new_active_high(pin: I) -> Self {
        Self::new(pin, false)
    }
}

impl<I: InputPin<Error = Infallible>> ButtonInput for GpioButton<I> {
    fn is_pressed(&mut self) -> bool {
        read(&mut self.pin) != self.active_low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pin::mock::MockInput;
    use core::cell::Cell;

    #[test]
    fn test_active_low() {
        let level = Cell::new(true);
        let mut button = GpioButton::new_active_low(MockInput { level: &level });
        assert!(!button.is_pressed());
        level.set(false);
        assert!(button.is_pressed());
    }

    #[test]
    fn test_active_high() {
        let level = Cell::new(true);
        let mut button = GpioButton::new_active_high(MockInput { level: &level });
        assert!(button.is_pressed());
    }
}
