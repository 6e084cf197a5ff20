//! Joystick input traits

use crate::input::Axis;

/// Joystick push button
pub trait ButtonInput {
    /// True while the button is held down (polarity handled by the driver)
    fn is_pressed(&mut self) -> bool;
}

/// Starts an analog conversion on one joystick axis
///
/// Completion is reported asynchronously through
/// [`AnalogMailbox::deposit`](crate::input::AnalogMailbox::deposit).
pub trait ConversionStarter {
    fn start_conversion(&mut self, axis: Axis);
}
