//! Matrix bus trait for row-pair scanned RGB panels

use crate::color::Color;

/// Control and data lines of a row-pair scanned LED matrix
///
/// The panel shifts one column per clock: the upper and lower color of the
/// current row-pair are presented together on six data lines, sampled on
/// the rising clock edge, and moved to the output drivers when the latch is
/// asserted.
pub trait MatrixBus {
    /// Select the row-pair shown when output is enabled
    fn set_row_address(&mut self, pair: u8);

    /// Light (`true`) or blank (`false`) the panel
    ///
    /// Implementations handle the pin polarity (OE is active-low on HUB75).
    fn set_output_enable(&mut self, enabled: bool);

    /// Assert (`true`) or release (`false`) the data latch
    fn set_latch(&mut self, asserted: bool);

    /// One idle-low clock pulse (rising edge samples the color lines)
    fn pulse_clock(&mut self);

    /// Present the upper and lower color bits for the current column
    fn set_color_bus(&mut self, upper: Color, lower: Color);

    /// Drive every color line low
    fn clear_color_bus(&mut self);
}
