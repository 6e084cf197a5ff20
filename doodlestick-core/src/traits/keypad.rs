//! Keypad bus trait

/// Column-driven, row-sensed key matrix
///
/// Rows are pulled down; a pressed key connects its driven column to its
/// row, so the row reads high.
pub trait KeypadBus {
    /// Drive a column line high
    fn drive_column(&mut self, col: u8);

    /// Return a column line to low
    fn release_column(&mut self, col: u8);

    /// Sample all row lines; bit `n` set means row `n` is high
    fn read_rows(&mut self) -> u8;
}
