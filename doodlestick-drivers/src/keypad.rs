//! GPIO keypad
//!
//! Columns are push-pull outputs, rows are inputs with pull-downs. A
//! pressed key connects its column to its row, so the row reads high while
//! that column is driven.

use core::convert::Infallible;

use doodlestick_core::input::{KEYPAD_COLS, KEYPAD_ROWS};
use doodlestick_core::traits::KeypadBus;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::pin::{drive, read};

const COLS: usize = KEYPAD_COLS as usize;
const ROWS: usize = KEYPAD_ROWS as usize;

/// 3×4 key matrix on seven GPIOs
pub struct GpioKeypad<O, I> {
    columns: [O; COLS],
    rows: [I; ROWS],
}

impl<O, I> GpioKeypad<O, I>
where
    O: OutputPin<Error = Infallible>,
    I: InputPin<Error = Infallible>,
{
    /// All columns are released on construction
    pub fn new(columns: [O; COLS], rows: [I; ROWS]) -> Self {
        let mut keypad = Self { columns, rows };
        for column in keypad.columns.iter_mut() {
            drive(column, false);
        }
        keypad
    }
}

impl<O, I> KeypadBus for GpioKeypad<O, I>
where
    O: OutputPin<Error = Infallible>,
    I: InputPin<Error = Infallible>,
{
    fn drive_column(&mut self, col: u8) {
        if let Some(column) = self.columns.get_mut(col as usize) {
            drive(column, true);
        }
    }

    fn release_column(&mut self, col: u8) {
        if let Some(column) = self.columns.get_mut(col as usize) {
            drive(column, false);
        }
    }

    fn read_rows(&mut self) -> u8 {
        self.rows
            .iter_mut()
            .enumerate()
            .fold(0, |mask, (i, row)| if read(row) { mask | (1 << i) } else { mask })
    }
}
