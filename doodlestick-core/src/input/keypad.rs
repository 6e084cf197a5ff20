//! 3×4 keypad scanning
//!
//! Layout (row-major):
//!
//! ```text
//!  '1' '2' '3'      0x1 0x2 0x3
//!  '4' '5' '6'      0x4 0x5 0x6
//!  '7' '8' '9'      0x7 0x8 0x9
//!  '*' '0' '#'      0xA 0x0 0xB
//! ```

use crate::traits::KeypadBus;

/// Driven column lines
pub const KEYPAD_COLS: u8 = 3;

/// Sensed row lines
pub const KEYPAD_ROWS: u8 = 4;

const KEY_COUNT: usize = (KEYPAD_COLS * KEYPAD_ROWS) as usize;

/// Legend printed on each key, by linear index
pub const KEY_CHARS: [char; KEY_COUNT] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '*', '0', '#'];

/// Nibble value of each key, by linear index
pub const KEY_VALUES: [u8; KEY_COUNT] = [0x1, 0x2, 0x3, 0x4, 0x5, 0x6, 0x7, 0x8, 0x9, 0xA, 0x0, 0xB];

/// A pressed key position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Key {
    pub row: u8,
    pub col: u8,
}

impl Key {
    /// Linear index `row * cols + col`
    pub const fn index(&self) -> usize {
        (self.row * KEYPAD_COLS + self.col) as usize
    }

    pub const fn char(&self) -> char {
        KEY_CHARS[self.index()]
    }

    pub const fn value(&self) -> u8 {
        KEY_VALUES[self.index()]
    }
}

/// Sweep the columns once and return the first pressed key
///
/// Every column is released before scanning starts, and each driven column
/// is released again before returning or moving on, so no column is left
/// asserted between scans. Holding a key reports it on every call.
pub fn scan<B: KeypadBus>(bus: &mut B) -> Option<Key> {
    for col in 0..KEYPAD_COLS {
        bus.release_column(col);
    }

    for col in 0..KEYPAD_COLS {
        bus.drive_column(col);
        let rows = bus.read_rows();
        bus.release_column(col);

        if let Some(row) = (0..KEYPAD_ROWS).find(|row| rows & (1 << row) != 0) {
            return Some(Key { row, col });
        }
    }

    None
}

/// How a held key is reported to the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RepeatPolicy {
    /// Report on every poll while held
    EveryPoll,
    /// Report once when the scanned key changes to a new press
    #[default]
    OnPress,
}

/// Applies a [`RepeatPolicy`] to successive scan results
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyFilter {
    policy: RepeatPolicy,
    last: Option<Key>,
}

impl KeyFilter {
    pub const fn new(policy: RepeatPolicy) -> Self {
        Self { policy, last: None }
    }

    pub fn policy(&self) -> RepeatPolicy {
        self.policy
    }

    /// Feed one scan result, returning the key to act on
    pub fn filter(&mut self, scanned: Option<Key>) -> Option<Key> {
        let previous = core::mem::replace(&mut self.last, scanned);
        match self.policy {
            RepeatPolicy::EveryPoll => scanned,
            RepeatPolicy::OnPress => match scanned {
                Some(key) if previous != Some(key) => Some(key),
                _ => None,
            },
        }
    }
}
