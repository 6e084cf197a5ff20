//! Keypad commands

/// A validated keypad selection in `1..=8`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selection(u8);

impl Selection {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based palette index
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

/// What a keypad value asks the dispatcher to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyCommand {
    /// `*`
    EnterColor,
    /// `0`
    EnterFill,
    /// `#`
    EnterDraw,
    /// `9`
    EnterSpeed,
    /// `1`..`8`
    Select(Selection),
}

impl KeyCommand {
    /// Translate a keypad nibble value
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            0xA => Some(KeyCommand::EnterColor),
            0x0 => Some(KeyCommand::EnterFill),
            0xB => Some(KeyCommand::EnterDraw),
            0x9 => Some(KeyCommand::EnterSpeed),
            v => match Selection::new(v) {
                Some(s) => Some(KeyCommand::Select(s)),
                None => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_range() {
        assert_eq!(Selection::new(0), None);
        assert_eq!(Selection::new(9), None);
        assert_eq!(Selection::new(1).map(Selection::index), Some(0));
        assert_eq!(Selection::new(8).map(Selection::get), Some(8));
    }

    #[test]
    fn test_from_value() {
        assert_eq!(KeyCommand::from_value(0xA), Some(KeyCommand::EnterColor));
        assert_eq!(KeyCommand::from_value(0x0), Some(KeyCommand::EnterFill));
        assert_eq!(KeyCommand::from_value(0xB), Some(KeyCommand::EnterDraw));
        assert_eq!(KeyCommand::from_value(0x9), Some(KeyCommand::EnterSpeed));
        for v in 1..=8 {
            assert_eq!(
                KeyCommand::from_value(v),
                Some(KeyCommand::Select(Selection(v)))
            );
        }
        assert_eq!(KeyCommand::from_value(0xC), None);
        assert_eq!(KeyCommand::from_value(0xFF), None);
    }
}
