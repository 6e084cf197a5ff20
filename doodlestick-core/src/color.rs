//! One-bit-per-channel colors and the fixed drawing palette

/// RGB color with a single on/off bit per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: bool,
    pub g: bool,
    pub b: bool,
}

impl Color {
    pub const RED: Color = Color::new(true, false, false);
    pub const GREEN: Color = Color::new(false, true, false);
    pub const BLUE: Color = Color::new(false, false, true);
    pub const YELLOW: Color = Color::new(true, true, false);
    pub const CYAN: Color = Color::new(false, true, true);
    pub const PURPLE: Color = Color::new(true, false, true);
    pub const WHITE: Color = Color::new(true, true, true);
    pub const BLACK: Color = Color::new(false, false, false);

    /// Create a color from its three channel bits
    pub const fn new(r: bool, g: bool, b: bool) -> Self {
        Self { r, g, b }
    }

    /// Pack into the low three bits (bit 0 = red, bit 1 = green, bit 2 = blue)
    pub const fn bits(self) -> u8 {
        (self.r as u8) | ((self.g as u8) << 1) | ((self.b as u8) << 2)
    }

    /// Unpack from the low three bits; higher bits are ignored
    pub const fn from_bits(bits: u8) -> Self {
        Self::new(bits & 0b001 != 0, bits & 0b010 != 0, bits & 0b100 != 0)
    }

    /// True if every channel is off
    pub const fn is_black(self) -> bool {
        !self.r && !self.g && !self.b
    }
}

/// Number of palette entries reachable from the keypad (keys 1-8)
pub const PALETTE_SIZE: usize = 8;

/// Drawing palette, indexed by keypad selection minus one
pub type Palette = [Color; PALETTE_SIZE];

/// The fixed palette in keypad order
pub const PALETTE: Palette = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::YELLOW,
    Color::CYAN,
    Color::PURPLE,
    Color::WHITE,
    Color::BLACK,
];
