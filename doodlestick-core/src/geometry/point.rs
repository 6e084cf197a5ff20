//! Signed matrix coordinates

/// A matrix coordinate
///
/// `(0, 0)` is the top-left cell; x grows to the right, y grows downward.
/// Coordinates are signed so that [`Point::UNSET`] and off-matrix positions
/// can be represented; they are bounds-checked before every buffer access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    /// Sentinel for an empty shape slot
    pub const UNSET: Point = Point::new(-1, -1);

    /// Top-left cell
    pub const ORIGIN: Point = Point::new(0, 0);

    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// True unless this is the sentinel (or any negative coordinate)
    pub const fn is_set(&self) -> bool {
        self.x >= 0 && self.y >= 0
    }

    /// Check the point against a `width` × `height` grid
    pub const fn in_bounds(&self, width: usize, height: usize) -> bool {
        self.x >= 0 && self.y >= 0 && (self.x as usize) < width && (self.y as usize) < height
    }
}
