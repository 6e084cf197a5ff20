//! Frame buffer storage
//!
//! The buffer is indexed `[x][y]`, matching how the refresh loop walks it
//! (column by column within a row-pair).

use crate::color::Color;
use crate::geometry::Point;

/// Fixed-size grid of colors
///
/// `H` is the physical row count and must be even: the display refreshes
/// rows `y` and `y + H/2` together. Every cell always holds a color; there
/// is no "empty" state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const W: usize, const H: usize> {
    cells: [[Color; H]; W],
}

impl<const W: usize, const H: usize> Default for FrameBuffer<W, H> {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}

impl<const W: usize, const H: usize> FrameBuffer<W, H> {
    const GEOMETRY_OK: () = assert!(
        W > 0 && H >= 2 && H % 2 == 0,
        "rows must be even and >= 2"
    );

    /// Number of row-pairs scanned per refresh pass
    pub const ROW_PAIRS: usize = H / 2;

    /// Create a buffer with every cell set to `color`
    pub const fn new(color: Color) -> Self {
        let () = Self::GEOMETRY_OK;
        Self {
            cells: [[color; H]; W],
        }
    }

    pub const fn width(&self) -> usize {
        W
    }

    pub const fn height(&self) -> usize {
        H
    }

    /// True if `point` addresses a cell of this buffer
    pub const fn contains(&self, point: Point) -> bool {
        point.in_bounds(W, H)
    }

    /// Read a cell; `None` outside the buffer
    pub fn get(&self, point: Point) -> Option<Color> {
        if self.contains(point) {
            Some(self.cells[point.x as usize][point.y as usize])
        } else {
            None
        }
    }

    /// Write a cell
    ///
    /// Out-of-range points are ignored. Returns whether a cell was written.
    pub fn set(&mut self, point: Point, color: Color) -> bool {
        if self.contains(point) {
            self.cells[point.x as usize][point.y as usize] = color;
            true
        } else {
            false
        }
    }

    /// Overwrite every cell
    pub fn fill(&mut self, color: Color) {
        for column in self.cells.iter_mut() {
            column.fill(color);
        }
    }

    /// Upper and lower cell of row-pair `pair` in column `x`
    ///
    /// Both indices must be in range; the refresh loop only calls this with
    /// `x < W` and `pair < H/2`.
    pub fn pair(&self, x: usize, pair: usize) -> (Color, Color) {
        let column = &self.cells[x];
        (column[pair], column[pair + Self::ROW_PAIRS])
    }

    /// Count cells equal to `color`
    pub fn count(&self, color: Color) -> usize {
        self.cells
            .iter()
            .flat_map(|column| column.iter())
            .filter(|c| **c == color)
            .count()
    }
}
