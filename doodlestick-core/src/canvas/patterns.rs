//! Full-buffer relief patterns
//!
//! Each pattern floods the buffer with a background color and then knocks
//! out (paints black) a small glyph near the top-left corner.

use crate::color::Color;
use crate::geometry::Point;

use super::framebuffer::FrameBuffer;

/// Smiley face: two eyes and a mouth
pub const SMILEY: &[(i16, i16)] = &[(3, 2), (5, 2), (2, 4), (3, 5), (4, 5), (5, 5), (6, 4)];

/// The word "hi"
pub const HI: &[(i16, i16)] = &[
    (1, 1),
    (1, 2),
    (1, 3),
    (1, 4),
    (1, 5),
    (2, 3),
    (3, 1),
    (3, 2),
    (3, 3),
    (3, 4),
    (3, 5),
    (5, 2),
    (5, 4),
    (5, 5),
];

/// Fill with `background` and clear every cell of `glyph`
pub fn relief<const W: usize, const H: usize>(
    frame: &mut FrameBuffer<W, H>,
    background: Color,
    glyph: &[(i16, i16)],
) {
    frame.fill(background);
    for &(x, y) in glyph {
        frame.set(Point::new(x, y), Color::BLACK);
    }
}
