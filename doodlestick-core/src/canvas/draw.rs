//! Drawing primitives over a frame buffer

use crate::color::Color;
use crate::geometry::{LinePoints, Point, Shape};

use super::framebuffer::FrameBuffer;
use super::patterns;

/// Frame buffer plus the active draw color
///
/// All primitives clip per pixel: cells outside the buffer are silently
/// skipped and never wrap.
#[derive(Debug, Clone)]
pub struct Canvas<const W: usize, const H: usize> {
    frame: FrameBuffer<W, H>,
    draw_color: Color,
}

impl<const W: usize, const H: usize> Default for Canvas<W, H> {
    fn default() -> Self {
        Self::new(FrameBuffer::default(), Color::RED)
    }
}

impl<const W: usize, const H: usize> Canvas<W, H> {
    pub fn new(frame: FrameBuffer<W, H>, draw_color: Color) -> Self {
        Self { frame, draw_color }
    }

    pub fn frame(&self) -> &FrameBuffer<W, H> {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut FrameBuffer<W, H> {
        &mut self.frame
    }

    pub fn draw_color(&self) -> Color {
        self.draw_color
    }

    pub fn set_draw_color(&mut self, color: Color) {
        self.draw_color = color;
    }

    /// Read a cell
    pub fn get(&self, point: Point) -> Option<Color> {
        self.frame.get(point)
    }

    /// Paint one cell with an explicit color
    pub fn draw(&mut self, point: Point, color: Color) -> bool {
        self.frame.set(point, color)
    }

    /// Paint one cell with the draw color
    pub fn plot(&mut self, point: Point) -> bool {
        self.frame.set(point, self.draw_color)
    }

    /// Horizontal run from `x0` to `x1` inclusive at row `y`
    pub fn hline(&mut self, x0: i16, x1: i16, y: i16) {
        let (lo, hi) = (x0.min(x1), x0.max(x1));
        for x in lo..=hi {
            self.plot(Point::new(x, y));
        }
    }

    /// Vertical run from `y0` to `y1` inclusive at column `x`
    pub fn vline(&mut self, y0: i16, y1: i16, x: i16) {
        let (lo, hi) = (y0.min(y1), y0.max(y1));
        for y in lo..=hi {
            self.plot(Point::new(x, y));
        }
    }

    /// Rectangle outline with `a` and `b` as opposite corners
    pub fn rect(&mut self, a: Point, b: Point) {
        let (xmin, xmax) = (a.x.min(b.x), a.x.max(b.x));
        let (ymin, ymax) = (a.y.min(b.y), a.y.max(b.y));

        self.vline(ymin, ymax, xmin);
        self.vline(ymin, ymax, xmax);
        self.hline(xmin, xmax, ymin);
        self.hline(xmin, xmax, ymax);
    }

    /// Straight line between two points, endpoints included
    pub fn line(&mut self, from: Point, to: Point) {
        for point in LinePoints::new(from, to) {
            self.plot(point);
        }
    }

    /// Triangle outline through three vertices
    pub fn triangle(&mut self, a: Point, b: Point, c: Point) {
        self.line(a, b);
        self.line(b, c);
        self.line(c, a);
    }

    /// Rasterize a completed shape in the draw color
    pub fn draw_shape(&mut self, shape: Shape) {
        match shape {
            Shape::Line(a, b) => self.line(a, b),
            Shape::Rectangle(a, b) => self.rect(a, b),
            Shape::Triangle(a, b, c) => self.triangle(a, b, c),
        }
    }

    /// Overwrite every cell
    pub fn fill(&mut self, color: Color) {
        self.frame.fill(color);
    }

    /// Smiley relief on a `background` flood
    pub fn smiley(&mut self, background: Color) {
        patterns::relief(&mut self.frame, background, patterns::SMILEY);
    }

    /// "hi" relief on a `background` flood
    pub fn hi(&mut self, background: Color) {
        patterns::relief(&mut self.frame, background, patterns::HI);
    }
}
