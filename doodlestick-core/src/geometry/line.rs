//! Integer line rasterization
//!
//! Bresenham's algorithm generalized to all octants. Only integer adds and
//! shifts are used, which keeps it cheap on cores without an FPU.

use super::point::Point;

/// Iterator over every cell of a straight line, both endpoints included
///
/// Consecutive cells are 8-connected. Points are yielded from `from`
/// towards `to` and may lie outside the matrix; callers clip per pixel.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i32,
    y: i32,
    end_x: i32,
    end_y: i32,
    dx: i32,
    dy: i32,
    step_x: i32,
    step_y: i32,
    err: i32,
    done: bool,
}

impl LinePoints {
    pub fn new(from: Point, to: Point) -> Self {
        let (x0, y0) = (from.x as i32, from.y as i32);
        let (x1, y1) = (to.x as i32, to.y as i32);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();

        Self {
            x: x0,
            y: y0,
            end_x: x1,
            end_y: y1,
            dx,
            dy,
            step_x: if x0 < x1 { 1 } else { -1 },
            step_y: if y0 < y1 { 1 } else { -1 },
            err: dx + dy,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.done {
            return None;
        }

        let current = Point::new(self.x as i16, self.y as i16);

        if self.x == self.end_x && self.y == self.end_y {
            self.done = true;
        } else {
            let e2 = 2 * self.err;
            if e2 >= self.dy {
                self.err += self.dy;
                self.x += self.step_x;
            }
            if e2 <= self.dx {
                self.err += self.dx;
                self.y += self.step_y;
            }
        }

        Some(current)
    }
}
