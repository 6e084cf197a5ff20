//! Shape accumulators
//!
//! Shapes are built from points captured across several button presses.
//! Each accumulator is a fixed array of slots initialized to
//! [`Point::UNSET`]; a press fills the first empty slot and the shape is
//! emitted (and the accumulator cleared) once every slot is set.

use super::point::Point;

/// Points needed for a line
pub const LINE_POINTS: usize = 2;

/// Points needed for a rectangle (opposite corners)
pub const RECT_POINTS: usize = 2;

/// Points needed for a triangle
pub const TRIANGLE_POINTS: usize = 3;

/// Kind of shape a draw tool builds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ShapeKind {
    Line,
    Rectangle,
    Triangle,
}

/// A completed shape ready to be rasterized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Shape {
    Line(Point, Point),
    /// Two opposite corners
    Rectangle(Point, Point),
    Triangle(Point, Point, Point),
}

/// Fixed-capacity ordered point buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeAccumulator<const N: usize> {
    points: [Point; N],
}

impl<const N: usize> Default for ShapeAccumulator<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ShapeAccumulator<N> {
    /// Create an accumulator with every slot unset
    pub const fn new() -> Self {
        Self {
            points: [Point::UNSET; N],
        }
    }

    /// Clear every slot back to the sentinel
    pub fn reset(&mut self) {
        self.points = [Point::UNSET; N];
    }

    /// Index of the first unset slot, if any
    pub fn first_free(&self) -> Option<usize> {
        self.points.iter().position(|p| !p.is_set())
    }

    /// Number of slots already captured
    pub fn len(&self) -> usize {
        self.points.iter().filter(|p| p.is_set()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.points.iter().all(|p| !p.is_set())
    }

    /// Raw slot contents (unset slots hold [`Point::UNSET`])
    pub fn points(&self) -> &[Point; N] {
        &self.points
    }

    /// Append a point
    ///
    /// Returns the completed point set when this push filled the last slot;
    /// the accumulator is reset before returning. Sentinel or negative points
    /// are ignored.
    pub fn push(&mut self, point: Point) -> Option<[Point; N]> {
        if !point.is_set() {
            return None;
        }

        let index = match self.first_free() {
            Some(i) => i,
            None => {
                // Full without having been emitted; start over
                self.reset();
                0
            }
        };
        self.points[index] = point;

        if self.first_free().is_none() {
            let complete = self.points;
            self.reset();
            Some(complete)
        } else {
            None
        }
    }
}

/// The accumulators for every shape tool
#[derive(Debug, Clone, Default)]
pub struct ShapeSet {
    pub line: ShapeAccumulator<LINE_POINTS>,
    pub rectangle: ShapeAccumulator<RECT_POINTS>,
    pub triangle: ShapeAccumulator<TRIANGLE_POINTS>,
}

impl ShapeSet {
    pub const fn new() -> Self {
        Self {
            line: ShapeAccumulator::new(),
            rectangle: ShapeAccumulator::new(),
            triangle: ShapeAccumulator::new(),
        }
    }

    /// Reset every accumulator
    pub fn reset_all(&mut self) {
        self.line.reset();
        self.rectangle.reset();
        self.triangle.reset();
    }

    /// Feed a captured point to the accumulator for `kind`
    pub fn push(&mut self, kind: ShapeKind, point: Point) -> Option<Shape> {
        match kind {
            ShapeKind::Line => self.line.push(point).map(|[a, b]| Shape::Line(a, b)),
            ShapeKind::Rectangle => self
                .rectangle
                .push(point)
                .map(|[a, b]| Shape::Rectangle(a, b)),
            ShapeKind::Triangle => self
                .triangle
                .push(point)
                .map(|[a, b, c]| Shape::Triangle(a, b, c)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accumulator_is_unset() {
        let acc = ShapeAccumulator::<3>::new();
        assert!(acc.is_empty());
        assert_eq!(acc.first_free(), Some(0));
        assert!(acc.points().iter().all(|p| *p == Point::UNSET));
    }

    #[test]
    fn test_two_point_completion_resets() {
        let mut acc = ShapeAccumulator::<2>::new();
        assert_eq!(acc.push(Point::new(2, 2)), None);
        assert_eq!(acc.len(), 1);
        assert_eq!(acc.first_free(), Some(1));

        let done = acc.push(Point::new(5, 5));
        assert_eq!(done, Some([Point::new(2, 2), Point::new(5, 5)]));
        assert_eq!(acc.points(), &[Point::UNSET, Point::UNSET]);
    }

    #[test]
    fn test_fills_first_free_slot() {
        let mut acc = ShapeAccumulator::<3>::new();
        acc.push(Point::new(1, 1));
        acc.push(Point::new(2, 2));
        assert_eq!(acc.points()[0], Point::new(1, 1));
        assert_eq!(acc.points()[1], Point::new(2, 2));
        assert_eq!(acc.points()[2], Point::UNSET);
    }

    #[test]
    fn test_sentinel_push_ignored() {
        let mut acc = ShapeAccumulator::<2>::new();
        assert_eq!(acc.push(Point::UNSET), None);
        assert!(acc.is_empty());
    }

    #[test]
    fn test_shape_set_routes_by_kind() {
        let mut set = ShapeSet::new();
        assert_eq!(set.push(ShapeKind::Triangle, Point::new(0, 0)), None);
        assert_eq!(set.push(ShapeKind::Line, Point::new(1, 1)), None);
        assert_eq!(set.triangle.len(), 1);
        assert_eq!(set.line.len(), 1);
        assert!(set.rectangle.is_empty());

        assert_eq!(
            set.push(ShapeKind::Line, Point::new(4, 1)),
            Some(Shape::Line(Point::new(1, 1), Point::new(4, 1)))
        );
        assert_eq!(set.push(ShapeKind::Triangle, Point::new(4, 0)), None);
        assert_eq!(
            set.push(ShapeKind::Triangle, Point::new(2, 3)),
            Some(Shape::Triangle(
                Point::new(0, 0),
                Point::new(4, 0),
                Point::new(2, 3)
            ))
        );

        set.push(ShapeKind::Rectangle, Point::new(3, 3));
        set.reset_all();
        assert!(set.rectangle.is_empty());
        assert!(set.triangle.is_empty());
    }
}
