//! Points, line rasterization and shape accumulation

pub mod line;
pub mod point;
pub mod shape;

pub use line::LinePoints;
pub use point::Point;
pub use shape::{
    Shape, ShapeAccumulator, ShapeKind, ShapeSet, LINE_POINTS, RECT_POINTS, TRIANGLE_POINTS,
};
