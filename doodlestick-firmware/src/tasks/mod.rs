//! Embassy async tasks
//!
//! The producers feeding the main loop: one converter task per joystick
//! axis and the movement timer.

pub mod analog;
pub mod movement;

pub use analog::{x_converter_task, y_converter_task};
pub use movement::movement_task;
