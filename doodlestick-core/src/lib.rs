//! Board-agnostic core logic for the Doodlestick
//!
//! This crate contains everything that does not depend on a specific
//! microcontroller:
//!
//! - Colors, palette and the frame buffer
//! - Geometry: points, shape accumulators, line rasterization
//! - Input acquisition: analog mailboxes, keypad scanning, button edges
//! - Mode dispatcher (Color / Fill / Draw / Speed)
//! - Cursor and draw engine
//! - Row-pair matrix refresh
//! - Movement clock shared with the periodic timer
//! - Controller (the device context running one main-loop iteration)
//! - Configuration types and parser

#![no_std]
#![deny(unsafe_code)]

pub mod canvas;
pub mod clock;
pub mod color;
pub mod config;
pub mod controller;
pub mod cursor;
pub mod display;
pub mod geometry;
pub mod input;
pub mod mode;
pub mod traits;

pub use canvas::{Canvas, FrameBuffer, MatrixFrame, MATRIX_COLS, MATRIX_ROWS};
pub use clock::MovementClock;
pub use color::{Color, Palette, PALETTE};
pub use config::DoodleConfig;
pub use controller::{Controller, Io, StepReport};
pub use cursor::DrawEngine;
pub use geometry::Point;
pub use input::AnalogMailbox;
pub use mode::{Mode, ModeDispatcher, Tool};
