//! Frame buffer and drawing
//!
//! The frame buffer is pure data: owned by the draw engine and read by the
//! display refresh each main-loop iteration.

pub mod draw;
pub mod framebuffer;
pub mod patterns;

pub use draw::Canvas;
pub use framebuffer::FrameBuffer;

/// Columns on the reference 32×16 panel
pub const MATRIX_COLS: usize = 32;

/// Rows on the reference 32×16 panel
pub const MATRIX_ROWS: usize = 16;

/// Frame buffer sized for the reference panel
pub type MatrixFrame = FrameBuffer<MATRIX_COLS, MATRIX_ROWS>;
