//! Cursor and draw engine
//!
//! Runs on each movement tick: moves the cursor by the joystick deflection,
//! leaves a trail when the pen is down, blinks the cursor while it rests,
//! and samples the joystick button at blink time. Button presses feed the
//! shape accumulators of the active shape tool.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::geometry::{Point, Shape, ShapeKind, ShapeSet};
use crate::input::{Axis, EdgeDetector, JoystickCalibration, JoystickReading};
use crate::traits::ButtonInput;

/// Rest ticks between blink toggles
pub const DEFAULT_BLINK_THRESHOLD: u8 = 5;

/// Cursor bookkeeping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CursorState {
    pub position: Point,
    pub previous: Point,
    /// Color of the cell under the cursor, as it is without the highlight
    pub remembered: Color,
    pub blink_count: u8,
    /// Highlight currently painted
    pub blink_on: bool,
}

impl CursorState {
    /// Cursor resting at `position` over a cell of `remembered`
    pub const fn at(position: Point, remembered: Color) -> Self {
        Self {
            position,
            previous: position,
            remembered,
            blink_count: 0,
            blink_on: false,
        }
    }
}

/// Color painted over the cursor cell while the highlight is on
pub const fn highlight(under: Color) -> Color {
    if under.is_black() {
        Color::WHITE
    } else {
        Color::BLACK
    }
}

/// What one movement tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tick {
    pub moved: bool,
    /// Blink toggled (and the button was sampled)
    pub blinked: bool,
    /// A button press was latched
    pub pressed: bool,
}

/// Cursor, pen, button edge and shape state
#[derive(Debug, Clone)]
pub struct DrawEngine<const W: usize, const H: usize> {
    cursor: CursorState,
    calibration: JoystickCalibration,
    blink_threshold: u8,
    pen_down: bool,
    button: EdgeDetector,
    pending_press: bool,
    shapes: ShapeSet,
}

impl<const W: usize, const H: usize> DrawEngine<W, H> {
    /// Cursor at the origin, pen up, remembering what the canvas shows there
    pub fn new(
        canvas: &Canvas<W, H>,
        calibration: JoystickCalibration,
        blink_threshold: u8,
    ) -> Self {
        let remembered = canvas.get(Point::ORIGIN).unwrap_or(Color::BLACK);
        Self {
            cursor: CursorState::at(Point::ORIGIN, remembered),
            calibration,
            blink_threshold: blink_threshold.max(1),
            pen_down: false,
            button: EdgeDetector::new(),
            pending_press: false,
            shapes: ShapeSet::new(),
        }
    }

    pub fn cursor(&self) -> &CursorState {
        &self.cursor
    }

    pub fn position(&self) -> Point {
        self.cursor.position
    }

    pub fn pen_down(&self) -> bool {
        self.pen_down
    }

    pub fn set_pen(&mut self, down: bool) {
        self.pen_down = down;
    }

    pub fn shapes(&self) -> &ShapeSet {
        &self.shapes
    }

    pub fn reset_shapes(&mut self) {
        self.shapes.reset_all();
    }

    fn step_axis(&self, axis: Axis, current: i16, raw: u16, extent: usize) -> i16 {
        let max = extent as i16 - 1;
        (current + self.calibration.deflection(axis, raw)).clamp(0, max)
    }

    /// Run one movement tick
    pub fn tick<B: ButtonInput>(
        &mut self,
        canvas: &mut Canvas<W, H>,
        reading: JoystickReading,
        button: &mut B,
    ) -> Tick {
        let mut tick = Tick::default();
        let from = self.cursor.position;
        self.cursor.previous = from;

        let to = Point::new(
            self.step_axis(Axis::X, from.x, reading.x, W),
            self.step_axis(Axis::Y, from.y, reading.y, H),
        );
        self.cursor.position = to;

        if self.pen_down {
            canvas.plot(to);
            if to == from {
                self.cursor.remembered = canvas.draw_color();
            }
        }

        if to == from {
            self.cursor.blink_count += 1;
            if self.cursor.blink_count >= self.blink_threshold {
                self.cursor.blink_count = 0;
                self.cursor.blink_on = !self.cursor.blink_on;
                let shown = if self.cursor.blink_on {
                    highlight(self.cursor.remembered)
                } else {
                    self.cursor.remembered
                };
                canvas.draw(to, shown);
                tick.blinked = true;

                if self.button.update(button.is_pressed()) {
                    self.pending_press = true;
                    tick.pressed = true;
                }
            }
        } else {
            canvas.draw(from, self.cursor.remembered);
            self.cursor.remembered = canvas.get(to).unwrap_or(Color::BLACK);
            self.cursor.blink_on = false;
            tick.moved = true;
        }

        tick
    }

    /// Consume a latched button press
    pub fn take_press(&mut self) -> bool {
        core::mem::take(&mut self.pending_press)
    }

    /// Capture the cursor position as the next point of a `kind` shape
    ///
    /// On completion the shape is rasterized in the draw color and returned.
    pub fn place_point(&mut self, canvas: &mut Canvas<W, H>, kind: ShapeKind) -> Option<Shape> {
        let shape = self.shapes.push(kind, self.cursor.position)?;
        canvas.draw_shape(shape);
        self.sync_under_cursor(canvas);
        Some(shape)
    }

    /// Re-read the cell under the cursor after a write the engine did not make
    pub fn sync_under_cursor(&mut self, canvas: &Canvas<W, H>) {
        if let Some(color) = canvas.get(self.cursor.position) {
            self.cursor.remembered = color;
        }
        self.cursor.blink_on = false;
    }
}
