//! Button edge detection

/// Turns a sampled level into press events
///
/// Only an inactive → active transition between two consecutive samples
/// yields an event, so a button held across many samples counts once.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeDetector {
    last: bool,
}

impl EdgeDetector {
    pub const fn new() -> Self {
        Self { last: false }
    }

    /// Record a new sample; true on a rising edge
    pub fn update(&mut self, pressed: bool) -> bool {
        let edge = pressed && !self.last;
        self.last = pressed;
        edge
    }

    /// Level seen at the last sample
    pub fn level(&self) -> bool {
        self.last
    }
}
