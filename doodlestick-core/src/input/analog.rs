//! Analog acquisition mailboxes
//!
//! Each axis has one sample cell and one "fresh" flag, both single atomic
//! words. The conversion-complete producer stores the sample and then
//! raises the flag; the main loop clears the flag, reads the sample and
//! restarts the conversion. This is a mailbox, not a queue: a completion
//! that lands before the previous one was consumed overwrites it. For a
//! continuously resampled joystick only the newest value matters.

use portable_atomic::{AtomicBool, AtomicU16, Ordering};

/// Joystick axis, one analog converter each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];
}

struct Slot {
    sample: AtomicU16,
    fresh: AtomicBool,
}

impl Slot {
    const fn new(initial: u16) -> Self {
        Self {
            sample: AtomicU16::new(initial),
            fresh: AtomicBool::new(true),
        }
    }
}

/// Shared cells between the converter producers and the main loop
pub struct AnalogMailbox {
    x: Slot,
    y: Slot,
}

impl AnalogMailbox {
    /// Create a mailbox holding `initial_x`/`initial_y`
    ///
    /// Both flags start raised so the first main-loop pass restarts both
    /// converters.
    pub const fn new(initial_x: u16, initial_y: u16) -> Self {
        Self {
            x: Slot::new(initial_x),
            y: Slot::new(initial_y),
        }
    }

    fn slot(&self, axis: Axis) -> &Slot {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    /// Producer side: store a completed conversion and flag it
    pub fn deposit(&self, axis: Axis, raw: u16) {
        let slot = self.slot(axis);
        slot.sample.store(raw, Ordering::Relaxed);
        slot.fresh.store(true, Ordering::Release);
    }

    /// Whether a sample arrived since the flag was last cleared
    pub fn sample_fresh(&self, axis: Axis) -> bool {
        self.slot(axis).fresh.load(Ordering::Acquire)
    }

    pub fn clear_fresh(&self, axis: Axis) {
        self.slot(axis).fresh.store(false, Ordering::Relaxed);
    }

    /// Latest stored sample, fresh or not
    pub fn read_sample(&self, axis: Axis) -> u16 {
        self.slot(axis).sample.load(Ordering::Acquire)
    }

    /// Consumer side: clear the flag and return the sample if it was fresh
    ///
    /// The flag is cleared before the sample is read, so a completion
    /// racing with this call is either returned now or flagged for the
    /// next call; it is never lost behind a cleared flag.
    pub fn take(&self, axis: Axis) -> Option<u16> {
        if self.sample_fresh(axis) {
            self.clear_fresh(axis);
            Some(self.read_sample(axis))
        } else {
            None
        }
    }
}
