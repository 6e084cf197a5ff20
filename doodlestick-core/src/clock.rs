//! Movement clock shared with the periodic timer
//!
//! The timer producer raises `due` once per period; the main loop consumes
//! it to run one cursor tick. The period is `base_tick × (prescaler + 1)`,
//! and Speed mode changes the prescaler while the timer keeps running.

use portable_atomic::{AtomicBool, AtomicU32, AtomicU8, Ordering};

/// Base tick giving the reference 100 ms cadence with prescaler 9
pub const DEFAULT_BASE_TICK_MS: u32 = 10;

/// Prescaler at power-on
pub const DEFAULT_PRESCALER: u8 = 9;

/// Movement-due flag plus timer prescaler
pub struct MovementClock {
    due: AtomicBool,
    prescaler: AtomicU8,
    base_tick_ms: AtomicU32,
}

impl Default for MovementClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MovementClock {
    pub const fn new() -> Self {
        Self {
            due: AtomicBool::new(false),
            prescaler: AtomicU8::new(DEFAULT_PRESCALER),
            base_tick_ms: AtomicU32::new(DEFAULT_BASE_TICK_MS),
        }
    }

    /// Apply configured timing; called once before the timer starts
    pub fn configure(&self, base_tick_ms: u32, prescaler: u8) {
        self.base_tick_ms.store(base_tick_ms.max(1), Ordering::Relaxed);
        self.prescaler.store(prescaler, Ordering::Relaxed);
    }

    /// Producer side: one period elapsed
    pub fn mark_due(&self) {
        self.due.store(true, Ordering::Release);
    }

    pub fn is_due(&self) -> bool {
        self.due.load(Ordering::Acquire)
    }

    pub fn clear_due(&self) {
        self.due.store(false, Ordering::Relaxed);
    }

    /// Consume the due flag; true if a period elapsed since the last call
    pub fn take_due(&self) -> bool {
        self.due.swap(false, Ordering::AcqRel)
    }

    pub fn set_prescaler(&self, prescaler: u8) {
        self.prescaler.store(prescaler, Ordering::Relaxed);
    }

    pub fn prescaler(&self) -> u8 {
        self.prescaler.load(Ordering::Relaxed)
    }

    /// Current timer period in milliseconds
    pub fn period_ms(&self) -> u32 {
        let base = self.base_tick_ms.load(Ordering::Relaxed);
        base.saturating_mul(u32::from(self.prescaler()) + 1)
    }
}
