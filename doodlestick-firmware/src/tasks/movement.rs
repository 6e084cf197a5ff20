//! Movement timer task
//!
//! Raises the movement-due flag once per period. The period is re-read
//! every cycle so a Speed-mode change applies from the next tick.

use defmt::*;
use embassy_time::{Duration, Timer};

use crate::channels::CLOCK;

#[embassy_executor::task]
pub async fn movement_task() {
    info!("Movement task started ({} ms period)", CLOCK.period_ms());

    let mut last_period = CLOCK.period_ms();
    loop {
        let period = CLOCK.period_ms();
        if period != last_period {
            debug!("Movement period now {} ms", period);
            last_period = period;
        }

        Timer::after(Duration::from_millis(u64::from(period))).await;
        CLOCK.mark_due();
    }
}
