//! Bit-serial refresh of a row-pair scanned panel
//!
//! One pass walks every row-pair. For each pair the previously latched
//! data is shown while the next pair's columns are shifted in; the output
//! is then blanked, the new data latched and the row address advanced.

use crate::canvas::FrameBuffer;
use crate::traits::MatrixBus;

/// Repaint the whole panel once from `frame`
pub fn refresh<M: MatrixBus, const W: usize, const H: usize>(
    bus: &mut M,
    frame: &FrameBuffer<W, H>,
) {
    bus.set_output_enable(false);
    bus.set_latch(true);

    for pair in 0..FrameBuffer::<W, H>::ROW_PAIRS {
        bus.set_output_enable(true);
        bus.set_latch(false);

        for col in 0..W {
            let (upper, lower) = frame.pair(col, pair);
            bus.set_color_bus(upper, lower);
            bus.pulse_clock();
            bus.clear_color_bus();
        }

        bus.set_output_enable(false);
        bus.set_latch(true);
        bus.set_row_address(pair as u8);
    }
}
