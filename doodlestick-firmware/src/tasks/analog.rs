//! Joystick converter tasks
//!
//! Each task waits for its start signal, runs one conversion and deposits
//! the result in the mailbox. The main loop raises the start signal again
//! after consuming the sample.

use defmt::*;
use embassy_stm32::adc::{Adc, AnyAdcChannel, Instance};
use embassy_stm32::peripherals::{ADC1, ADC2};

use doodlestick_core::input::Axis;

use crate::channels::{start_signal, MAILBOX};

async fn convert_forever<T: Instance>(
    axis: Axis,
    adc: &mut Adc<'static, T>,
    channel: &mut AnyAdcChannel<'static, T>,
) -> ! {
    loop {
        start_signal(axis).wait().await;
        let raw = adc.blocking_read(channel);
        MAILBOX.deposit(axis, raw);
        trace!("{} sample {}", axis, raw);
    }
}

#[embassy_executor::task]
pub async fn x_converter_task(mut adc: Adc<'static, ADC1>, mut channel: AnyAdcChannel<'static, ADC1>) {
    info!("X converter task started");
    convert_forever(Axis::X, &mut adc, &mut channel).await
}

#[embassy_executor::task]
pub async fn y_converter_task(mut adc: Adc<'static, ADC2>, mut channel: AnyAdcChannel<'static, ADC2>) {
    info!("Y converter task started");
    convert_forever(Axis::Y, &mut adc, &mut channel).await
}
