//! Infallible pin helpers

use core::convert::Infallible;

use embedded_hal::digital::{InputPin, OutputPin, PinState};

pub(crate) fn drive<P: OutputPin<Error = Infallible>>(pin: &mut P, high: bool) {
    match pin.set_state(PinState::from(high)) {
        Ok(()) => {}
        Err(e) => match e {},
    }
}

pub(crate) fn read<P: InputPin<Error = Infallible>>(pin: &mut P) -> bool {
    match pin.is_high() {
        Ok(high) => high,
        Err(e) => match e {},
    }
}
