//! Pin assignments for the reference STM32L476 board
//!
//! | Function        | Pins                                  |
//! |-----------------|---------------------------------------|
//! | Matrix R1 G1 B1 | PB0 PB1 PB2                           |
//! | Matrix R2 G2 B2 | PB3 PB4 PB5                           |
//! | Matrix A B C    | PC7 PC8 PC9                           |
//! | CLK LAT OE      | PC10 PC11 PC12 (OE active-low)        |
//! | Keypad columns  | PC4 PC5 PC6                           |
//! | Keypad rows     | PC0 PC1 PC2 PC3 (pull-down)           |
//! | Joystick X / Y  | PA0 (ADC1 IN5) / PA1 (ADC2 IN6)       |
//! | Joystick button | PA4 (active-low, pull-up)             |

use embassy_stm32::adc::{Adc, AdcChannel, AnyAdcChannel};
use embassy_stm32::gpio::{Input, Level, Output, Pin, Pull, Speed};
use embassy_stm32::peripherals::{ADC1, ADC2};
use embassy_stm32::{Peri, Peripherals};

use doodlestick_drivers::{GpioButton, GpioKeypad, Hub75Bus, Hub75Pins};

pub type Matrix = Hub75Bus<Output<'static>>;
pub type Keypad = GpioKeypad<Output<'static>, Input<'static>>;
pub type Button = GpioButton<Input<'static>>;

/// Everything the firmware drives
pub struct Board {
    pub matrix: Matrix,
    pub keypad: Keypad,
    pub button: Button,
    pub adc_x: Adc<'static, ADC1>,
    pub joystick_x: AnyAdcChannel<'static, ADC1>,
    pub adc_y: Adc<'static, ADC2>,
    pub joystick_y: AnyAdcChannel<'static, ADC2>,
}

fn fast_output(pin: Peri<'static, impl Pin>) -> Output<'static> {
    Output::new(pin, Level::Low, Speed::VeryHigh)
}

fn slow_output(pin: Peri<'static, impl Pin>) -> Output<'static> {
    Output::new(pin, Level::Low, Speed::Low)
}

impl Board {
    pub fn take(p: Peripherals) -> Self {
        let matrix = Hub75Bus::new(Hub75Pins {
            upper: [fast_output(p.PB0), fast_output(p.PB1), fast_output(p.PB2)],
            lower: [fast_output(p.PB3), fast_output(p.PB4), fast_output(p.PB5)],
            address: [fast_output(p.PC7), fast_output(p.PC8), fast_output(p.PC9)],
            clock: fast_output(p.PC10),
            latch: fast_output(p.PC11),
            output_enable: Output::new(p.PC12, Level::High, Speed::VeryHigh),
        });

        let keypad = GpioKeypad::new(
            [slow_output(p.PC4), slow_output(p.PC5), slow_output(p.PC6)],
            [
                Input::new(p.PC0, Pull::Down),
                Input::new(p.PC1, Pull::Down),
                Input::new(p.PC2, Pull::Down),
                Input::new(p.PC3, Pull::Down),
            ],
        );

        let button = GpioButton::new_active_low(Input::new(p.PA4, Pull::Up));

        Self {
            matrix,
            keypad,
            button,
            adc_x: Adc::new(p.ADC1),
            joystick_x: p.PA0.degrade_adc(),
            adc_y: Adc::new(p.ADC2),
            joystick_y: p.PA1.degrade_adc(),
        }
    }
}
