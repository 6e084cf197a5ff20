//! Doodlestick - joystick and keypad drawing toy
//!
//! Firmware binary for an STM32L476 board driving a 32×16 HUB75 RGB matrix.
//! A single main loop polls the keypad, applies the current mode, moves the
//! cursor on each movement tick and repaints the matrix. Joystick samples
//! and movement ticks come from background tasks through atomic cells.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_futures::yield_now;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use doodlestick_core::{Controller, Io, MATRIX_COLS, MATRIX_ROWS};

use crate::board::Board;
use crate::channels::{SignalStarter, CLOCK, MAILBOX};

mod board;
mod channels;
mod config;
mod tasks;

type MatrixController = Controller<'static, MATRIX_COLS, MATRIX_ROWS>;

// Frame buffer and cursor state live for the program lifetime
static CONTROLLER: StaticCell<MatrixController> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Doodlestick firmware starting...");

    let p = embassy_stm32::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load();
    info!(
        "Joystick neutral=({}, {}) threshold={}, keypad repeat {}",
        config.joystick.neutral_x,
        config.joystick.neutral_y,
        config.joystick.threshold,
        config.keypad.repeat
    );
    CLOCK.configure(config.timer.base_tick_ms, config.timer.prescaler);

    let board = Board::take(p);
    info!("Matrix, keypad and joystick initialized");

    spawner
        .spawn(tasks::x_converter_task(board.adc_x, board.joystick_x))
        .unwrap();
    spawner
        .spawn(tasks::y_converter_task(board.adc_y, board.joystick_y))
        .unwrap();
    spawner.spawn(tasks::movement_task()).unwrap();

    let controller = CONTROLLER.init(Controller::new(&config, &MAILBOX, &CLOCK));
    let mut io = Io {
        matrix: board.matrix,
        keypad: board.keypad,
        button: board.button,
        converter: SignalStarter,
    };

    info!("Entering main loop");
    loop {
        let report = controller.step(&mut io);

        if let Some(dispatch) = report.dispatch {
            info!("Key {}: {}", report.key.map(|k| k.char()), dispatch);
        }
        if let Some(shape) = report.shape {
            info!("Drew {}", shape);
        }
        if report.tick.is_some_and(|t| t.pressed) {
            debug!("Button press at {}", controller.engine().position());
        }

        yield_now().await;
    }
}
