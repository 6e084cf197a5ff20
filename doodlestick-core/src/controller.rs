//! Main-loop device context
//!
//! [`Controller`] owns every piece of main-loop state and runs one loop
//! iteration per [`Controller::step`]:
//!
//! 1. Drain the analog mailboxes and restart the converters
//! 2. Scan the keypad and dispatch the key
//! 3. Apply the effect of the current mode
//! 4. If the movement clock is due, tick the cursor and place shape points
//! 5. Repaint the matrix

use crate::canvas::Canvas;
use crate::clock::MovementClock;
use crate::color::{Color, PALETTE, PALETTE_SIZE};
use crate::config::DoodleConfig;
use crate::cursor::{DrawEngine, Tick};
use crate::display::refresh;
use crate::geometry::Shape;
use crate::input::{self, AnalogMailbox, Axis, JoystickReading, Key, KeyFilter};
use crate::mode::{Dispatch, KeyCommand, Mode, ModeDispatcher, Tool};
use crate::traits::{ButtonInput, ConversionStarter, KeypadBus, MatrixBus};

/// Background of the power-on splash and the smiley tool
pub const SPLASH_COLOR: Color = Color::CYAN;

/// Background of the "hi" greeting
pub const GREETING_COLOR: Color = Color::PURPLE;

/// Hardware the controller drives each iteration
pub struct Io<M, K, B, C> {
    pub matrix: M,
    pub keypad: K,
    pub button: B,
    pub converter: C,
}

/// What one iteration did, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepReport {
    /// Key reported after the repeat filter
    pub key: Option<Key>,
    pub dispatch: Option<Dispatch>,
    /// Cursor tick, if the movement clock was due
    pub tick: Option<Tick>,
    /// Shape completed by a button press
    pub shape: Option<Shape>,
}

/// Device context for a `W` × `H` matrix
pub struct Controller<'a, const W: usize, const H: usize> {
    canvas: Canvas<W, H>,
    engine: DrawEngine<W, H>,
    dispatcher: ModeDispatcher,
    keys: KeyFilter,
    reading: JoystickReading,
    mailbox: &'a AnalogMailbox,
    clock: &'a MovementClock,
}

impl<'a, const W: usize, const H: usize> Controller<'a, W, H> {
    /// Power-on state: splash on screen, cursor at the origin, red pen, trace tool
    pub fn new(
        config: &DoodleConfig,
        mailbox: &'a AnalogMailbox,
        clock: &'a MovementClock,
    ) -> Self {
        let mut canvas = Canvas::default();
        canvas.smiley(SPLASH_COLOR);
        let mut engine = DrawEngine::new(&canvas, config.joystick, config.cursor.blink_threshold);
        let dispatcher = ModeDispatcher::new();
        if let Some(pen) = dispatcher.mode().tool().and_then(Tool::pen) {
            engine.set_pen(pen);
        }

        Self {
            canvas,
            engine,
            dispatcher,
            keys: KeyFilter::new(config.keypad.repeat),
            reading: JoystickReading::centered(&config.joystick),
            mailbox,
            clock,
        }
    }

    pub fn canvas(&self) -> &Canvas<W, H> {
        &self.canvas
    }

    pub fn engine(&self) -> &DrawEngine<W, H> {
        &self.engine
    }

    pub fn mode(&self) -> Mode {
        self.dispatcher.mode()
    }

    pub fn reading(&self) -> JoystickReading {
        self.reading
    }

    /// Run one main-loop iteration
    pub fn step<M, K, B, C>(&mut self, io: &mut Io<M, K, B, C>) -> StepReport
    where
        M: MatrixBus,
        K: KeypadBus,
        B: ButtonInput,
        C: ConversionStarter,
    {
        let mut report = StepReport::default();

        self.drain_analog(&mut io.converter);

        report.key = self.keys.filter(input::scan(&mut io.keypad));
        if let Some(command) = report.key.and_then(|k| KeyCommand::from_value(k.value())) {
            let dispatch = self.dispatcher.handle(command);
            if dispatch.entered_draw() {
                self.engine.reset_shapes();
            }
            report.dispatch = Some(dispatch);
        }

        self.apply_mode();

        if self.clock.take_due() {
            let tick = self.engine.tick(&mut self.canvas, self.reading, &mut io.button);
            report.tick = Some(tick);

            if self.engine.take_press() {
                if let Some(kind) = self.dispatcher.mode().tool().and_then(Tool::shape_kind) {
                    report.shape = self.engine.place_point(&mut self.canvas, kind);
                }
            }
        }

        refresh(&mut io.matrix, self.canvas.frame());
        report
    }

    fn drain_analog<C: ConversionStarter>(&mut self, converter: &mut C) {
        for axis in Axis::ALL {
            if let Some(raw) = self.mailbox.take(axis) {
                self.reading.set(axis, raw);
                converter.start_conversion(axis);
            }
        }
    }

    fn apply_mode(&mut self) {
        match self.dispatcher.mode() {
            Mode::Color(Some(s)) => self.canvas.set_draw_color(PALETTE[s.index()]),
            Mode::Fill(Some(s)) => {
                self.canvas.fill(PALETTE[s.index()]);
                self.engine.sync_under_cursor(&self.canvas);
                self.dispatcher.clear_selection();
            }
            Mode::Draw(Some(tool)) => self.apply_tool(tool),
            Mode::Speed(Some(s)) => self.clock.set_prescaler(s.get() + 1),
            Mode::Color(None) | Mode::Fill(None) | Mode::Draw(None) | Mode::Speed(None) => {}
        }
    }

    fn apply_tool(&mut self, tool: Tool) {
        if let Some(pen) = tool.pen() {
            self.engine.set_pen(pen);
        }

        match tool {
            Tool::Smiley => self.canvas.smiley(SPLASH_COLOR),
            Tool::Greeting => {
                if self.reading.x % 2 == 1 {
                    self.canvas.hi(GREETING_COLOR);
                } else {
                    self.canvas.smiley(SPLASH_COLOR);
                }
            }
            Tool::Clear => self.canvas.fill(PALETTE[PALETTE_SIZE - 1]),
            Tool::Free | Tool::Trace | Tool::Line | Tool::Rectangle | Tool::Triangle => return,
        }

        self.engine.sync_under_cursor(&self.canvas);
        if tool.is_one_shot() {
            self.dispatcher.clear_selection();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::patterns::SMILEY;
    use crate::geometry::Point;
    use crate::mode::Selection;

    struct NullMatrix {
        clocks: usize,
    }

    impl MatrixBus for NullMatrix {
        fn set_row_address(&mut self, _pair: u8) {}
        fn set_output_enable(&mut self, _enabled: bool) {}
        fn set_latch(&mut self, _asserted: bool) {}
        fn pulse_clock(&mut self) {
            self.clocks += 1;
        }
        fn set_color_bus(&mut self, _upper: Color, _lower: Color) {}
        fn clear_color_bus(&mut self) {}
    }

    /// Keypad holding at most one key
    struct OneKey {
        held: Option<(u8, u8)>,
        driven: Option<u8>,
    }

    impl OneKey {
        fn press(&mut self, label: char) {
            let index = input::keypad::KEY_CHARS
                .iter()
                .position(|c| *c == label)
                .unwrap() as u8;
            self.held = Some((index / 3, index % 3));
        }

        fn release(&mut self) {
            self.held = None;
        }
    }

    impl KeypadBus for OneKey {
        fn drive_column(&mut self, col: u8) {
            self.driven = Some(col);
        }
        fn release_column(&mut self, _col: u8) {
            self.driven = None;
        }
        fn read_rows(&mut self) -> u8 {
            match (self.held, self.driven) {
                (Some((row, col)), Some(driven)) if col == driven => 1 << row,
                _ => 0,
            }
        }
    }

    struct Button(bool);

    impl ButtonInput for Button {
        fn is_pressed(&mut self) -> bool {
            self.0
        }
    }

    #[derive(Default)]
    struct Starter {
        x: usize,
        y: usize,
    }

    impl ConversionStarter for Starter {
        fn start_conversion(&mut self, axis: Axis) {
            match axis {
                Axis::X => self.x += 1,
                Axis::Y => self.y += 1,
            }
        }
    }

    type TestIo = Io<NullMatrix, OneKey, Button, Starter>;

    fn io() -> TestIo {
        Io {
            matrix: NullMatrix { clocks: 0 },
            keypad: OneKey {
                held: None,
                driven: None,
            },
            button: Button(false),
            converter: Starter::default(),
        }
    }

    /// Press and release `label`, one iteration each
    fn tap(controller: &mut Controller<'_, 32, 16>, io: &mut TestIo, label: char) {
        io.keypad.press(label);
        controller.step(io);
        io.keypad.release();
        controller.step(io);
    }

    #[test]
    fn test_power_on_state() {
        let mailbox = AnalogMailbox::new(2050, 1950);
        let clock = MovementClock::new();
        let controller = Controller::<32, 16>::new(&DoodleConfig::default(), &mailbox, &clock);

        assert_eq!(controller.mode(), Mode::Draw(Some(Tool::Trace)));
        assert_eq!(controller.canvas().draw_color(), Color::RED);
        assert_eq!(controller.engine().position(), Point::ORIGIN);
        assert!(controller.engine().pen_down());
        let frame = controller.canvas().frame();
        assert_eq!(frame.count(Color::BLACK), SMILEY.len());
    }

    #[test]
    fn test_first_step_restarts_both_converters() {
        let mailbox = AnalogMailbox::new(2050, 1950);
        let clock = MovementClock::new();
        let mut controller = Controller::<32, 16>::new(&DoodleConfig::default(), &mailbox, &clock);
        let mut io = io();

        controller.step(&mut io);
        assert_eq!((io.converter.x, io.converter.y), (1, 1));
        assert_eq!(io.matrix.clocks, 8 * 32);

        controller.step(&mut io);
        assert_eq!((io.converter.x, io.converter.y), (1, 1));

        mailbox.deposit(Axis::Y, 4000);
        controller.step(&mut io);
        assert_eq!((io.converter.x, io.converter.y), (1, 2));
        assert_eq!(controller.reading().y, 4000);
    }

    #[test]
    fn test_cursor_only_moves_when_due() {
        let mailbox = AnalogMailbox::new(2960, 1950);
        let clock = MovementClock::new();
        let mut controller = Controller::<32, 16>::new(&DoodleConfig::default(), &mailbox, &clock);
        let mut io = io();

        let report = controller.step(&mut io);
        assert_eq!(report.tick, None);
        assert_eq!(controller.engine().position(), Point::ORIGIN);

        clock.mark_due();
        let report = controller.step(&mut io);
        assert!(report.tick.unwrap().moved);
        assert_eq!(controller.engine().position(), Point::new(1, 0));
        // Trace tool is active at power-on
        assert_eq!(controller.canvas().get(Point::new(1, 0)), Some(Color::RED));
    }

    #[test]
    fn test_trace_pen_down_when_first_step_has_a_key() {
        let mailbox = AnalogMailbox::new(4095, 1950);
        let clock = MovementClock::new();
        let mut controller = Controller::<32, 16>::new(&DoodleConfig::default(), &mailbox, &clock);
        let mut io = io();

        io.keypad.press('8');
        clock.mark_due();
        let report = controller.step(&mut io);
        assert_eq!(controller.mode(), Mode::Draw(Some(Tool::Clear)));
        assert!(report.tick.unwrap().moved);
        assert_eq!(controller.canvas().get(Point::new(1, 0)), Some(Color::RED));
    }

    #[test]
    fn test_clear_tool_repaints_every_iteration() {
        let mailbox = AnalogMailbox::new(4095, 1950);
        let clock = MovementClock::new();
        let mut controller = Controller::<32, 16>::new(&DoodleConfig::default(), &mailbox, &clock);
        let mut io = io();

        tap(&mut controller, &mut io, '2');
        tap(&mut controller, &mut io, '8');
        assert_eq!(controller.mode(), Mode::Draw(Some(Tool::Clear)));
        assert_eq!(controller.canvas().frame().count(Color::BLACK), 32 * 16);

        // Trace draws over the cleared screen
        clock.mark_due();
        controller.step(&mut io);
        assert_eq!(controller.engine().position(), Point::new(1, 0));
        assert_eq!(controller.canvas().get(Point::new(1, 0)), Some(Color::RED));
        assert_eq!(controller.canvas().frame().count(Color::BLACK), 32 * 16 - 1);

        // Next iteration clears it again
        let report = controller.step(&mut io);
        assert_eq!(report.tick, None);
        assert_eq!(controller.canvas().frame().count(Color::BLACK), 32 * 16);
        assert_eq!(controller.mode(), Mode::Draw(Some(Tool::Clear)));
    }

    #[test]
    fn test_smiley_tool_repaints_every_iteration() {
        let mailbox = AnalogMailbox::new(4095, 1950);
        let clock = MovementClock::new();
        let mut controller = Controller::<32, 16>::new(&DoodleConfig::default(), &mailbox, &clock);
        let mut io = io();

        tap(&mut controller, &mut io, '2');
        tap(&mut controller, &mut io, '6');
        assert_eq!(controller.mode(), Mode::Draw(Some(Tool::Smiley)));

        clock.mark_due();
        controller.step(&mut io);
        assert_eq!(controller.canvas().get(Point::new(1, 0)), Some(Color::RED));

        let report = controller.step(&mut io);
        assert_eq!(report.tick, None);
        let frame = controller.canvas().frame();
        assert_eq!(frame.get(Point::new(1, 0)), Some(Color::CYAN));
        assert_eq!(frame.count(Color::CYAN), 32 * 16 - SMILEY.len());
        assert_eq!(frame.count(Color::BLACK), SMILEY.len());
        assert_eq!(controller.mode(), Mode::Draw(Some(Tool::Smiley)));
    }

    #[test]
    fn test_color_then_fill() {
        let mailbox = AnalogMailbox::new(2050, 1950);
        let clock = MovementClock::new();
        let mut controller = Controller::<32, 16>::new(&DoodleConfig::default(), &mailbox, &clock);
        let mut io = io();

        tap(&mut controller, &mut io, '*');
        tap(&mut controller, &mut io, '3');
        assert_eq!(controller.canvas().draw_color(), Color::BLUE);

        tap(&mut controller, &mut io, '0');
        tap(&mut controller, &mut io, '4');
        assert_eq!(controller.canvas().frame().count(Color::YELLOW), 32 * 16);
        // Fill is one-shot
        assert_eq!(controller.mode(), Mode::Fill(None));
    }

    #[test]
    fn test_speed_sets_prescaler() {
        let mailbox = AnalogMailbox::new(2050, 1950);
        let clock = MovementClock::new();
        let mut controller = Controller::<32, 16>::new(&DoodleConfig::default(), &mailbox, &clock);
        let mut io = io();

        tap(&mut controller, &mut io, '9');
        assert_eq!(controller.mode(), Mode::Speed(None));
        assert_eq!(clock.prescaler(), 9);

        tap(&mut controller, &mut io, '1');
        assert_eq!(controller.mode(), Mode::Speed(Selection::new(1)));
        assert_eq!(clock.prescaler(), 2);
        assert_eq!(clock.period_ms(), 30);
    }

    #[test]
    fn test_line_from_two_presses() {
        let mailbox = AnalogMailbox::new(2050, 1950);
        let clock = MovementClock::new();
        let mut config = DoodleConfig::default();
        config.cursor.blink_threshold = 1;
        let mut controller = Controller::<32, 16>::new(&config, &mailbox, &clock);
        let mut io = io();

        tap(&mut controller, &mut io, '8');
        tap(&mut controller, &mut io, '3');
        assert_eq!(controller.mode(), Mode::Draw(Some(Tool::Line)));
        assert!(!controller.engine().pen_down());

        // Clear black, then draw the line in green
        tap(&mut controller, &mut io, '*');
        tap(&mut controller, &mut io, '2');
        tap(&mut controller, &mut io, '#');
        tap(&mut controller, &mut io, '3');

        io.button.0 = true;
        clock.mark_due();
        let first = controller.step(&mut io);
        assert!(first.tick.unwrap().pressed);
        assert_eq!(first.shape, None);

        // Let the button be seen released before moving on
        io.button.0 = false;
        clock.mark_due();
        controller.step(&mut io);

        mailbox.deposit(Axis::X, 4095);
        for _ in 0..4 {
            clock.mark_due();
            controller.step(&mut io);
        }
        mailbox.deposit(Axis::X, 2050);
        controller.step(&mut io);
        assert_eq!(controller.engine().position(), Point::new(4, 0));

        io.button.0 = true;
        clock.mark_due();
        let second = controller.step(&mut io);
        assert_eq!(
            second.shape,
            Some(Shape::Line(Point::ORIGIN, Point::new(4, 0)))
        );
        for x in 0..=4 {
            assert_eq!(controller.canvas().get(Point::new(x, 0)), Some(Color::GREEN));
        }
    }

    #[test]
    fn test_press_outside_shape_tool_is_dropped() {
        let mailbox = AnalogMailbox::new(2050, 1950);
        let clock = MovementClock::new();
        let mut config = DoodleConfig::default();
        config.cursor.blink_threshold = 1;
        let mut controller = Controller::<32, 16>::new(&config, &mailbox, &clock);
        let mut io = io();

        io.button.0 = true;
        clock.mark_due();
        let report = controller.step(&mut io);
        assert!(report.tick.unwrap().pressed);
        assert_eq!(report.shape, None);
        assert!(controller.engine().shapes().line.is_empty());

        // Switching to the line tool later does not replay the press
        io.button.0 = false;
        tap(&mut controller, &mut io, '3');
        clock.mark_due();
        controller.step(&mut io);
        assert!(controller.engine().shapes().line.is_empty());
    }

    #[test]
    fn test_greeting_picks_pattern_by_x_parity() {
        let mailbox = AnalogMailbox::new(2051, 1950);
        let clock = MovementClock::new();
        let mut controller = Controller::<32, 16>::new(&DoodleConfig::default(), &mailbox, &clock);
        let mut io = io();

        tap(&mut controller, &mut io, '7');
        assert_eq!(controller.mode(), Mode::Draw(None));
        let frame = controller.canvas().frame();
        assert_eq!(frame.get(Point::new(1, 1)), Some(Color::BLACK));
        assert_eq!(frame.count(Color::PURPLE), 32 * 16 - 14);
    }

    #[test]
    fn test_entering_draw_resets_shapes() {
        let mailbox = AnalogMailbox::new(2050, 1950);
        let clock = MovementClock::new();
        let mut config = DoodleConfig::default();
        config.cursor.blink_threshold = 1;
        let mut controller = Controller::<32, 16>::new(&config, &mailbox, &clock);
        let mut io = io();

        tap(&mut controller, &mut io, '5');
        io.button.0 = true;
        clock.mark_due();
        controller.step(&mut io);
        assert_eq!(controller.engine().shapes().triangle.len(), 1);

        io.keypad.press('#');
        let report = controller.step(&mut io);
        assert!(report.dispatch.unwrap().entered_draw());
        assert!(controller.engine().shapes().triangle.is_empty());
    }
}
