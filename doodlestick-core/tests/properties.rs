//! Property tests for the drawing core

use doodlestick_core::canvas::MatrixFrame;
use doodlestick_core::geometry::{LinePoints, Point};
use doodlestick_core::input::{JoystickCalibration, JoystickReading};
use doodlestick_core::traits::ButtonInput;
use doodlestick_core::{Canvas, Color, DrawEngine, PALETTE};
use proptest::prelude::*;

struct Released;

impl ButtonInput for Released {
    fn is_pressed(&mut self) -> bool {
        false
    }
}

fn color() -> impl Strategy<Value = Color> {
    (0usize..PALETTE.len()).prop_map(|i| PALETTE[i])
}

fn reading() -> impl Strategy<Value = JoystickReading> {
    (0u16..=4095, 0u16..=4095).prop_map(|(x, y)| JoystickReading { x, y })
}

proptest! {
    #[test]
    fn in_range_write_reads_back(x in 0i16..32, y in 0i16..16, c in color()) {
        let mut frame = MatrixFrame::default();
        prop_assert!(frame.set(Point::new(x, y), c));
        prop_assert_eq!(frame.get(Point::new(x, y)), Some(c));
    }

    #[test]
    fn out_of_range_write_changes_nothing(x in -64i16..96, y in -64i16..96, c in color()) {
        prop_assume!(!(0..32).contains(&x) || !(0..16).contains(&y));
        let mut frame = MatrixFrame::new(Color::BLUE);
        let before = frame.clone();
        prop_assert!(!frame.set(Point::new(x, y), c));
        prop_assert_eq!(frame, before);
    }

    #[test]
    fn cursor_stays_on_matrix(moves in prop::collection::vec(reading(), 1..200)) {
        let mut canvas = Canvas::<32, 16>::default();
        let mut engine = DrawEngine::new(&canvas, JoystickCalibration::default(), 5);
        engine.set_pen(true);
        for r in moves {
            engine.tick(&mut canvas, r, &mut Released);
            let p = engine.position();
            prop_assert!((0..32).contains(&p.x) && (0..16).contains(&p.y));
        }
    }

    #[test]
    fn line_is_connected_with_endpoints(
        x0 in -8i16..40,
        y0 in -8i16..24,
        x1 in -8i16..40,
        y1 in -8i16..24
    ) {
        let from = Point::new(x0, y0);
        let to = Point::new(x1, y1);
        let mut prev: Option<Point> = None;
        let mut count = 0usize;

        for p in LinePoints::new(from, to) {
            if let Some(q) = prev {
                prop_assert!((p.x - q.x).abs() <= 1 && (p.y - q.y).abs() <= 1);
                prop_assert!(p != q);
            } else {
                prop_assert_eq!(p, from);
            }
            prev = Some(p);
            count += 1;
        }

        prop_assert_eq!(prev, Some(to));
        let span = (x1 - x0).abs().max((y1 - y0).abs()) as usize;
        prop_assert_eq!(count, span + 1);
    }

    #[test]
    fn fill_is_idempotent(first in color(), second in color()) {
        let mut once = MatrixFrame::new(first);
        once.fill(second);
        let mut twice = once.clone();
        twice.fill(second);
        prop_assert_eq!(once, twice);
    }
}
