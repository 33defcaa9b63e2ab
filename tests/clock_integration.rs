// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced::Point;
use iced_clock::clock::angle::polar;
use iced_clock::clock::snapshot::{KEY_BASE_COLOR, KEY_SUPER_STATE};
use iced_clock::clock::{
    Bundle, ClockColor, ClockFace, ClockSnapshot, ClockStyleConfig, DrawCommand, FixedClock,
    SizeConstraint, PaintStyle, RecordingSurface, TimeSample, REFRESH_PERIOD,
};

fn sized_face(width: f32, height: f32) -> ClockFace {
    let mut face = ClockFace::default();
    face.resize(width, height);
    face
}

fn line_angle(from: Point, to: Point) -> f32 {
    (to.y - from.y).atan2(to.x - from.x)
}

#[test]
fn square_face_at_three_oclock() {
    let face = sized_face(240.0, 240.0);
    let mut surface = RecordingSurface::new();
    let redraw = face.draw(&mut surface, &FixedClock(TimeSample::new(3, 0, 0)));
    assert_eq!(redraw.after, REFRESH_PERIOD);

    let (center, radius, paint) = surface.circles().next().expect("base disc");
    assert_eq!(center, Point::new(120.0, 120.0));
    assert_abs_diff_eq!(radius, 120.0);
    assert_eq!(paint.style, PaintStyle::Fill);
    assert_eq!(paint.color, ClockColor::LIGHT_GRAY);

    let labels: Vec<&str> = surface.texts().map(|(label, _, _)| label).collect();
    let expected: Vec<String> = (1..=12).map(|hour| hour.to_string()).collect();
    assert_eq!(labels, expected);

    // Hour hand points right, minute hand points up.
    let lines: Vec<_> = surface.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_abs_diff_eq!(line_angle(lines[0].0, lines[0].1), 0.0, epsilon = 1e-4);
    assert_abs_diff_eq!(
        line_angle(lines[1].0, lines[1].1),
        -std::f32::consts::FRAC_PI_2,
        epsilon = 1e-4
    );
}

#[test]
fn wide_allocation_uses_shorter_side() {
    let face = sized_face(200.0, 100.0);
    assert_abs_diff_eq!(face.radius(), 50.0);
    assert_eq!(face.center(), Point::new(100.0, 50.0));
}

#[test]
fn dots_sit_on_the_inner_ring() {
    let face = sized_face(240.0, 240.0);
    let ring = face.radius() * 5.0 / 6.0;
    for dot in face.tick_dots() {
        let dx = dot.center.x - face.center().x;
        let dy = dot.center.y - face.center().y;
        assert_abs_diff_eq!(dx.hypot(dy), ring, epsilon = 1e-3);
    }
    // Dot zero sits at three o'clock; ticks carry no rotational offset.
    let first = face.tick_dots().next().expect("dot zero");
    let expected = polar(face.center(), ring, 0.0);
    assert_abs_diff_eq!(first.center.x, expected.x, epsilon = 1e-4);
    assert_abs_diff_eq!(first.center.y, expected.y, epsilon = 1e-4);
}

#[test]
fn measure_respects_caller_limits() {
    let face = ClockFace::default();
    let unconstrained = face.measure(SizeConstraint::Unspecified, SizeConstraint::Unspecified);
    assert_eq!(unconstrained.width, unconstrained.height);

    let capped = face.measure(SizeConstraint::AtMost(100.0), SizeConstraint::Exactly(300.0));
    assert_abs_diff_eq!(capped.width, 100.0);
    assert_abs_diff_eq!(capped.height, 300.0);
}

#[test]
fn configured_colors_reach_the_surface() {
    let config = ClockStyleConfig {
        base_color: Some(ClockColor::from_rgb(0x10, 0x20, 0x30)),
        dots_color: Some(ClockColor::WHITE),
        ..ClockStyleConfig::default()
    };
    let mut face = ClockFace::from_config(&config);
    face.resize(120.0, 120.0);

    let mut surface = RecordingSurface::new();
    let _ = face.draw_at(&mut surface, TimeSample::new(8, 20, 40));

    let base = match &surface.commands()[0] {
        DrawCommand::Circle { paint, .. } => paint.color,
        other => panic!("expected base disc, got {other:?}"),
    };
    assert_eq!(base, ClockColor::from_rgb(0x10, 0x20, 0x30));
    // Ring, then 60 dots.
    assert!(surface
        .circles()
        .skip(2)
        .all(|(_, _, paint)| paint.color == ClockColor::WHITE));
}

#[test]
fn snapshot_bytes_rebuild_an_equivalent_face() {
    let mut original = sized_face(180.0, 180.0);
    original.set_second_hand_color(ClockColor::RED);
    let bytes = original
        .save_state(Some(vec![1, 2, 3]))
        .to_bytes()
        .expect("encode");

    let mut rebuilt = sized_face(180.0, 180.0);
    let parent = rebuilt.restore_from_bytes(&bytes);
    assert_eq!(parent, Some(vec![1, 2, 3]));
    assert_eq!(rebuilt.style(), original.style());

    let time = TimeSample::new(11, 59, 59);
    let (mut a, mut b) = (RecordingSurface::new(), RecordingSurface::new());
    let _ = original.draw_at(&mut a, time);
    let _ = rebuilt.draw_at(&mut b, time);
    assert_eq!(a.commands(), b.commands());
}

#[test]
fn bundle_missing_a_color_is_rejected() {
    let face = sized_face(100.0, 100.0);
    let mut bundle = face.save_state(None).to_bundle();
    assert!(bundle.get_bytes(KEY_SUPER_STATE).is_none());
    assert!(bundle.remove(KEY_BASE_COLOR).is_some());

    assert!(ClockSnapshot::from_bundle(&bundle).is_none());

    let bytes = bundle.to_bytes().expect("encode");
    let mut target = ClockFace::default();
    let before = target.clone();
    assert_eq!(target.restore_from_bytes(&bytes), None);
    assert_eq!(target, before);
}

#[test]
fn bundle_bytes_survive_cbor() {
    let face = sized_face(100.0, 100.0);
    let bundle = face.save_state(Some(vec![9])).to_bundle();
    let decoded = Bundle::from_bytes(&bundle.to_bytes().expect("encode")).expect("decode");
    assert_eq!(decoded, bundle);
    assert_eq!(decoded.len(), 8);
}
