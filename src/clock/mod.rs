// SPDX-License-Identifier: MPL-2.0
//! Analog clock face: layout, style and the per-frame drawing sequence.
//!
//! [`ClockFace`] knows nothing about the renderer. It draws into any
//! [`Surface`] and answers each frame with a [`Redraw`] request that the host
//! feeds back into its own redraw loop.
//!
//! ```
//! use iced_clock::clock::{ClockFace, FixedClock, RecordingSurface, TimeSample};
//!
//! let mut face = ClockFace::default();
//! face.resize(200.0, 100.0);
//! assert_eq!(face.radius(), 50.0);
//!
//! let mut surface = RecordingSurface::new();
//! let redraw = face.draw(&mut surface, &FixedClock(TimeSample::new(3, 0, 0)));
//! assert_eq!(redraw.after.as_millis(), 180);
//! ```

pub mod angle;
pub mod color;
pub mod layout;
pub mod snapshot;
pub mod style;
pub mod surface;
pub mod time;

pub use angle::HandSegment;
pub use color::ClockColor;
pub use layout::{Density, SizeConstraint};
pub use snapshot::{Bundle, ClockSnapshot};
pub use style::{ClockStyle, ClockStyleConfig};
pub use surface::{DrawCommand, FontMetrics, Paint, PaintStyle, RecordingSurface, Surface};
pub use time::{FixedClock, SystemClock, TimeSample, TimeSource};

use iced::{Point, Size};
use std::time::Duration;

/// Minimum spacing between two frames.
pub const REFRESH_PERIOD: Duration = Duration::from_millis(180);

/// Request for the next frame, returned by every draw.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redraw {
    pub after: Duration,
}

/// A tick dot in face coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickDot {
    pub index: u32,
    pub center: Point,
    pub radius: f32,
}

/// The three hands for one time sample. The second hand has two strokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hands {
    pub hour: HandSegment,
    pub minute: HandSegment,
    pub second: HandSegment,
    pub second_tail: HandSegment,
}

/// State of one analog clock widget.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFace {
    radius: f32,
    center: Point,
    density: Density,
    style: ClockStyle,
}

impl Default for ClockFace {
    fn default() -> Self {
        Self::new(ClockStyle::default())
    }
}

impl ClockFace {
    /// Creates a face with zero size. Call [`ClockFace::resize`] before drawing.
    #[must_use]
    pub fn new(style: ClockStyle) -> Self {
        Self {
            radius: 0.0,
            center: Point::ORIGIN,
            density: Density::NORMAL,
            style,
        }
    }

    #[must_use]
    pub fn from_config(config: &ClockStyleConfig) -> Self {
        Self::new(config.resolve())
    }

    #[must_use]
    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    #[must_use]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Allocated size from the last [`ClockFace::resize`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.center.x * 2.0, self.center.y * 2.0)
    }

    #[must_use]
    pub fn density(&self) -> Density {
        self.density
    }

    #[must_use]
    pub fn style(&self) -> &ClockStyle {
        &self.style
    }

    #[must_use]
    pub fn second_hand_color(&self) -> ClockColor {
        self.style.second_hand
    }

    pub fn set_second_hand_color(&mut self, color: ClockColor) {
        self.style.second_hand = color;
    }

    /// Recomputes geometry for a new allocated size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.radius = width.min(height) / 2.0;
        self.center = Point::new(width / 2.0, height / 2.0);
    }

    /// Resolves the size to request from the host layout.
    #[must_use]
    pub fn measure(&self, width: SizeConstraint, height: SizeConstraint) -> Size {
        let desired = layout::intrinsic_size(self.density);
        Size::new(
            layout::resolve_size(desired.width, width),
            layout::resolve_size(desired.height, height),
        )
    }

    /// Stroke width of the dial ring.
    #[must_use]
    pub fn frame_width(&self) -> f32 {
        self.radius / 12.0
    }

    pub fn tick_dots(&self) -> impl Iterator<Item = TickDot> + '_ {
        let ring = self.radius * 5.0 / 6.0;
        (0..angle::TICK_COUNT).map(move |index| TickDot {
            index,
            center: angle::polar(self.center, ring, angle::tick_angle(index)),
            radius: if angle::is_hour_tick(index) {
                self.radius / 96.0
            } else {
                self.radius / 128.0
            },
        })
    }

    #[must_use]
    pub fn label_size(&self) -> f32 {
        self.radius * 2.0 / 7.0
    }

    /// Baseline anchor of hour label `hour` (1..=12), shifted so the glyph is
    /// vertically centered on the label ring.
    #[must_use]
    pub fn hour_label_position(&self, hour: u32, metrics: FontMetrics) -> Point {
        let ring = self.radius * 11.0 / 16.0;
        let point = angle::polar(self.center, ring, angle::hour_label_angle(hour));
        Point::new(point.x, point.y - metrics.baseline_to_center())
    }

    #[must_use]
    pub fn hands(&self, time: TimeSample) -> Hands {
        let r = self.radius;
        let center = self.center;

        let hour_angle = angle::hour_hand_angle(time.hour12(), time.minute);
        let minute_angle = angle::minute_hand_angle(time.minute);
        let second_angle = angle::second_hand_angle(time.second);

        Hands {
            hour: HandSegment::along(center, hour_angle, -r * 3.0 / 14.0, r * 7.0 / 14.0, r / 15.0),
            minute: HandSegment::along(center, minute_angle, -r * 2.0 / 7.0, r * 5.0 / 7.0, r / 40.0),
            second: HandSegment::along(center, second_angle, -r / 14.0, r * 5.0 / 7.0, r / 80.0),
            second_tail: HandSegment::along(
                center,
                second_angle,
                -r * 2.0 / 7.0,
                -r / 14.0,
                r / 50.0,
            ),
        }
    }

    /// Draws one frame at the time read from `clock`.
    pub fn draw<S, T>(&self, surface: &mut S, clock: &T) -> Redraw
    where
        S: Surface + ?Sized,
        T: TimeSource + ?Sized,
    {
        self.draw_at(surface, clock.now())
    }

    /// Draws one frame for a given time sample.
    pub fn draw_at<S: Surface + ?Sized>(&self, surface: &mut S, time: TimeSample) -> Redraw {
        self.draw_base(surface);
        self.draw_frame(surface);
        self.draw_dots(surface);
        self.draw_hour_labels(surface);
        self.draw_hands(surface, time);

        Redraw {
            after: REFRESH_PERIOD,
        }
    }

    /// Captures the colors and the parent's opaque state.
    #[must_use]
    pub fn save_state(&self, super_state: Option<Vec<u8>>) -> ClockSnapshot {
        ClockSnapshot {
            super_state,
            style: self.style,
        }
    }

    /// Writes saved colors back and hands the parent state to the caller.
    ///
    /// `None` leaves the current colors untouched.
    pub fn restore_state(&mut self, snapshot: Option<&ClockSnapshot>) -> Option<Vec<u8>> {
        let snapshot = snapshot?;
        self.style = snapshot.style;
        snapshot.super_state.clone()
    }

    /// Restores from CBOR bytes; undecodable input leaves the face untouched.
    pub fn restore_from_bytes(&mut self, bytes: &[u8]) -> Option<Vec<u8>> {
        let snapshot = ClockSnapshot::from_bytes(bytes);
        if snapshot.is_none() {
            tracing::debug!("clock snapshot rejected, keeping current colors");
        }
        self.restore_state(snapshot.as_ref())
    }

    fn draw_base<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.draw_circle(self.center, self.radius, &Paint::fill(self.style.base));
    }

    fn draw_frame<S: Surface + ?Sized>(&self, surface: &mut S) {
        let width = self.frame_width();
        surface.draw_circle(
            self.center,
            self.radius - width / 2.0,
            &Paint::stroke(self.style.frame, width),
        );
    }

    fn draw_dots<S: Surface + ?Sized>(&self, surface: &mut S) {
        let paint = Paint::fill(self.style.dots);
        for dot in self.tick_dots() {
            surface.draw_circle(dot.center, dot.radius, &paint);
        }
    }

    fn draw_hour_labels<S: Surface + ?Sized>(&self, surface: &mut S) {
        let size = self.label_size();
        let paint = Paint::text(self.style.text, size);
        let metrics = surface.font_metrics(size);
        for hour in 1..=12 {
            let position = self.hour_label_position(hour, metrics);
            surface.draw_text(&hour.to_string(), position, &paint);
        }
    }

    fn draw_hands<S: Surface + ?Sized>(&self, surface: &mut S, time: TimeSample) {
        let hands = self.hands(time);
        let strokes = [
            (hands.hour, self.style.hour_hand),
            (hands.minute, self.style.minute_hand),
            (hands.second, self.style.second_hand),
            (hands.second_tail, self.style.second_hand),
        ];
        for (segment, color) in strokes {
            surface.draw_line(segment.from, segment.to, &Paint::stroke(color, segment.width));
        }
    }
}
