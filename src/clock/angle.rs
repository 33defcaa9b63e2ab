// SPDX-License-Identifier: MPL-2.0
//! Angle model of the clock face.
//!
//! All angles are in radians measured from the positive x-axis, growing
//! clockwise on screen (y points down). Hands and labels start from
//! [`START_ANGLE`], straight up.

use iced::Point;
use std::f32::consts::{FRAC_PI_2, PI};

/// Twelve o'clock.
pub const START_ANGLE: f32 = -FRAC_PI_2;

/// Number of tick dots around the dial.
pub const TICK_COUNT: u32 = 60;

/// Every n-th tick marks an hour and is drawn larger.
pub const HOUR_TICK_STRIDE: u32 = 5;

const MINUTE_STEP: f32 = PI / 30.0;
const HOUR_STEP: f32 = PI / 6.0;

/// Angle of tick dot `index` (0..60). Ticks carry no rotational offset.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tick_angle(index: u32) -> f32 {
    index as f32 * MINUTE_STEP
}

/// Whether tick `index` is one of the twelve enlarged hour ticks.
#[must_use]
pub fn is_hour_tick(index: u32) -> bool {
    index % HOUR_TICK_STRIDE == 0
}

/// Angle of hour label `hour` (1..=12).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hour_label_angle(hour: u32) -> f32 {
    START_ANGLE + hour as f32 * HOUR_STEP
}

/// Hour hand angle; the minute fraction makes the hand creep between marks.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hour_hand_angle(hour12: u32, minute: u32) -> f32 {
    START_ANGLE + HOUR_STEP * (hour12 as f32 + minute as f32 / 60.0)
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn minute_hand_angle(minute: u32) -> f32 {
    START_ANGLE + MINUTE_STEP * minute as f32
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn second_hand_angle(second: u32) -> f32 {
    START_ANGLE + MINUTE_STEP * second as f32
}

/// Point at `radius` from `center` along `angle`.
#[must_use]
pub fn polar(center: Point, radius: f32, angle: f32) -> Point {
    let (sin, cos) = angle.sin_cos();
    Point::new(center.x + radius * cos, center.y + radius * sin)
}

/// A straight stroke of a hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandSegment {
    pub from: Point,
    pub to: Point,
    pub width: f32,
}

impl HandSegment {
    /// Segment along `angle` between signed distances `start` and `end`
    /// from `center`. Negative distances lie behind the center.
    #[must_use]
    pub fn along(center: Point, angle: f32, start: f32, end: f32, width: f32) -> Self {
        Self {
            from: polar(center, start, angle),
            to: polar(center, end, angle),
            width,
        }
    }
}
