// SPDX-License-Identifier: MPL-2.0
//! Drawing surface contract consumed by the clock face.
//!
//! The face never talks to a renderer directly. Hosts implement [`Surface`]
//! on top of whatever 2D API they have; [`RecordingSurface`] keeps the calls
//! in memory, which is what tests and benchmarks draw into.

use super::color::ClockColor;
use iced::Point;

/// Whether a shape is filled or outlined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Fill,
    Stroke,
}

/// Style of a single draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: ClockColor,
    pub style: PaintStyle,
    pub stroke_width: f32,
    /// Font size for text calls; ignored by shapes.
    pub text_size: f32,
}

impl Paint {
    #[must_use]
    pub fn fill(color: ClockColor) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            text_size: 0.0,
        }
    }

    #[must_use]
    pub fn stroke(color: ClockColor, width: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
            stroke_width: width,
            text_size: 0.0,
        }
    }

    #[must_use]
    pub fn text(color: ClockColor, size: f32) -> Self {
        Self {
            text_size: size,
            ..Self::fill(color)
        }
    }
}

/// Vertical font metrics relative to the baseline.
///
/// `ascent` is negative (above the baseline), `descent` positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl FontMetrics {
    /// Ascent ratio of a typical sans-serif UI face.
    pub const ASCENT_RATIO: f32 = -0.928;
    /// Descent ratio of a typical sans-serif UI face.
    pub const DESCENT_RATIO: f32 = 0.244;

    #[must_use]
    pub fn scaled(text_size: f32) -> Self {
        Self {
            ascent: text_size * Self::ASCENT_RATIO,
            descent: text_size * Self::DESCENT_RATIO,
        }
    }

    /// Offset from the baseline to the visual middle of a line.
    #[must_use]
    pub fn baseline_to_center(self) -> f32 {
        (self.descent + self.ascent) / 2.0
    }
}

/// A 2D target the clock face can paint on.
pub trait Surface {
    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint);

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint);

    /// Draws `text` horizontally centered on `position.x` with its baseline at `position.y`.
    fn draw_text(&mut self, text: &str, position: Point, paint: &Paint);

    fn font_metrics(&self, text_size: f32) -> FontMetrics {
        FontMetrics::scaled(text_size)
    }
}

/// One recorded call on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Point,
        radius: f32,
        paint: Paint,
    },
    Line {
        from: Point,
        to: Point,
        paint: Paint,
    },
    Text {
        text: String,
        position: Point,
        paint: Paint,
    },
}

/// Surface that stores every call in order.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f32, &Paint)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Circle {
                center,
                radius,
                paint,
            } => Some((*center, *radius, paint)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, &Paint)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line { from, to, paint } => Some((*from, *to, paint)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, &Paint)> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text {
                text,
                position,
                paint,
            } => Some((text.as_str(), *position, paint)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            paint: *paint,
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            paint: *paint,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, paint: &Paint) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            paint: *paint,
        });
    }
}
