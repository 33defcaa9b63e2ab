// SPDX-License-Identifier: MPL-2.0
//! Canvas program that paints a [`ClockFace`] and keeps it ticking.
//!
//! The face is drawn into a [`Cache`]. Each fresh render leaves its redraw
//! request in the program state; the next `RedrawRequested` event turns it
//! into a deadline and asks the window for a redraw at that instant. When the
//! deadline is reached the cache is cleared and the face is drawn again.

use crate::clock::{ClockFace, Paint, PaintStyle, Surface, TimeSource};
use iced::alignment::{Horizontal, Vertical};
use iced::time::Instant;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke, Text};
use iced::widget::Action;
use iced::{mouse, window, Color, Element, Event, Length, Pixels, Point, Rectangle, Renderer, Theme};
use std::cell::Cell;
use std::time::Duration;

/// [`Surface`] backed by an Iced canvas frame.
pub struct FrameSurface<'f> {
    frame: &'f mut Frame,
}

impl<'f> FrameSurface<'f> {
    pub fn new(frame: &'f mut Frame) -> Self {
        Self { frame }
    }
}

fn stroke_of(paint: &Paint) -> Stroke<'static> {
    Stroke::default()
        .with_width(paint.stroke_width)
        .with_color(paint.color.into())
}

impl Surface for FrameSurface<'_> {
    fn draw_circle(&mut self, center: Point, radius: f32, paint: &Paint) {
        let circle = Path::circle(center, radius);
        match paint.style {
            PaintStyle::Fill => self.frame.fill(&circle, Color::from(paint.color)),
            PaintStyle::Stroke => self.frame.stroke(&circle, stroke_of(paint)),
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        self.frame.stroke(&Path::line(from, to), stroke_of(paint));
    }

    fn draw_text(&mut self, text: &str, position: Point, paint: &Paint) {
        // Iced anchors text by its box, not its baseline: move back to the
        // glyph middle and center there.
        let middle = position.y + self.font_metrics(paint.text_size).baseline_to_center();
        self.frame.fill_text(Text {
            content: text.to_string(),
            position: Point::new(position.x, middle),
            color: paint.color.into(),
            size: Pixels(paint.text_size),
            align_x: Horizontal::Center.into(),
            align_y: Vertical::Center,
            ..Text::default()
        });
    }
}

/// What to do on a `RedrawRequested` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStep {
    /// Drop the cached geometry so this frame renders a new face.
    Render,
    /// Nothing to render yet; wake up at the given instant.
    WaitUntil(Instant),
}

/// Per-widget scheduling state kept by the Iced tree.
#[derive(Debug, Default)]
pub struct FrameState {
    requested: Cell<Option<Duration>>,
    deadline: Option<Instant>,
}

impl FrameState {
    /// Records the delay asked for by the last render.
    pub fn request(&self, after: Duration) {
        self.requested.set(Some(after));
    }

    /// Advances the schedule for a redraw happening at `now`.
    pub fn on_redraw(&mut self, now: Instant) -> FrameStep {
        if let Some(after) = self.requested.take() {
            self.deadline = Some(now + after);
        }

        match self.deadline {
            Some(at) if now < at => FrameStep::WaitUntil(at),
            _ => {
                self.deadline = None;
                FrameStep::Render
            }
        }
    }
}

/// Canvas program drawing one clock face.
pub struct ClockCanvas<'a> {
    face: &'a ClockFace,
    cache: &'a Cache,
    clock: &'a dyn TimeSource,
}

impl<'a> ClockCanvas<'a> {
    #[must_use]
    pub fn new(face: &'a ClockFace, cache: &'a Cache, clock: &'a dyn TimeSource) -> Self {
        Self { face, cache, clock }
    }

    /// Wraps the program in a canvas sized to the face.
    pub fn into_element<Message: 'a>(self) -> Element<'a, Message> {
        let size = self.face.size();
        Canvas::new(self)
            .width(Length::Fixed(size.width))
            .height(Length::Fixed(size.height))
            .into()
    }
}

impl<Message> canvas::Program<Message> for ClockCanvas<'_> {
    type State = FrameState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &Event,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let Event::Window(window::Event::RedrawRequested(now)) = event else {
            return None;
        };

        match state.on_redraw(*now) {
            FrameStep::Render => {
                self.cache.clear();
                // The fresh render files its request during this frame; the
                // next one picks it up.
                Some(Action::request_redraw())
            }
            FrameStep::WaitUntil(at) => {
                tracing::trace!(?at, "clock frame scheduled");
                Some(Action::request_redraw_at(at))
            }
        }
    }

    fn draw(
        &self,
        state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let mut surface = FrameSurface::new(frame);
                let redraw = self.face.draw(&mut surface, self.clock);
                state.request(redraw.after);
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::REFRESH_PERIOD;

    #[test]
    fn first_redraw_renders_immediately() {
        let mut state = FrameState::default();
        assert_eq!(state.on_redraw(Instant::now()), FrameStep::Render);
    }

    #[test]
    fn request_turns_into_deadline_on_next_redraw() {
        let mut state = FrameState::default();
        let now = Instant::now();
        state.request(REFRESH_PERIOD);

        assert_eq!(state.on_redraw(now), FrameStep::WaitUntil(now + REFRESH_PERIOD));
        // Early wakeups keep the same deadline.
        let early = now + Duration::from_millis(50);
        assert_eq!(state.on_redraw(early), FrameStep::WaitUntil(now + REFRESH_PERIOD));
    }

    #[test]
    fn reaching_deadline_renders_and_resets() {
        let mut state = FrameState::default();
        let now = Instant::now();
        state.request(REFRESH_PERIOD);
        let _ = state.on_redraw(now);

        let due = now + REFRESH_PERIOD;
        assert_eq!(state.on_redraw(due), FrameStep::Render);
        // No new request yet, so the following frame renders as well.
        assert_eq!(state.on_redraw(due), FrameStep::Render);
    }

    #[test]
    fn late_redraw_still_renders_once_due() {
        let mut state = FrameState::default();
        let now = Instant::now();
        state.request(REFRESH_PERIOD);
        let _ = state.on_redraw(now);

        let late = now + Duration::from_secs(2);
        assert_eq!(state.on_redraw(late), FrameStep::Render);
    }
}
