// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Only window geometry matters to the host: the clock schedules its own
//! frames through the canvas.

use super::Message;
use iced::{event, window, Subscription};

/// Forwards window open and resize events as [`Message::WindowResized`].
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}
