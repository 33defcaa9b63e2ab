// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.

use super::{build_face, App, Message, Orientation};
use crate::clock::SizeConstraint;
use crate::ui::design_tokens::{sizing, spacing};
use iced::{Size, Task};
use serde::{Deserialize, Serialize};

/// Host state stored in the face snapshot's parent slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
struct HostState {
    second_hand_highlighted: bool,
}

impl HostState {
    fn encode(self) -> Option<Vec<u8>> {
        let mut bytes = Vec::new();
        match ciborium::into_writer(&self, &mut bytes) {
            Ok(()) => Some(bytes),
            Err(err) => {
                tracing::warn!(%err, "failed to encode host state");
                None
            }
        }
    }

    fn decode(bytes: &[u8]) -> Option<Self> {
        ciborium::from_reader(bytes).ok()
    }
}

pub(super) fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::ToggleSecondHand => app.toggle_second_hand(),
        Message::WindowResized(size) => app.handle_resize(size),
    }
    Task::none()
}

impl App {
    fn toggle_second_hand(&mut self) {
        self.highlighted = !self.highlighted;
        let color = if self.highlighted {
            self.config.clock.highlight_color()
        } else {
            self.config.clock.style.resolve().second_hand
        };
        self.face.set_second_hand_color(color);
        self.cache.clear();
    }

    fn handle_resize(&mut self, size: Size) {
        self.window_size = size;
        let orientation = Orientation::of(size);
        if orientation != self.orientation {
            self.orientation = orientation;
            self.rebuild_face();
        }
        self.layout_face();
    }

    /// Space left for the face once padding and the button row are taken.
    fn available_area(&self) -> Size {
        let width = self.window_size.width - 2.0 * spacing::MD;
        let height =
            self.window_size.height - 3.0 * spacing::MD - sizing::BUTTON_HEIGHT;
        Size::new(width.max(0.0), height.max(0.0))
    }

    pub(super) fn layout_face(&mut self) {
        let area = self.available_area();
        let measured = self
            .face
            .measure(SizeConstraint::AtMost(area.width), SizeConstraint::AtMost(area.height));
        self.face.resize(measured.width, measured.height);
        self.cache.clear();
    }

    /// Tears the face down and builds a fresh one from its saved snapshot.
    fn rebuild_face(&mut self) {
        let host = HostState {
            second_hand_highlighted: self.highlighted,
        };
        let bytes = match self.face.save_state(host.encode()).to_bytes() {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(%err, "clock snapshot failed, keeping current face");
                return;
            }
        };

        tracing::info!(orientation = ?self.orientation, "rebuilding clock face");
        let mut face = build_face(&self.config);
        let parent = face.restore_from_bytes(&bytes);
        self.highlighted = parent
            .as_deref()
            .and_then(HostState::decode)
            .is_some_and(|state| state.second_hand_highlighted);
        self.face = face;
    }
}
