// SPDX-License-Identifier: MPL-2.0
//! Window orientation, the trigger for rebuilding the clock face.

use iced::Size;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Square windows count as portrait.
    #[must_use]
    pub fn of(size: Size) -> Self {
        if size.width > size.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}
