// SPDX-License-Identifier: MPL-2.0
//! User interface pieces that bind the clock to Iced.
//!
//! - [`clock_canvas`] - Canvas program that renders a [`crate::clock::ClockFace`]
//! - [`design_tokens`] - Spacing, sizing and typography scales for the host window
//! - [`theming`] - Light, dark or system theme selection

pub mod clock_canvas;
pub mod design_tokens;
pub mod theming;
