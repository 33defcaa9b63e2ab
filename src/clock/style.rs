// SPDX-License-Identifier: MPL-2.0
//! Style resolution for the clock face.
//!
//! [`ClockStyleConfig`] is the style source as it comes from configuration:
//! every field is optional and defaulted on its own by [`ClockStyleConfig::resolve`].

use super::color::ClockColor;
use serde::{Deserialize, Serialize};

/// Fallback dial background.
pub const DEFAULT_BASE_COLOR: ClockColor = ClockColor::LIGHT_GRAY;

/// Fallback for every color except the dial background.
pub const DEFAULT_INK_COLOR: ClockColor = ClockColor::BLACK;

/// The seven resolved colors of a clock face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockStyle {
    pub base: ClockColor,
    pub text: ClockColor,
    pub frame: ClockColor,
    pub hour_hand: ClockColor,
    pub minute_hand: ClockColor,
    pub second_hand: ClockColor,
    pub dots: ClockColor,
}

impl Default for ClockStyle {
    fn default() -> Self {
        ClockStyleConfig::default().resolve()
    }
}

/// Color overrides read from the `[clock]` settings section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockStyleConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color: Option<ClockColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<ClockColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_color: Option<ClockColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour_hand_color: Option<ClockColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute_hand_color: Option<ClockColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub second_hand_color: Option<ClockColor>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dots_color: Option<ClockColor>,
}

impl ClockStyleConfig {
    /// Resolves each color independently, falling back to the defaults.
    #[must_use]
    pub fn resolve(&self) -> ClockStyle {
        ClockStyle {
            base: self.base_color.unwrap_or(DEFAULT_BASE_COLOR),
            text: self.text_color.unwrap_or(DEFAULT_INK_COLOR),
            frame: self.frame_color.unwrap_or(DEFAULT_INK_COLOR),
            hour_hand: self.hour_hand_color.unwrap_or(DEFAULT_INK_COLOR),
            minute_hand: self.minute_hand_color.unwrap_or(DEFAULT_INK_COLOR),
            second_hand: self.second_hand_color.unwrap_or(DEFAULT_INK_COLOR),
            dots: self.dots_color.unwrap_or(DEFAULT_INK_COLOR),
        }
    }
}
