// SPDX-License-Identifier: MPL-2.0
//! Opaque packed colors used by the clock face.
//!
//! Colors are stored as a single ARGB integer so they can cross the snapshot
//! boundary unchanged. Conversion to [`iced::Color`] happens only at paint time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A packed `0xAARRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockColor(pub u32);

impl ClockColor {
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    pub const LIGHT_GRAY: Self = Self(0xFFD3_D3D3);
    pub const RED: Self = Self(0xFFE5_3935);
    pub const TRANSPARENT: Self = Self(0x0000_0000);

    #[must_use]
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Signed integer form used in state snapshots.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn to_i32(self) -> i32 {
        self.0 as i32
    }

    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn from_i32(value: i32) -> Self {
        Self(value as u32)
    }
}

impl From<ClockColor> for iced::Color {
    fn from(color: ClockColor) -> Self {
        iced::Color::from_rgba8(
            color.red(),
            color.green(),
            color.blue(),
            f32::from(color.alpha()) / 255.0,
        )
    }
}

impl fmt::Display for ClockColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.alpha() == 0xFF {
            write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
        } else {
            write!(f, "#{:08X}", self.0)
        }
    }
}

/// Error returned when a color string is not `#RRGGBB` or `#AARRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color `{0}`: expected #RRGGBB or #AARRGGBB")]
pub struct ParseColorError(String);

impl FromStr for ClockColor {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseColorError(s.to_string());
        let hex = s.trim().strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(hex, 16).map_err(|_| invalid())?;
        match hex.len() {
            6 => Ok(Self(0xFF00_0000 | value)),
            8 => Ok(Self(value)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for ClockColor {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockColor> for String {
    fn from(color: ClockColor) -> Self {
        color.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_opaque_rgb() {
        let color: ClockColor = "#d3d3d3".parse().expect("valid color");
        assert_eq!(color, ClockColor::LIGHT_GRAY);
    }

    #[test]
    fn parses_argb_with_alpha() {
        let color: ClockColor = "#80FF0000".parse().expect("valid color");
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.red(), 0xFF);
        assert_eq!(color.green(), 0);
    }

    #[test]
    fn rejects_missing_hash_and_bad_length() {
        assert!("FF0000".parse::<ClockColor>().is_err());
        assert!("#FFF".parse::<ClockColor>().is_err());
        assert!("#GG0000".parse::<ClockColor>().is_err());
        assert!("#+FFFFF".parse::<ClockColor>().is_err());
    }

    #[test]
    fn display_omits_opaque_alpha() {
        assert_eq!(ClockColor::BLACK.to_string(), "#000000");
        assert_eq!(ClockColor(0x1234_5678).to_string(), "#12345678");
    }

    #[test]
    fn signed_encoding_is_lossless_for_opaque_colors() {
        // Opaque colors have the top bit set and become negative integers.
        let encoded = ClockColor::WHITE.to_i32();
        assert_eq!(encoded, -1);
        assert_eq!(ClockColor::from_i32(encoded), ClockColor::WHITE);
    }

    #[test]
    fn converts_to_iced_color() {
        let color: iced::Color = ClockColor::from_rgb(255, 0, 0).into();
        assert_eq!(color, iced::Color::from_rgb8(255, 0, 0));
    }
}
