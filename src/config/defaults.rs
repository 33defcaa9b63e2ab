// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

use crate::clock::ClockColor;

// ==========================================================================
// Clock Defaults
// ==========================================================================

/// Default display density (pixels per density-independent unit).
///
/// Iced already works in logical pixels, so the neutral factor fits most setups.
pub const DEFAULT_DENSITY: f32 = 1.0;

/// Minimum accepted density.
pub const MIN_DENSITY: f32 = 0.5;

/// Maximum accepted density.
pub const MAX_DENSITY: f32 = 4.0;

/// Second-hand color used when the toggle button is engaged.
pub const DEFAULT_HIGHLIGHT_COLOR: ClockColor = ClockColor::RED;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 360.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 420.0;
pub const MIN_WINDOW_WIDTH: f32 = 160.0;
pub const MIN_WINDOW_HEIGHT: f32 = 200.0;

const _: () = {
    assert!(MIN_DENSITY > 0.0);
    assert!(MIN_DENSITY <= DEFAULT_DENSITY);
    assert!(DEFAULT_DENSITY <= MAX_DENSITY);
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};
