// SPDX-License-Identifier: MPL-2.0
//! Size negotiation between the clock face and its host layout.

use iced::Size;

/// Intrinsic width in density-independent units.
pub const DEFAULT_WIDTH_DP: f32 = 240.0;

/// Intrinsic height in density-independent units.
pub const DEFAULT_HEIGHT_DP: f32 = 240.0;

/// Constraint offered by the host layout for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizeConstraint {
    /// The host dictates the size.
    Exactly(f32),
    /// The widget may pick any size up to the bound.
    AtMost(f32),
    /// No constraint; the widget reports its desired size.
    Unspecified,
}

/// Picks the final size for one axis given the desired size and a constraint.
#[must_use]
pub fn resolve_size(desired: f32, constraint: SizeConstraint) -> f32 {
    match constraint {
        SizeConstraint::Exactly(bound) => bound,
        SizeConstraint::AtMost(bound) => desired.min(bound),
        SizeConstraint::Unspecified => desired,
    }
}

/// Display density: physical pixels per density-independent unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(f32);

impl Density {
    pub const NORMAL: Self = Self(1.0);

    /// Non-finite or non-positive factors fall back to [`Density::NORMAL`].
    #[must_use]
    pub fn new(factor: f32) -> Self {
        if factor.is_finite() && factor > 0.0 {
            Self(factor)
        } else {
            Self::NORMAL
        }
    }

    #[must_use]
    pub fn factor(self) -> f32 {
        self.0
    }

    /// Converts density-independent units to whole pixels, truncating.
    #[must_use]
    pub fn to_pixels(self, dp: f32) -> f32 {
        (dp * self.0).trunc()
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// Desired size of the face before constraints are applied.
#[must_use]
pub fn intrinsic_size(density: Density) -> Size {
    Size::new(
        density.to_pixels(DEFAULT_WIDTH_DP),
        density.to_pixels(DEFAULT_HEIGHT_DP),
    )
}
