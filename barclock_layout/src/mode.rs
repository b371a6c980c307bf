// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::LayoutError;

/// How a symbol is arranged on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ShapeMode {
    /// Bars placed left to right as rectangles, centered in the view.
    #[default]
    Linear,
    /// Bars as wedges of a ring, sweeping a full circle.
    Radial,
    /// Bars as nested rings, first element innermost.
    Target,
}

impl ShapeMode {
    /// Converts the integer code used by settings layers.
    ///
    /// `0` is [`Linear`](Self::Linear), `1` [`Radial`](Self::Radial) and `2`
    /// [`Target`](Self::Target).
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidShapeMode`] for any other code.
    pub fn from_code(code: i64) -> Result<Self, LayoutError> {
        match code {
            0 => Ok(Self::Linear),
            1 => Ok(Self::Radial),
            2 => Ok(Self::Target),
            _ => Err(LayoutError::InvalidShapeMode(code)),
        }
    }

    /// The integer code accepted by [`ShapeMode::from_code`].
    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Linear => 0,
            Self::Radial => 1,
            Self::Target => 2,
        }
    }

    /// Returns `true` for the modes centered on the handle's target center.
    #[must_use]
    pub fn is_round(self) -> bool {
        !matches!(self, Self::Linear)
    }
}
