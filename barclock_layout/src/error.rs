// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a symbol cannot be laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// An integer shape mode code outside `0..=2`.
    InvalidShapeMode(i64),
    /// The symbol has no elements, or no width to distribute.
    EmptySymbol,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShapeMode(code) => write!(f, "unknown shape mode {code}"),
            Self::EmptySymbol => f.write_str("symbol has no elements to lay out"),
        }
    }
}

impl core::error::Error for LayoutError {}
