// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt;

use barclock_layout::LayoutError;
use barclock_symbol::EncodeError;

/// Error returned by a failed tick.
///
/// A failed tick leaves the previously rendered frame in place.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockError {
    /// The payload could not be encoded.
    Encode(EncodeError),
    /// The encoded symbol could not be laid out.
    Layout(LayoutError),
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "encode failed: {err}"),
            Self::Layout(err) => write!(f, "layout failed: {err}"),
        }
    }
}

impl std::error::Error for ClockError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Layout(err) => Some(err),
        }
    }
}

impl From<EncodeError> for ClockError {
    fn from(err: EncodeError) -> Self {
        Self::Encode(err)
    }
}

impl From<LayoutError> for ClockError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}
