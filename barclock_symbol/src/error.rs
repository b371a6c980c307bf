// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors produced while encoding a payload.

use core::fmt;

/// Why a payload could not be encoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PayloadProblem {
    /// The payload was empty.
    Empty,
    /// A character other than an ASCII decimal digit was found.
    NonDigit {
        /// Byte offset of the offending character in the payload string.
        position: usize,
        /// The offending character.
        character: char,
    },
    /// The value lies outside the symbology's encodable range.
    OutOfRange {
        /// The rejected value.
        value: u64,
        /// Smallest encodable value.
        min: u64,
        /// Largest encodable value.
        max: u64,
    },
    /// The value (or the value with its check digit appended) does not fit
    /// in the encoder's integer type.
    Overflow,
}

impl fmt::Display for PayloadProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("payload is empty"),
            Self::NonDigit {
                position,
                character,
            } => write!(f, "non-digit character {character:?} at byte {position}"),
            Self::OutOfRange { value, min, max } => {
                write!(f, "value {value} is outside {min}..={max}")
            }
            Self::Overflow => f.write_str("value does not fit in 64 bits"),
        }
    }
}

/// Error returned by the encoders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodeError {
    /// The payload cannot be represented in the requested symbology.
    InvalidPayload(PayloadProblem),
}

impl EncodeError {
    pub(crate) fn out_of_range(value: u64, min: u64, max: u64) -> Self {
        Self::InvalidPayload(PayloadProblem::OutOfRange { value, min, max })
    }

    /// Returns the underlying payload problem.
    #[must_use]
    pub fn problem(&self) -> PayloadProblem {
        match self {
            Self::InvalidPayload(problem) => *problem,
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPayload(problem) => write!(f, "invalid payload: {problem}"),
        }
    }
}

impl core::error::Error for EncodeError {}

impl From<PayloadProblem> for EncodeError {
    fn from(problem: PayloadProblem) -> Self {
        Self::InvalidPayload(problem)
    }
}
