// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::{EncodeError, PayloadProblem};
use crate::kind::Symbology;
use crate::pharmacode::{PHARMACODE_MAX, PHARMACODE_MIN, encode_pharmacode};
use crate::postnet::encode_postnet;
use crate::symbol::EncodedSymbol;

/// Symbology-independent encoding options.
///
/// Options that do not apply to a symbology are ignored by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EncodeOptions {
    /// Append a check digit (POSTNET).
    pub include_check_digit: bool,
    /// End the symbol with a space (Pharmacode). POSTNET always does.
    pub include_trailing_space: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            include_check_digit: false,
            include_trailing_space: true,
        }
    }
}

/// Parses a payload string into an integer.
///
/// Only ASCII digits are accepted; there is no sign, whitespace or grouping.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidPayload`] for an empty payload, a non-digit
/// character, or a value that does not fit in `u64`.
pub fn parse_payload(payload: &str) -> Result<u64, EncodeError> {
    if payload.is_empty() {
        return Err(PayloadProblem::Empty.into());
    }
    let mut value = 0_u64;
    for (position, character) in payload.char_indices() {
        let digit = character.to_digit(10).ok_or(PayloadProblem::NonDigit {
            position,
            character,
        })?;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or(PayloadProblem::Overflow)?;
    }
    Ok(value)
}

/// Encodes a decimal payload string in the given symbology.
///
/// Leading zeros carry no value: `"0042"` encodes the integer 42.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidPayload`] if the payload is not a decimal
/// integer or is outside the symbology's range.
///
/// # Example
///
/// ```
/// use barclock_symbol::{EncodeOptions, Symbology, encode};
///
/// let options = EncodeOptions {
///     include_check_digit: true,
///     ..EncodeOptions::default()
/// };
/// let symbol = encode(Symbology::Postnet, "1234", options).unwrap();
/// assert_eq!(symbol.source_value(), 12_340);
/// ```
pub fn encode(
    symbology: Symbology,
    payload: &str,
    options: EncodeOptions,
) -> Result<EncodedSymbol, EncodeError> {
    let value = parse_payload(payload)?;
    match symbology {
        Symbology::Pharmacode => {
            let raw = u32::try_from(value).map_err(|_| {
                EncodeError::out_of_range(
                    value,
                    PHARMACODE_MIN.into(),
                    PHARMACODE_MAX.into(),
                )
            })?;
            encode_pharmacode(raw, options.include_trailing_space)
        }
        Symbology::Postnet => encode_postnet(value, options.include_check_digit),
    }
}
