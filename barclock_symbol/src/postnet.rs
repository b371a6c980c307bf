// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! POSTNET encoder and check digit.

use alloc::vec::Vec;

use crate::error::{EncodeError, PayloadProblem};
use crate::kind::{BarKind, PostnetBar, Symbology};
use crate::symbol::EncodedSymbol;

use crate::kind::PostnetBar::{High as H, Low as L};

/// Start/stop guard bar.
const GUARD: PostnetBar = H;

/// Five-bar patterns for the digits 0 through 9.
const DIGIT_PATTERNS: [[PostnetBar; 5]; 10] = [
    [H, H, L, L, L],
    [L, L, H, H, H],
    [L, L, H, L, H],
    [L, L, H, H, L],
    [L, H, L, L, H],
    [L, H, L, H, L],
    [L, H, H, L, L],
    [H, L, L, L, H],
    [H, L, L, H, L],
    [H, L, H, L, L],
];

/// Returns the five-bar pattern of a decimal digit, or `None` above 9.
#[must_use]
pub fn postnet_digit_pattern(digit: u8) -> Option<[PostnetBar; 5]> {
    DIGIT_PATTERNS.get(usize::from(digit)).copied()
}

/// Computes the POSTNET check digit of a string of decimal digits.
///
/// The check digit brings the digit sum up to the next multiple of ten:
/// `(10 - sum % 10) % 10`. A sum that is already a multiple of ten yields `0`.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidPayload`] if `digits` contains anything other
/// than ASCII digits. An empty string has digit sum zero and check digit `0`.
///
/// # Example
///
/// ```
/// use barclock_symbol::postnet_check_digit;
///
/// assert_eq!(postnet_check_digit("12345").unwrap(), 5);
/// assert_eq!(postnet_check_digit("01234").unwrap(), 0);
/// assert!(postnet_check_digit("12a45").is_err());
/// ```
pub fn postnet_check_digit(digits: &str) -> Result<u8, EncodeError> {
    let mut sum = 0_u32;
    for (position, character) in digits.char_indices() {
        let value = character
            .to_digit(10)
            .ok_or(PayloadProblem::NonDigit {
                position,
                character,
            })?;
        sum += value;
    }
    Ok(check_digit_of_sum(sum))
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "the value is reduced modulo 10"
)]
fn check_digit_of_sum(sum: u32) -> u8 {
    ((10 - sum % 10) % 10) as u8
}

/// Decimal digits of `value`, most significant first.
fn decimal_digits(mut value: u64) -> Vec<u8> {
    let mut digits = Vec::with_capacity(20);
    loop {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "the value is reduced modulo 10"
        )]
        let digit = (value % 10) as u8;
        digits.push(digit);
        value /= 10;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Encodes `raw` as a POSTNET bar sequence.
///
/// The symbol is a guard bar, five bars per decimal digit of the encoded
/// value, and a closing guard bar. A space follows every bar, the closing
/// guard included, so the sequence always ends in a space. Every element is
/// one unit wide.
///
/// With `include_check_digit` the encoded value is `raw * 10 + check`, and
/// that combined value is reported by [`EncodedSymbol::source_value`].
///
/// # Errors
///
/// Returns [`EncodeError::InvalidPayload`] if appending the check digit
/// overflows `u64`.
pub fn encode_postnet(raw: u64, include_check_digit: bool) -> Result<EncodedSymbol, EncodeError> {
    let value = if include_check_digit {
        let sum = decimal_digits(raw).iter().map(|&d| u32::from(d)).sum();
        let check = check_digit_of_sum(sum);
        raw.checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(check)))
            .ok_or(PayloadProblem::Overflow)?
    } else {
        raw
    };

    let digits = decimal_digits(value);
    let mut bars = Vec::with_capacity((digits.len() * 5 + 2) * 2);
    let mut push_bar = |bar: PostnetBar| {
        bars.push(bar);
        bars.push(PostnetBar::Space);
    };
    push_bar(GUARD);
    for digit in digits {
        for bar in DIGIT_PATTERNS[usize::from(digit)] {
            push_bar(bar);
        }
    }
    push_bar(GUARD);

    Ok(EncodedSymbol::from_kinds(
        Symbology::Postnet,
        bars.into_iter().map(BarKind::Postnet),
        value,
    ))
}
