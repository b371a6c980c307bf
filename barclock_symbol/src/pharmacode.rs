// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pharmacode (one-track) encoder.

use alloc::vec::Vec;

use crate::error::EncodeError;
use crate::kind::{BarKind, PharmacodeBar, Symbology};
use crate::symbol::EncodedSymbol;

/// Smallest value Pharmacode can encode.
pub const PHARMACODE_MIN: u32 = 3;
/// Largest value Pharmacode can encode (sixteen thick bars).
pub const PHARMACODE_MAX: u32 = 131_070;

/// Encodes `raw` as a Pharmacode bar sequence.
///
/// Bars are peeled off least significant first: an even remainder yields a
/// thick bar and `z = (z - 2) / 2`, an odd one a thin bar and
/// `z = (z - 1) / 2`. Each bar is followed by a space. The sequence is then
/// reversed so the most significant bar comes first; the leading space this
/// would leave is dropped, and a trailing space is kept only when
/// `include_trailing_space` is set.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidPayload`] when `raw` is outside
/// [`PHARMACODE_MIN`]`..=`[`PHARMACODE_MAX`].
///
/// # Example
///
/// ```
/// use barclock_symbol::{BarKind, PharmacodeBar, encode_pharmacode};
///
/// let symbol = encode_pharmacode(4, false).unwrap();
/// let kinds: Vec<BarKind> = symbol.kinds().collect();
/// assert_eq!(
///     kinds,
///     [PharmacodeBar::Thin, PharmacodeBar::Space, PharmacodeBar::Thick].map(BarKind::from)
/// );
/// assert_eq!(symbol.canonical_thickness(), 6);
/// ```
pub fn encode_pharmacode(
    raw: u32,
    include_trailing_space: bool,
) -> Result<EncodedSymbol, EncodeError> {
    if !(PHARMACODE_MIN..=PHARMACODE_MAX).contains(&raw) {
        return Err(EncodeError::out_of_range(
            raw.into(),
            PHARMACODE_MIN.into(),
            PHARMACODE_MAX.into(),
        ));
    }

    let mut peeled = Vec::with_capacity(34);
    let mut z = raw;
    while z > 0 {
        if z % 2 == 0 {
            peeled.push(PharmacodeBar::Thick);
            z = (z - 2) / 2;
        } else {
            peeled.push(PharmacodeBar::Thin);
            z = (z - 1) / 2;
        }
        peeled.push(PharmacodeBar::Space);
    }

    // The last peeled space would lead after reversal.
    if peeled.last() == Some(&PharmacodeBar::Space) {
        peeled.pop();
    }
    peeled.reverse();
    if include_trailing_space && peeled.last() != Some(&PharmacodeBar::Space) {
        peeled.push(PharmacodeBar::Space);
    }

    Ok(EncodedSymbol::from_kinds(
        Symbology::Pharmacode,
        peeled.into_iter().map(BarKind::Pharmacode),
        raw.into(),
    ))
}
