// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit-width to extent mapping shared by all layout modes.

use alloc::vec::Vec;
use core::ops::Range;

use barclock_symbol::EncodedSymbol;

/// Maps every element of `symbol` onto a sub-range of `0.0..extent`.
///
/// Each element gets a slice proportional to its unit width over the
/// symbol's canonical thickness. Spaces get a range too, so the ranges tile
/// `0.0..extent` without gaps: the first starts at `0.0` and the last ends
/// at exactly `extent`.
///
/// Linear layouts use this for x ranges, radial layouts for angles in
/// degrees, and target layouts for radii.
///
/// Returns an empty vector for a symbol with zero canonical thickness.
///
/// # Example
///
/// ```
/// use barclock_layout::element_extents;
/// use barclock_symbol::encode_pharmacode;
///
/// // Thin, space, thick: 1 + 2 + 3 units.
/// let symbol = encode_pharmacode(4, false).unwrap();
/// let extents = element_extents(&symbol, 60.0);
/// assert_eq!(extents, [0.0..10.0, 10.0..30.0, 30.0..60.0]);
/// ```
#[must_use]
pub fn element_extents(symbol: &EncodedSymbol, extent: f64) -> Vec<Range<f64>> {
    let total = symbol.canonical_thickness();
    if total == 0 {
        return Vec::new();
    }
    let scale = |units: u32| {
        if units == total {
            extent
        } else {
            f64::from(units) * extent / f64::from(total)
        }
    };
    let mut cumulative = 0_u32;
    symbol
        .kinds()
        .map(|kind| {
            let start = scale(cumulative);
            cumulative += kind.unit_width();
            start..scale(cumulative)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use barclock_symbol::{encode_pharmacode, encode_postnet};

    use super::*;

    #[test]
    fn extents_tile_without_gaps() {
        let symbol = encode_pharmacode(12_345, true).unwrap();
        let extents = element_extents(&symbol, 360.0);
        assert_eq!(extents.len(), symbol.len());
        assert_eq!(extents[0].start, 0.0);
        assert_eq!(extents.last().unwrap().end, 360.0);
        for pair in extents.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn postnet_elements_are_uniform() {
        let symbol = encode_postnet(5, false).unwrap();
        let extents = element_extents(&symbol, 140.0);
        for range in &extents {
            assert!((range.end - range.start - 10.0).abs() < 1e-9);
        }
    }
}
