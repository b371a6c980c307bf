// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Encoded symbol types.

use alloc::vec::Vec;

use crate::kind::{BarKind, Symbology};

/// One element of an encoded symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BarElement {
    /// What this element is.
    pub kind: BarKind,
    /// Zero-based position within the symbol, aligned with delta masks.
    pub ordinal: usize,
}

/// The result of encoding one payload.
///
/// Elements are ordered first to last, which maps to left to right in a
/// linear layout and to increasing angle or radius in the round layouts.
/// A symbol is immutable once returned; every encode call builds a new one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedSymbol {
    symbology: Symbology,
    elements: Vec<BarElement>,
    canonical_thickness: u32,
    source_value: u64,
}

impl EncodedSymbol {
    pub(crate) fn from_kinds(
        symbology: Symbology,
        kinds: impl IntoIterator<Item = BarKind>,
        source_value: u64,
    ) -> Self {
        let elements: Vec<BarElement> = kinds
            .into_iter()
            .enumerate()
            .map(|(ordinal, kind)| {
                debug_assert_eq!(kind.symbology(), symbology, "mixed element kinds");
                BarElement { kind, ordinal }
            })
            .collect();
        let canonical_thickness = elements.iter().map(|e| e.kind.unit_width()).sum();
        Self {
            symbology,
            elements,
            canonical_thickness,
            source_value,
        }
    }

    /// The symbology that produced this symbol.
    #[must_use]
    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    /// All elements, spaces included, in order.
    #[must_use]
    pub fn elements(&self) -> &[BarElement] {
        &self.elements
    }

    /// Sum of the unit widths of all elements.
    ///
    /// Layouts divide by this to scale the symbol to any physical size.
    #[must_use]
    pub fn canonical_thickness(&self) -> u32 {
        self.canonical_thickness
    }

    /// The integer actually encoded.
    ///
    /// This includes an appended check digit when one was requested, so it
    /// may differ from the caller's input.
    #[must_use]
    pub fn source_value(&self) -> u64 {
        self.source_value
    }

    /// Number of elements, spaces included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the symbol has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of drawable (non-space) elements.
    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.elements.iter().filter(|e| !e.kind.is_space()).count()
    }

    /// Returns the kinds as small integer codes, one per element.
    ///
    /// See [`BarKind::map_code`]. Consecutive maps are compared to find
    /// which positions changed between two symbols.
    #[must_use]
    pub fn barcode_map(&self) -> Vec<i8> {
        self.elements.iter().map(|e| e.kind.map_code()).collect()
    }

    /// Iterates over the element kinds.
    pub fn kinds(&self) -> impl Iterator<Item = BarKind> + '_ {
        self.elements.iter().map(|e| e.kind)
    }
}
