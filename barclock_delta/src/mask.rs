// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delta masks and their computation.

use alloc::vec::Vec;

/// Per-position change flags aligned with the newer of two barcode maps.
///
/// A `true` at index `i` means element `i` of the new symbol has a different
/// kind than element `i` of the previous one. Masks are built once by
/// [`compute_delta`] and never change afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DeltaMask {
    changed: Vec<bool>,
}

impl DeltaMask {
    /// Number of positions covered by the mask.
    #[must_use]
    pub fn len(&self) -> usize {
        self.changed.len()
    }

    /// Returns `true` if the mask covers no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }

    /// Returns whether position `index` changed.
    ///
    /// Positions past the end of the mask report `false`.
    #[must_use]
    pub fn is_changed(&self, index: usize) -> bool {
        self.changed.get(index).copied().unwrap_or(false)
    }

    /// Number of changed positions.
    #[must_use]
    pub fn changed_count(&self) -> usize {
        self.changed.iter().filter(|&&c| c).count()
    }

    /// Returns `true` if at least one position changed.
    #[must_use]
    pub fn any_changed(&self) -> bool {
        self.changed.contains(&true)
    }

    /// The flags as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[bool] {
        &self.changed
    }

    /// Iterates over the flags in position order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.changed.iter().copied()
    }
}

impl From<DeltaMask> for Vec<bool> {
    fn from(mask: DeltaMask) -> Self {
        mask.changed
    }
}

/// Compares two barcode maps position by position.
///
/// Each map entry is a small kind code (for example `1` thick, `0` thin and
/// `-1` space). Only maps of equal length are compared. With no previous map,
/// or one of a different length, this returns `None`: the new symbol is
/// treated as fresh with nothing highlighted, not as entirely changed.
///
/// # Example
///
/// ```
/// use barclock_delta::compute_delta;
///
/// let mask = compute_delta(&[1, 0, -1, 1], Some(&[1, 1, -1, 1][..])).unwrap();
/// assert_eq!(mask.as_slice(), &[false, true, false, false]);
///
/// assert!(compute_delta(&[1, 0, -1], Some(&[1, 0, -1, 1][..])).is_none());
/// assert!(compute_delta(&[1, 0, -1], None).is_none());
/// ```
#[must_use]
pub fn compute_delta(new_map: &[i8], previous_map: Option<&[i8]>) -> Option<DeltaMask> {
    let previous = previous_map?;
    if previous.len() != new_map.len() {
        return None;
    }
    let changed = new_map
        .iter()
        .zip(previous)
        .map(|(new, old)| new != old)
        .collect();
    Some(DeltaMask { changed })
}
