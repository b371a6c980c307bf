// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Re-encode guard and per-clock delta state.

use alloc::vec::Vec;

use crate::mask::{DeltaMask, compute_delta};

/// Decides whether a payload must be re-encoded from scratch.
///
/// Returns `true` when there is no cached payload yet or when the payload
/// length differs from the cached one; delta tracking must then start over.
/// Equal lengths return `false` even if the content differs: the caller may
/// still re-encode, but delta state carries over.
///
/// # Example
///
/// ```
/// use barclock_delta::should_reencode;
///
/// assert!(should_reencode(6, None));
/// assert!(should_reencode(6, Some(4)));
/// assert!(!should_reencode(6, Some(6)));
/// ```
#[must_use]
pub fn should_reencode(new_payload_len: usize, cached_payload_len: Option<usize>) -> bool {
    cached_payload_len != Some(new_payload_len)
}

/// Delta bookkeeping owned by one clock instance.
///
/// `DeltaState` remembers the payload length and the barcode map of the last
/// committed symbol. Payload lengths are fed through [`observe_payload`], which
/// applies [`should_reencode`] and forgets the previous map on a length change.
/// Resets are keyed on payload length only, so two payloads of the same
/// length always compare position by position.
///
/// The generation increments on every reset, so callers can tell whether a
/// cached derivative of this state is stale.
///
/// # Example
///
/// ```
/// use barclock_delta::DeltaState;
///
/// let mut state = DeltaState::new();
/// assert!(state.observe_payload(6));
/// assert!(state.delta(&[1, 0, -1]).is_none());
/// state.commit(vec![1, 0, -1]);
///
/// assert!(!state.observe_payload(6));
/// let mask = state.delta(&[1, 1, -1]).unwrap();
/// assert_eq!(mask.changed_count(), 1);
///
/// // A longer payload resets comparison.
/// assert!(state.observe_payload(7));
/// assert!(state.previous_map().is_none());
/// ```
///
/// [`observe_payload`]: DeltaState::observe_payload
#[derive(Clone, Debug, Default)]
pub struct DeltaState {
    payload_len: Option<usize>,
    previous_map: Option<Vec<i8>>,
    generation: u64,
}

impl DeltaState {
    /// Creates an empty state with no cached payload.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the length of the payload about to be encoded.
    ///
    /// Returns `true` if the state was reset, meaning the caller must
    /// re-encode and the next delta will be `None`.
    pub fn observe_payload(&mut self, payload_len: usize) -> bool {
        if should_reencode(payload_len, self.payload_len) {
            self.reset();
            self.payload_len = Some(payload_len);
            true
        } else {
            false
        }
    }

    /// The cached payload length, if any.
    #[must_use]
    pub fn payload_len(&self) -> Option<usize> {
        self.payload_len
    }

    /// The barcode map of the last committed symbol, if any.
    #[must_use]
    pub fn previous_map(&self) -> Option<&[i8]> {
        self.previous_map.as_deref()
    }

    /// Compares `new_map` with the previous map.
    #[must_use]
    pub fn delta(&self, new_map: &[i8]) -> Option<DeltaMask> {
        compute_delta(new_map, self.previous_map())
    }

    /// Retains `map` as the previous map for the next comparison.
    pub fn commit(&mut self, map: Vec<i8>) {
        self.previous_map = Some(map);
    }

    /// Forgets the cached payload length and previous map.
    pub fn reset(&mut self) {
        self.payload_len = None;
        self.previous_map = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Number of resets so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
