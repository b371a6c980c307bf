// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=barclock_delta --heading-base-level=0

//! Barclock Delta: change tracking between consecutive barcode encodings.
//!
//! A barcode clock re-encodes its payload every tick. Renderers want to
//! highlight only the bars that changed since the previous tick. This crate
//! provides:
//!
//! - [`compute_delta`]: pure position-wise comparison of two barcode maps,
//!   producing a [`DeltaMask`] aligned with the newer map.
//! - [`should_reencode`]: the payload-length re-encode guard.
//! - [`DeltaState`]: the per-clock owner of the previous map and cached
//!   payload length, replacing any process-wide "previous result" buffer.
//!
//! Comparison is deliberately coarse: only maps of equal length are compared,
//! and state resets whenever the payload length changes. A reset yields no
//! mask at all (nothing highlighted) rather than an all-changed one.
//!
//! ```rust
//! use barclock_delta::DeltaState;
//!
//! let mut state = DeltaState::new();
//! for (payload, map) in [("0905", vec![1, -1, 0]), ("0906", vec![1, -1, 1])] {
//!     state.observe_payload(payload.len());
//!     let mask = state.delta(&map);
//!     if let Some(mask) = &mask {
//!         assert!(mask.is_changed(2));
//!     }
//!     state.commit(map);
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod mask;
mod state;

pub use mask::{DeltaMask, compute_delta};
pub use state::{DeltaState, should_reencode};
