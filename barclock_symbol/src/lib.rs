// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=barclock_symbol --heading-base-level=0

//! Barclock Symbol: Pharmacode and POSTNET bar sequence encoders.
//!
//! This crate turns an integer payload (typically a formatted time such as
//! `"235959"`) into an ordered sequence of typed bar elements. It does **not**
//! draw anything; layout and rendering live in other crates.
//!
//! - [`encode_pharmacode`]: bit-peeling Pharmacode encoder over `3..=131070`.
//! - [`encode_postnet`]: POSTNET digit patterns with guard bars and an
//!   optional check digit ([`postnet_check_digit`]).
//! - [`encode`]: parses a payload string and dispatches on [`Symbology`].
//!
//! Every element carries a [`BarKind`] and an ordinal. The
//! [`EncodedSymbol::canonical_thickness`] is the sum of all unit widths, so a
//! layout can scale the symbol to any physical size.
//!
//! ## Minimal example
//!
//! ```rust
//! use barclock_symbol::{EncodeOptions, Symbology, encode};
//!
//! let symbol = encode(Symbology::Pharmacode, "12", EncodeOptions::default()).unwrap();
//! assert_eq!(symbol.bar_count(), 3);
//! assert_eq!(symbol.barcode_map(), [1, -1, 0, -1, 1, -1]);
//! ```
//!
//! Encoders are pure: the same input always yields the same symbol, and no
//! state is kept between calls.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod encode;
mod error;
mod kind;
mod pharmacode;
mod postnet;
mod symbol;

pub use encode::{EncodeOptions, encode, parse_payload};
pub use error::{EncodeError, PayloadProblem};
pub use kind::{BarKind, PharmacodeBar, PostnetBar, Symbology};
pub use pharmacode::{PHARMACODE_MAX, PHARMACODE_MIN, encode_pharmacode};
pub use postnet::{encode_postnet, postnet_check_digit, postnet_digit_pattern};
pub use symbol::{BarElement, EncodedSymbol};
