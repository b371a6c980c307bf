// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=barclock_layout --heading-base-level=0

//! Barclock Layout: geometry for encoded barcode symbols.
//!
//! This crate turns an [`EncodedSymbol`](barclock_symbol::EncodedSymbol) and a
//! [`RenderHandle`] into a list of [`LayoutPrimitive`]s in view coordinates.
//! It focuses on:
//! - Scaling symbology units to pixels, degrees or radii ([`element_extents`]).
//! - Three arrangements selected by [`ShapeMode`]: linear bars, a radial ring
//!   of wedges, and concentric target rings.
//! - Tagging each primitive with whether its element changed since the
//!   previous tick, using [`barclock_delta::compute_delta`].
//!
//! It does **not** draw or animate. Callers are expected to:
//! - Keep the returned [`Layout::barcode_map`] and pass it back as the
//!   previous map on the next tick.
//! - Map [`ColorToken`]s to real colors and apply [`Effects`] themselves.
//!
//! ## Minimal example
//!
//! ```rust
//! use barclock_layout::{RenderHandle, ShapeMode, layout};
//! use barclock_symbol::{Symbology, encode};
//!
//! let handle = RenderHandle::new(320.0, 320.0).with_shape_mode(ShapeMode::Radial);
//! let symbol = encode(Symbology::Postnet, "1230", handle.encode_options()).unwrap();
//!
//! let frame = layout(&symbol, &handle, None).unwrap();
//! assert_eq!(frame.primitives.len(), symbol.bar_count());
//! ```
//!
//! ## Design notes
//!
//! - Spaces take up room (width, angle or radius) but never produce a
//!   primitive.
//! - Linear bars are centered in the view on both axes, ignoring leading and
//!   trailing spaces; round layouts are centered on
//!   [`RenderHandle::target_center`].
//! - Integer shape codes from settings layers go through
//!   [`ShapeMode::from_code`], which is where unknown modes are rejected.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod error;
mod extent;
mod handle;
mod mode;
mod primitive;

pub use engine::{FULL_SWEEP_DEGREES, Layout, layout};
pub use error::LayoutError;
pub use extent::element_extents;
pub use handle::{ColorToken, DEFAULT_SHORT_BAR_SCALE, Effects, Palette, RenderHandle};
pub use mode::ShapeMode;
pub use primitive::{LayoutPrimitive, PrimitiveShape, Quad};
