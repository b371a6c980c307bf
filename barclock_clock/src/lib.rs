// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=barclock_clock --heading-base-level=0

//! Barclock Clock: the per-clock tick pipeline.
//!
//! A [`BarcodeClock`] ties the encoder, delta tracker and layout engine
//! together for one on-screen clock. An external driver formats the current
//! time into a payload string once per tick and calls
//! [`BarcodeClock::tick`] (or [`BarcodeClock::try_tick`] to drop ticks while
//! the previous one is still running). Each tick:
//!
//! 1. Checks the payload length against the cached one. A change restarts
//!    delta tracking; an unchanged payload and handle reuse the last frame.
//! 2. Encodes the payload with the handle's encode options.
//! 3. Lays the symbol out, comparing with the previous barcode map.
//! 4. Hands the [`Frame`] to the caller's draw callback, still under the
//!    clock's lock.
//!
//! Failures are returned as [`ClockError`] and logged with `tracing`; the
//! previous frame remains the current one.
//!
//! This crate requires `std` for its mutex.

mod clock;
mod error;

pub use clock::{BarcodeClock, Frame, TickOutcome};
pub use error::ClockError;
