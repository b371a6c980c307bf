// Copyright 2026 the Barclock Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-clock tick pipeline.

use std::sync::{Arc, Mutex, MutexGuard, TryLockError};

use barclock_delta::DeltaState;
use barclock_layout::{Layout, RenderHandle, layout};
use barclock_symbol::{EncodedSymbol, Symbology, encode};
use tracing::{debug, trace, warn};

use crate::error::ClockError;

/// One rendered tick.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Payload the frame was built from.
    pub payload: String,
    /// Encoded symbol.
    pub symbol: EncodedSymbol,
    /// Laid out primitives, delta flags included.
    pub layout: Layout,
    /// Sequence number of this frame within its clock, starting at 1.
    pub generation: u64,
}

/// What a tick did.
#[derive(Clone, Debug)]
pub enum TickOutcome {
    /// The payload was encoded and laid out into a new frame.
    Rendered(Arc<Frame>),
    /// Payload and handle were unchanged; the cached frame was drawn again.
    Reused(Arc<Frame>),
    /// Another tick was still running, so this one did nothing.
    Skipped,
}

impl TickOutcome {
    /// The frame drawn by this tick, if any.
    #[must_use]
    pub fn frame(&self) -> Option<&Arc<Frame>> {
        match self {
            Self::Rendered(frame) | Self::Reused(frame) => Some(frame),
            Self::Skipped => None,
        }
    }
}

#[derive(Debug, Default)]
struct ClockState {
    delta: DeltaState,
    /// Payload and handle the last frame was built from.
    cache_key: Option<(String, RenderHandle)>,
    last_frame: Option<Arc<Frame>>,
    generation: u64,
}

impl ClockState {
    fn cached_frame(&self, payload: &str, handle: &RenderHandle) -> Option<Arc<Frame>> {
        match (&self.cache_key, &self.last_frame) {
            (Some((p, h)), Some(frame)) if p == payload && h == handle => Some(Arc::clone(frame)),
            _ => None,
        }
    }
}

/// A barcode clock: one symbology plus the state carried between ticks.
///
/// Each tick runs encode, delta, layout and draw as one unit under the
/// clock's lock, so ticks of the same clock never interleave. Separate clocks
/// share nothing.
///
/// # Example
///
/// ```
/// use barclock_clock::{BarcodeClock, TickOutcome};
/// use barclock_layout::RenderHandle;
/// use barclock_symbol::Symbology;
///
/// let clock = BarcodeClock::new(Symbology::Postnet);
/// let handle = RenderHandle::new(320.0, 80.0);
///
/// let first = clock.tick("0930", &handle, |_frame| {}).unwrap();
/// assert!(matches!(first, TickOutcome::Rendered(_)));
///
/// let second = clock.tick("0931", &handle, |frame| {
///     // Draw changed bars with the highlight style.
///     assert!(frame.layout.changed().count() > 0);
/// }).unwrap();
/// assert_eq!(second.frame().unwrap().generation, 2);
/// ```
#[derive(Debug)]
pub struct BarcodeClock {
    symbology: Symbology,
    state: Mutex<ClockState>,
}

impl BarcodeClock {
    /// Creates a clock with no history.
    #[must_use]
    pub fn new(symbology: Symbology) -> Self {
        Self {
            symbology,
            state: Mutex::new(ClockState::default()),
        }
    }

    /// The symbology this clock encodes with.
    #[must_use]
    pub fn symbology(&self) -> Symbology {
        self.symbology
    }

    /// Runs one tick, waiting for any tick already in progress.
    ///
    /// `draw` is called with the frame to display while the lock is still
    /// held. It is not called when the tick fails.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError`] if the payload cannot be encoded or laid out.
    /// The previous frame stays current.
    pub fn tick<F>(
        &self,
        payload: &str,
        handle: &RenderHandle,
        draw: F,
    ) -> Result<TickOutcome, ClockError>
    where
        F: FnOnce(&Frame),
    {
        let mut state = self.lock();
        self.run(&mut state, payload, handle, draw)
    }

    /// Runs one tick unless another is in progress.
    ///
    /// Returns [`TickOutcome::Skipped`] without waiting when the clock is
    /// busy. Drivers on a fixed cadence use this to drop late ticks instead
    /// of queueing them.
    ///
    /// # Errors
    ///
    /// Same as [`BarcodeClock::tick`].
    pub fn try_tick<F>(
        &self,
        payload: &str,
        handle: &RenderHandle,
        draw: F,
    ) -> Result<TickOutcome, ClockError>
    where
        F: FnOnce(&Frame),
    {
        let mut state = match self.state.try_lock() {
            Ok(state) => state,
            Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
            Err(TryLockError::WouldBlock) => {
                trace!(symbology = %self.symbology, "previous tick still running; skipping");
                return Ok(TickOutcome::Skipped);
            }
        };
        self.run(&mut state, payload, handle, draw)
    }

    /// The most recently rendered frame.
    #[must_use]
    pub fn last_frame(&self) -> Option<Arc<Frame>> {
        self.lock().last_frame.clone()
    }

    /// Forgets all history: delta state, cache and last frame.
    pub fn reset(&self) {
        *self.lock() = ClockState::default();
    }

    // A panic inside `draw` poisons the lock; the state is rebuilt every tick,
    // so it is safe to keep using.
    fn lock(&self) -> MutexGuard<'_, ClockState> {
        self.state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn run<F>(
        &self,
        state: &mut ClockState,
        payload: &str,
        handle: &RenderHandle,
        draw: F,
    ) -> Result<TickOutcome, ClockError>
    where
        F: FnOnce(&Frame),
    {
        let payload_len = payload.chars().count();
        if state.delta.observe_payload(payload_len) {
            debug!(
                symbology = %self.symbology,
                payload_len,
                "payload length changed; delta tracking restarts"
            );
        } else if let Some(frame) = state.cached_frame(payload, handle) {
            trace!(generation = frame.generation, "payload unchanged; reusing frame");
            draw(&frame);
            return Ok(TickOutcome::Reused(frame));
        }

        let frame = match self.build_frame(state, payload, handle) {
            Ok(frame) => frame,
            Err(err) => {
                warn!(
                    symbology = %self.symbology,
                    payload,
                    error = %err,
                    "tick failed; keeping previous frame"
                );
                return Err(err);
            }
        };

        state.delta.commit(frame.layout.barcode_map.clone());
        state.cache_key = Some((payload.to_owned(), handle.clone()));
        state.last_frame = Some(Arc::clone(&frame));
        draw(&frame);
        Ok(TickOutcome::Rendered(frame))
    }

    fn build_frame(
        &self,
        state: &mut ClockState,
        payload: &str,
        handle: &RenderHandle,
    ) -> Result<Arc<Frame>, ClockError> {
        let symbol = encode(self.symbology, payload, handle.encode_options())?;
        let layout = layout(&symbol, handle, state.delta.previous_map())?;
        state.generation += 1;
        debug!(
            symbology = %self.symbology,
            generation = state.generation,
            elements = symbol.len(),
            changed = layout.delta.as_ref().map(|d| d.changed_count()),
            "rendered frame"
        );
        Ok(Arc::new(Frame {
            payload: payload.to_owned(),
            symbol,
            layout,
            generation: state.generation,
        }))
    }
}
