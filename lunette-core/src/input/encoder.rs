//! Quadrature encoder decoding with debounce
//!
//! A mechanical encoder toggles two out-of-phase signals (clk, dt) as it
//! turns. On a falling clk edge the dt level gives the direction: high
//! means clockwise, low means counter-clockwise. Mechanical contact
//! bounce produces bursts of edges; edges inside the debounce window are
//! discarded entirely.
//!
//! `sample` is agnostic to its caller: it may be polled on a fixed
//! cadence from the control loop or invoked from a pin-change handler.
//! Both produce identical tick sequences for identical pin histories.

use portable_atomic::{AtomicI32, Ordering};

/// Shared pending-tick accumulator
///
/// Single producer (the decoder, possibly in interrupt context), single
/// consumer (the control loop). Reads are read-and-clear so every
/// accumulated tick is consumed exactly once.
#[derive(Debug)]
pub struct TickAccumulator {
    pending: AtomicI32,
}

impl TickAccumulator {
    pub const fn new() -> Self {
        Self {
            pending: AtomicI32::new(0),
        }
    }

    /// Producer side: accumulate a decoded tick
    pub fn add(&self, delta: i32) {
        self.pending.fetch_add(delta, Ordering::Relaxed);
    }

    /// Read without clearing
    pub fn peek(&self) -> i32 {
        self.pending.load(Ordering::Relaxed)
    }

    /// Read and clear
    pub fn take(&self) -> i32 {
        self.pending.swap(0, Ordering::Relaxed)
    }

    /// Discard all pending ticks
    pub fn clear(&self) {
        self.pending.store(0, Ordering::Relaxed);
    }
}

impl Default for TickAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// Debounced quadrature decoder
///
/// Owns the edge-detection state; decoded ticks go into the shared
/// [`TickAccumulator`]. Timestamps are monotonic milliseconds with
/// wrapping arithmetic.
pub struct QuadratureDecoder<'a> {
    ticks: &'a TickAccumulator,
    clk_last: bool,
    last_edge_ms: Option<u32>,
    debounce_ms: u32,
}

impl<'a> QuadratureDecoder<'a> {
    /// New decoder; pins idle high (pull-ups)
    pub fn new(ticks: &'a TickAccumulator, debounce_ms: u32) -> Self {
        Self {
            ticks,
            clk_last: true,
            last_edge_ms: None,
            debounce_ms,
        }
    }

    /// Feed one pin sample
    ///
    /// A falling clk edge outside the debounce window decodes one tick
    /// from the dt level. The post-sample clk level is always recorded,
    /// including for edges the debounce discards, so edge detection
    /// stays correct across ignored samples. dt is only inspected at
    /// the edge, so no dt history is kept.
    pub fn sample(&mut self, clk: bool, dt: bool, now_ms: u32) {
        if !clk && self.clk_last && self.edge_accepted(now_ms) {
            self.ticks.add(if dt { 1 } else { -1 });
            self.last_edge_ms = Some(now_ms);
        }

        self.clk_last = clk;
    }

    fn edge_accepted(&self, now_ms: u32) -> bool {
        match self.last_edge_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) > self.debounce_ms,
        }
    }
}
