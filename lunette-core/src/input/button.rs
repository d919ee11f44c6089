//! Push button debouncing
//!
//! One discrete event per qualifying released-to-pressed transition.
//! Holding the button does not repeat, and presses inside the debounce
//! window are discarded.

use portable_atomic::{AtomicBool, Ordering};

/// Shared pending-press latch
///
/// Set by the debouncer, consumed (read-and-clear) by the control loop.
#[derive(Debug)]
pub struct PressLatch {
    pressed: AtomicBool,
}

impl PressLatch {
    pub const fn new() -> Self {
        Self {
            pressed: AtomicBool::new(false),
        }
    }

    /// Producer side: record an accepted press
    pub fn set(&self) {
        self.pressed.store(true, Ordering::Relaxed);
    }

    /// Read and clear
    pub fn take(&self) -> bool {
        self.pressed.swap(false, Ordering::Relaxed)
    }
}

impl Default for PressLatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Debounced press detector
pub struct ButtonDebouncer<'a> {
    latch: &'a PressLatch,
    pressed_last: bool,
    last_press_ms: Option<u32>,
    debounce_ms: u32,
}

impl<'a> ButtonDebouncer<'a> {
    pub fn new(latch: &'a PressLatch, debounce_ms: u32) -> Self {
        Self {
            latch,
            pressed_last: false,
            last_press_ms: None,
            debounce_ms,
        }
    }

    /// Feed one button sample
    ///
    /// `pressed` is the already-polarity-corrected level (the pin is
    /// active low; the caller passes `pin.is_low()`).
    pub fn sample(&mut self, pressed: bool, now_ms: u32) {
        if pressed && !self.pressed_last && self.press_accepted(now_ms) {
            self.latch.set();
            self.last_press_ms = Some(now_ms);
        }

        self.pressed_last = pressed;
    }

    fn press_accepted(&self, now_ms: u32) -> bool {
        match self.last_press_ms {
            None => true,
            Some(last) => now_ms.wrapping_sub(last) > self.debounce_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEBOUNCE_MS: u32 = 200;

    #[test]
    fn test_press_latches_once() {
        let latch = PressLatch::new();
        let mut button = ButtonDebouncer::new(&latch, DEBOUNCE_MS);

        button.sample(true, 100);
        assert!(latch.take());
        assert!(!latch.take());
    }

    #[test]
    fn test_hold_does_not_repeat() {
        let latch = PressLatch::new();
        let mut button = ButtonDebouncer::new(&latch, DEBOUNCE_MS);

        button.sample(true, 100);
        assert!(latch.take());

        // Held well past the debounce window: still no new event
        for now in (110..1000).step_by(10) {
            button.sample(true, now);
        }
        assert!(!latch.take());
    }

    #[test]
    fn test_bounce_inside_window_dropped() {
        let latch = PressLatch::new();
        let mut button = ButtonDebouncer::new(&latch, DEBOUNCE_MS);

        button.sample(true, 100);
        button.sample(false, 150);
        button.sample(true, 180); // re-press 80ms after accepted press
        assert!(latch.take());
        assert!(!latch.take());
    }

    #[test]
    fn test_release_and_repress_after_window() {
        let latch = PressLatch::new();
        let mut button = ButtonDebouncer::new(&latch, DEBOUNCE_MS);

        button.sample(true, 100);
        assert!(latch.take());

        button.sample(false, 200);
        button.sample(true, 400);
        assert!(latch.take());
    }
}
