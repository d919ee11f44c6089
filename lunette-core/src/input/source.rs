//! Poll-based event interface over the shared input state
//!
//! The control loop reads input exclusively through this type. `peek`
//! exists so the mode switch can decide whether to act on a rotation
//! before committing to consuming it; a peeked rotation left unconsumed
//! stays available for the game's turn logic.

use super::button::PressLatch;
use super::encoder::TickAccumulator;

/// Aggregated encoder + button event source
pub struct InputSource<'a> {
    rotation: &'a TickAccumulator,
    press: &'a PressLatch,
}

impl<'a> InputSource<'a> {
    pub fn new(rotation: &'a TickAccumulator, press: &'a PressLatch) -> Self {
        Self { rotation, press }
    }

    /// Pending rotation ticks without consuming them
    pub fn peek_rotation(&self) -> i32 {
        self.rotation.peek()
    }

    /// Pending rotation ticks, read-and-clear
    pub fn take_rotation(&self) -> i32 {
        self.rotation.take()
    }

    /// Discard pending rotation (called on game reset to drop stale input)
    pub fn clear_rotation(&self) {
        self.rotation.clear();
    }

    /// Pending press event, read-and-clear
    pub fn take_press(&self) -> bool {
        self.press.take()
    }
}
