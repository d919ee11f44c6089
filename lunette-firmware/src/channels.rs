//! Shared state between the input tasks and the control loop
//!
//! Lock-free SPSC primitives: the encoder task produces into the tick
//! accumulator, the control loop produces button presses into the latch
//! from its own sampling, and the screen controller consumes both
//! through an `InputSource`.

use lunette_core::input::{PressLatch, TickAccumulator};

/// Decoded encoder ticks pending consumption (positive = clockwise)
pub static ENCODER_TICKS: TickAccumulator = TickAccumulator::new();

/// Debounced button press pending consumption
pub static BUTTON_PRESS: PressLatch = PressLatch::new();
