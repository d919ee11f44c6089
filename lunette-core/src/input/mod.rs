//! Encoder and button input handling
//!
//! Raw pin levels are decoded into discrete rotation ticks and press
//! events. The decoders may run in a different execution context than
//! the consumer (pin-change task vs. control loop), so the pending
//! event state lives in shared atomics with read-and-clear semantics.

pub mod button;
pub mod encoder;
pub mod source;

pub use button::{ButtonDebouncer, PressLatch};
pub use encoder::{QuadratureDecoder, TickAccumulator};
pub use source::InputSource;
