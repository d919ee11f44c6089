//! Collaborator traits
//!
//! The core issues calls through these traits and never inspects the
//! collaborators' internal state. Implementations live in the firmware
//! crate (or in test doubles on the host).

pub mod clock;
pub mod display;
pub mod weather;

pub use clock::{WallClock, WallTime};
pub use display::{Color, Display, DisplayError};
pub use weather::{WeatherProvider, WeatherReport};
