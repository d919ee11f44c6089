//! Screen-mode state machine and drawing
//!
//! The controller owns which screen is live (clock face or snake game)
//! and routes encoder events to it. Drawing goes through the abstract
//! display trait; `face` and `paint` hold the pixel layouts.

pub mod controller;
pub mod face;
pub mod paint;

pub use controller::{ScreenController, ScreenMode};
