//! Board-agnostic core logic for the Lunette smartwatch firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Quadrature encoder decoding with debounce
//! - Push button debouncing
//! - The snake game simulation and partial-redraw diffing
//! - The Clock / Game screen-mode state machine
//! - Collaborator traits (display, weather, wall clock)
//! - Configuration type definitions
//!
//! Everything here runs unchanged on the host for testing.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod game;
pub mod input;
pub mod screen;
pub mod traits;
