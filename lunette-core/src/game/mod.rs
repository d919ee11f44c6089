//! Snake game simulation and redraw diffing

pub mod grid;
pub mod render;
pub mod sim;

pub use grid::{Direction, GridPosition, GridSize};
pub use render::{FrameDiff, RenderDiff};
pub use sim::{generate_food, propose_turn, GameState, Phase, MAX_SNAKE_SEGMENTS};
