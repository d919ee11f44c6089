//! Deterministic snake simulation
//!
//! The simulation is time-agnostic: the owner calls [`GameState::step`]
//! once per elapsed tick interval, and the state advances by exactly one
//! cell. Everything random goes through the caller-supplied RNG so a run
//! is reproducible from its seed.

use heapless::Vec;
use rand_core::RngCore;

use super::grid::{Direction, GridPosition, GridSize};
use crate::config::WatchConfig;

/// Upper bound on snake length, sized for the default 18x18 grid
///
/// Configured grids must not exceed this many cells; the controller
/// rejects larger grids at construction.
pub const MAX_SNAKE_SEGMENTS: usize = 18 * 18;

/// Game lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    Running,
    Over,
}

/// Complete game state, advanced one cell per tick
///
/// Invariants: the snake always has at least two segments with the head
/// at index 0 and no duplicate cells, and the food never coincides with
/// a snake segment. Violations are programming errors and panic.
#[derive(Debug, Clone)]
pub struct GameState {
    pub snake: Vec<GridPosition, MAX_SNAKE_SEGMENTS>,
    pub food: GridPosition,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
    pub score: u16,
    pub tick_interval_ms: u32,
    pub phase: Phase,
}

impl GameState {
    /// Fresh game: two-segment snake centered on the grid, heading right
    pub fn new<R: RngCore>(cfg: &WatchConfig, rng: &mut R) -> Self {
        let cx = (cfg.grid.width / 2) as i16;
        let cy = (cfg.grid.height / 2) as i16;

        let mut snake = Vec::new();
        let _ = snake.push(GridPosition::new(cx, cy));
        let _ = snake.push(GridPosition::new(cx - 1, cy));

        let food = generate_food(cfg.grid, &snake, rng);

        Self {
            snake,
            food,
            direction: Direction::Right,
            pending_direction: None,
            score: 0,
            tick_interval_ms: cfg.tick_default_ms,
            phase: Phase::Running,
        }
    }

    /// Advance the simulation by one tick
    ///
    /// Applies the pending direction (the no-reversal rule is re-checked
    /// here, not just at proposal time), moves the head one cell, then
    /// resolves wall collision, self collision, and food in that order.
    /// The cell under the tail does not count for self collision because
    /// the tail vacates it this tick. No-op once the phase is `Over`.
    pub fn step<R: RngCore>(&mut self, cfg: &WatchConfig, rng: &mut R) {
        if self.phase == Phase::Over {
            return;
        }

        if let Some(pending) = self.pending_direction.take() {
            if pending != self.direction.opposite() {
                self.direction = pending;
            }
        }

        let head = *self.snake.first().expect("snake is never empty");
        let new_head = head.moved(self.direction);

        if !cfg.grid.contains(new_head) {
            self.phase = Phase::Over;
            return;
        }

        let body = &self.snake[..self.snake.len() - 1];
        if body.contains(&new_head) {
            self.phase = Phase::Over;
            return;
        }

        self.snake
            .insert(0, new_head)
            .expect("snake cannot outgrow the grid");

        if new_head == self.food {
            self.score += cfg.food_reward;
            self.food = generate_food(cfg.grid, &self.snake, rng);
            self.tick_interval_ms = self
                .tick_interval_ms
                .saturating_sub(cfg.tick_step_ms)
                .max(cfg.tick_floor_ms);
        } else {
            self.snake.pop();
        }
    }
}

/// Turn the current heading by one step per the encoder delta
///
/// Positive deltas turn right, negative turn left, zero is no input.
/// A result equal to the exact opposite of `current` is rejected; the
/// returned heading is pending and only applied on the next tick.
pub fn propose_turn(current: Direction, tick_delta: i32) -> Option<Direction> {
    if tick_delta == 0 {
        return None;
    }

    let next = if tick_delta > 0 {
        current.turned_right()
    } else {
        current.turned_left()
    };

    if next == current.opposite() {
        return None;
    }

    Some(next)
}

/// Pick a food cell not occupied by the snake, by rejection sampling
///
/// Terminates with probability 1 while free cells exist. A fully
/// occupied grid would loop forever; callers keep the grid strictly
/// larger than any reachable snake length.
pub fn generate_food<R: RngCore>(
    grid: GridSize,
    snake: &[GridPosition],
    rng: &mut R,
) -> GridPosition {
    loop {
        let candidate = GridPosition::new(
            (rng.next_u32() % grid.width as u32) as i16,
            (rng.next_u32() % grid.height as u32) as i16,
        );
        if !snake.contains(&candidate) {
            return candidate;
        }
    }
}
