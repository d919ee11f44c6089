//! Partial-redraw diffing between simulation snapshots
//!
//! The display is slow over SPI, so only cells that changed since the
//! previous frame are touched. The differ remembers the last painted
//! snapshot and produces disjoint clear/draw sets for the caller.

use heapless::Vec;

use super::grid::GridPosition;
use super::sim::{GameState, Phase, MAX_SNAKE_SEGMENTS};

/// Clear-set capacity: previous snake plus the previous food cell
pub const MAX_CLEARED_CELLS: usize = MAX_SNAKE_SEGMENTS + 1;

/// One frame's worth of drawing work
#[derive(Debug, Clone)]
pub struct FrameDiff {
    /// Cells occupied last frame and free now; cleared first
    pub clear: Vec<GridPosition, MAX_CLEARED_CELLS>,
    /// Full current snake, head at index 0 (drawn in the head color)
    pub snake: Vec<GridPosition, MAX_SNAKE_SEGMENTS>,
    /// Food cell, present only when it moved since last frame
    pub food: Option<GridPosition>,
    /// Score, present only when it changed since last frame
    pub score: Option<u16>,
    /// One-shot game-over panel directive carrying the final score
    pub game_over: Option<u16>,
}

/// Stateful differ between consecutive game snapshots
#[derive(Debug)]
pub struct RenderDiff {
    prev_snake: Vec<GridPosition, MAX_SNAKE_SEGMENTS>,
    prev_food: Option<GridPosition>,
    prev_score: Option<u16>,
    /// Whether the game-over panel has been emitted for the current
    /// `Over` phase. Always present, defaults false.
    over_drawn: bool,
}

impl Default for RenderDiff {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderDiff {
    pub fn new() -> Self {
        Self {
            prev_snake: Vec::new(),
            prev_food: None,
            prev_score: None,
            over_drawn: false,
        }
    }

    /// Forget the previous snapshot (call on game reset)
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Diff the current state against the remembered snapshot
    ///
    /// While `Over`, the panel directive is emitted exactly once for the
    /// transition and every later frame is empty. A cell currently
    /// occupied is never placed in the clear set, so the clear and draw
    /// sets are disjoint by construction.
    pub fn frame(&mut self, state: &GameState) -> FrameDiff {
        if state.phase == Phase::Over {
            let directive = if self.over_drawn {
                None
            } else {
                Some(state.score)
            };
            self.over_drawn = true;
            return FrameDiff {
                clear: Vec::new(),
                snake: Vec::new(),
                food: None,
                score: None,
                game_over: directive,
            };
        }
        self.over_drawn = false;

        let occupied_now =
            |cell: GridPosition| state.snake.contains(&cell) || cell == state.food;

        let mut clear = Vec::new();
        for &cell in self.prev_snake.iter() {
            if !occupied_now(cell) {
                let _ = clear.push(cell);
            }
        }
        if let Some(old_food) = self.prev_food {
            if !occupied_now(old_food) {
                let _ = clear.push(old_food);
            }
        }

        let food = (self.prev_food != Some(state.food)).then_some(state.food);
        let score = (self.prev_score != Some(state.score)).then_some(state.score);

        self.prev_snake = state.snake.clone();
        self.prev_food = Some(state.food);
        self.prev_score = Some(state.score);

        FrameDiff {
            clear,
            snake: state.snake.clone(),
            food,
            score,
            game_over: None,
        }
    }
}
