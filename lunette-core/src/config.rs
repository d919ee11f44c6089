//! Configuration type definitions
//!
//! A single explicit configuration struct replaces the scattered
//! module-level constants of earlier firmware revisions. The controller
//! receives it at construction; defaults reproduce the shipped watch.

use crate::game::grid::GridSize;

/// Watch configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WatchConfig {
    /// Display width in pixels
    pub screen_width: u16,
    /// Display height in pixels
    pub screen_height: u16,
    /// Game cell edge length in pixels
    pub block_size: u16,
    /// Game grid dimensions in cells
    pub grid: GridSize,
    /// Minimum spacing between accepted encoder edges (ms)
    pub rotation_debounce_ms: u32,
    /// Minimum spacing between accepted button presses (ms)
    pub button_debounce_ms: u32,
    /// Simulation tick interval at game start (ms)
    pub tick_default_ms: u32,
    /// Fastest allowed tick interval (ms)
    pub tick_floor_ms: u32,
    /// Tick interval reduction per food eaten (ms)
    pub tick_step_ms: u32,
    /// Score awarded per food eaten
    pub food_reward: u16,
    /// Weather refresh interval (ms)
    pub weather_refresh_ms: u32,
    /// Main loop sleep quantum (ms)
    pub loop_quantum_ms: u32,
    /// Location name passed to the weather collaborator
    pub location: &'static str,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            screen_width: 240,
            screen_height: 240,
            block_size: 10,
            grid: GridSize::new(18, 18),
            rotation_debounce_ms: 50,
            button_debounce_ms: 200,
            tick_default_ms: 200,
            tick_floor_ms: 80,
            tick_step_ms: 3,
            food_reward: 10,
            weather_refresh_ms: 30 * 60 * 1000,
            loop_quantum_ms: 10,
            location: "",
        }
    }
}

impl WatchConfig {
    /// Left pixel edge of the grid, centered on the screen
    pub fn offset_x(&self) -> i32 {
        ((self.screen_width - self.grid.width * self.block_size) / 2) as i32
    }

    /// Top pixel edge of the grid, centered on the screen
    pub fn offset_y(&self) -> i32 {
        ((self.screen_height - self.grid.height * self.block_size) / 2) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let cfg = WatchConfig::default();
        // 240 - 18 * 10 = 60, centered -> 30 on each side
        assert_eq!(cfg.offset_x(), 30);
        assert_eq!(cfg.offset_y(), 30);
    }
}
