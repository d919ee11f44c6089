//! Game drawing: boundary, cell blocks, score line, game-over panel

use core::fmt::Write;

use heapless::String;

use crate::config::WatchConfig;
use crate::game::grid::GridPosition;
use crate::game::render::FrameDiff;
use crate::traits::display::{Color, Display, DisplayError};

/// Height of the score text row in pixels
const SCORE_ROW_H: u32 = 16;

/// Draw the playfield border and the back-navigation hint
pub fn draw_boundary<D: Display>(display: &mut D, cfg: &WatchConfig) -> Result<(), DisplayError> {
    let w = (cfg.grid.width * cfg.block_size) as u32;
    let h = (cfg.grid.height * cfg.block_size) as u32;

    display.rect(
        cfg.offset_x() - 2,
        cfg.offset_y() - 2,
        w + 4,
        h + 4,
        Color::Yellow,
    )?;
    display.text("<< Back", 5, 5, Color::Gray)
}

/// Apply one frame diff: clear stale cells, then draw the new state
pub fn paint_frame<D: Display>(
    display: &mut D,
    cfg: &WatchConfig,
    frame: &FrameDiff,
) -> Result<(), DisplayError> {
    if let Some(score) = frame.game_over {
        return draw_game_over(display, cfg, score);
    }

    for &cell in frame.clear.iter() {
        fill_block(display, cfg, cell, Color::Black)?;
    }

    for (i, &cell) in frame.snake.iter().enumerate() {
        let color = if i == 0 { Color::Blue } else { Color::Green };
        draw_block(display, cfg, cell, color)?;
    }

    if let Some(food) = frame.food {
        draw_block(display, cfg, food, Color::Red)?;
    }

    if let Some(score) = frame.score {
        draw_score(display, cfg, score)?;
    }

    Ok(())
}

/// Full-screen game-over panel with the final score and restart hints
pub fn draw_game_over<D: Display>(
    display: &mut D,
    cfg: &WatchConfig,
    score: u16,
) -> Result<(), DisplayError> {
    let cx = (cfg.screen_width / 2) as i32;
    let cy = (cfg.screen_height / 2) as i32;

    display.fill(Color::Black)?;
    display.text("GAME OVER", cx - 40, cy - 30, Color::White)?;

    let mut line: String<16> = String::new();
    let _ = write!(line, "Score: {}", score);
    display.text(&line, cx - 35, cy - 10, Color::White)?;

    display.text("Press button", cx - 45, cy + 10, Color::White)?;
    display.text("or << Back", cx - 40, cy + 30, Color::White)
}

fn draw_score<D: Display>(display: &mut D, cfg: &WatchConfig, score: u16) -> Result<(), DisplayError> {
    let x = cfg.offset_x();
    let y = cfg.offset_y() - SCORE_ROW_H as i32 - 4;

    display.fill_rect(x, y, 100, SCORE_ROW_H, Color::Black)?;

    let mut line: String<16> = String::new();
    let _ = write!(line, "Score:{}", score);
    display.text(&line, x, y, Color::White)
}

/// Outlined cell block (snake segment or food)
fn draw_block<D: Display>(
    display: &mut D,
    cfg: &WatchConfig,
    cell: GridPosition,
    color: Color,
) -> Result<(), DisplayError> {
    fill_block(display, cfg, cell, color)?;
    if color != Color::Black {
        let (px, py) = cell_origin(cfg, cell);
        display.rect(px, py, cfg.block_size as u32, cfg.block_size as u32, Color::White)?;
    }
    Ok(())
}

fn fill_block<D: Display>(
    display: &mut D,
    cfg: &WatchConfig,
    cell: GridPosition,
    color: Color,
) -> Result<(), DisplayError> {
    // Cells come from the simulation and are in bounds; skip rather
    // than paint outside the border if that ever breaks.
    if !cfg.grid.contains(cell) {
        return Ok(());
    }
    let (px, py) = cell_origin(cfg, cell);
    display.fill_rect(px, py, cfg.block_size as u32, cfg.block_size as u32, color)
}

fn cell_origin(cfg: &WatchConfig, cell: GridPosition) -> (i32, i32) {
    (
        cfg.offset_x() + cell.x as i32 * cfg.block_size as i32,
        cfg.offset_y() + cell.y as i32 * cfg.block_size as i32,
    )
}
