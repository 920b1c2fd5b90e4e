use std::path::Path;

use anyhow::{anyhow, Context, Result};
use macroquad::logging::info;
use macroquad::prelude::{
    clear_background, draw_line, draw_rectangle, draw_rectangle_lines, draw_text, draw_texture_ex,
    measure_text, vec2, DrawTextureParams, Image, Texture2D, WHITE,
};

use crate::config::{
    ACCENT_COLOR, BG_COLOR, BOARD_HEIGHT, BOARD_MARGIN, BOARD_WIDTH, CELL_SIZE, DIM_TEXT_COLOR,
    FOOD_COLOR, GRID_HEIGHT, GRID_LINE_COLOR, GRID_WIDTH, HEADER_HEIGHT, SNAKE_COLOR,
    SNAKE_HEAD_COLOR, TEXT_COLOR, WINDOW_WIDTH,
};
use crate::game::{Cell, Game, GameOverReason, Phase};

/// Load the optional background texture from a local file. Missing or
/// undecodable files just mean no background.
pub fn load_background(path: &Path) -> Option<Texture2D> {
    match read_background(path) {
        Ok(texture) => Some(texture),
        Err(err) => {
            info!("no background image: {:#}", err);
            None
        }
    }
}

fn read_background(path: &Path) -> Result<Texture2D> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let image = Image::from_file_with_format(&bytes, None)
        .map_err(|err| anyhow!("decoding {}: {}", path.display(), err))?;
    Ok(Texture2D::from_image(&image))
}

pub fn draw_frame(game: &Game, background: Option<&Texture2D>) {
    clear_background(BG_COLOR);
    draw_header(game);
    draw_board(game, background);
    draw_status_line(game);
}

fn draw_header(game: &Game) {
    draw_centered("SNAKE", 40.0, 34, ACCENT_COLOR);
    let score_line = format!(
        "Score: {}  -  High Score: {}",
        game.score(),
        game.high_score()
    );
    draw_centered(&score_line, 62.0, 18, TEXT_COLOR);
}

fn draw_board(game: &Game, background: Option<&Texture2D>) {
    if let Some(texture) = background {
        draw_texture_ex(
            texture,
            BOARD_MARGIN,
            HEADER_HEIGHT,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(BOARD_WIDTH, BOARD_HEIGHT)),
                ..Default::default()
            },
        );
    }

    for i in 0..=GRID_WIDTH {
        let x = BOARD_MARGIN + i as f32 * CELL_SIZE;
        draw_line(x, HEADER_HEIGHT, x, HEADER_HEIGHT + BOARD_HEIGHT, 1.0, GRID_LINE_COLOR);
    }
    for j in 0..=GRID_HEIGHT {
        let y = HEADER_HEIGHT + j as f32 * CELL_SIZE;
        draw_line(BOARD_MARGIN, y, BOARD_MARGIN + BOARD_WIDTH, y, 1.0, GRID_LINE_COLOR);
    }
    draw_rectangle_lines(BOARD_MARGIN, HEADER_HEIGHT, BOARD_WIDTH, BOARD_HEIGHT, 2.0, ACCENT_COLOR);

    if game.phase() == Phase::GameOver {
        let score_line = format!("Score: {}", game.score());
        draw_overlay(&["GAME OVER", &score_line, "Press R or Space"]);
        return;
    }

    if let Some(food) = game.food() {
        draw_cell(food, FOOD_COLOR);
    }
    for (i, cell) in game.snake().iter().enumerate() {
        let color = if i == 0 { SNAKE_HEAD_COLOR } else { SNAKE_COLOR };
        draw_cell(*cell, color);
    }

    if game.phase() == Phase::Paused {
        draw_overlay(&["PAUSED", "Press P to resume"]);
    }
}

fn draw_cell(cell: Cell, color: macroquad::color::Color) {
    let x = BOARD_MARGIN + cell.x as f32 * CELL_SIZE + 2.0;
    let y = HEADER_HEIGHT + cell.y as f32 * CELL_SIZE + 2.0;
    draw_rectangle(x, y, CELL_SIZE - 4.0, CELL_SIZE - 4.0, color);
}

fn draw_status_line(game: &Game) {
    let text = match game.phase() {
        Phase::Paused => "Paused - Press P to resume - R or Space to restart",
        Phase::GameOver => match game.over_reason() {
            Some(GameOverReason::HitWall) => "You hit the wall! Press R or Space to restart.",
            Some(GameOverReason::HitSelf) => "You hit yourself! Press R or Space to restart.",
            Some(GameOverReason::BoardFull) => "You filled the board! Press R or Space to restart.",
            None => "Press R or Space to restart.",
        },
        _ => "Arrow keys - Pause: P - Restart: R or Space",
    };
    draw_centered(text, HEADER_HEIGHT + BOARD_HEIGHT + 24.0, 16, DIM_TEXT_COLOR);
}

/// Stack of lines centered on the board, largest line first.
fn draw_overlay(lines: &[&str]) {
    let center_y = HEADER_HEIGHT + BOARD_HEIGHT / 2.0;
    let line_height = 30.0;
    let top = center_y - line_height * (lines.len() as f32 - 1.0) / 2.0;
    for (i, line) in lines.iter().enumerate() {
        let size = if i == 0 { 32 } else { 20 };
        draw_centered(line, top + i as f32 * line_height, size, ACCENT_COLOR);
    }
}

fn draw_centered(text: &str, baseline: f32, font_size: u16, color: macroquad::color::Color) {
    let dims = measure_text(text, None, font_size, 1.0);
    let x = (WINDOW_WIDTH - dims.width) / 2.0;
    draw_text(text, x, baseline, font_size as f32, color);
}
