//! Game constants and environment-driven configuration.

use std::env;
use std::path::PathBuf;

use macroquad::color::Color;

pub const GRID_WIDTH: i32 = 20;
pub const GRID_HEIGHT: i32 = 16;
pub const CELL_SIZE: f32 = 24.0;

/// Seconds between snake advances. Constant for the whole run.
pub const TICK_INTERVAL: f32 = 0.12;

pub const SCORE_PER_FOOD: u32 = 10;
pub const INITIAL_SNAKE_LEN: usize = 3;

/// Sample rate for the procedurally generated sounds.
pub const SAMPLE_RATE: u32 = 22050;

// Window layout: header (title + score), board, footer (status line).
pub const BOARD_MARGIN: f32 = 16.0;
pub const HEADER_HEIGHT: f32 = 72.0;
pub const FOOTER_HEIGHT: f32 = 36.0;
pub const BOARD_WIDTH: f32 = GRID_WIDTH as f32 * CELL_SIZE;
pub const BOARD_HEIGHT: f32 = GRID_HEIGHT as f32 * CELL_SIZE;
pub const WINDOW_WIDTH: f32 = BOARD_WIDTH + 2.0 * BOARD_MARGIN;
pub const WINDOW_HEIGHT: f32 = HEADER_HEIGHT + BOARD_HEIGHT + FOOTER_HEIGHT;

pub const WINDOW_TITLE: &str = "Snake";

pub const BG_COLOR: Color = Color::new(0.102, 0.102, 0.180, 1.0);
pub const SNAKE_COLOR: Color = Color::new(0.0, 0.851, 1.0, 1.0);
pub const SNAKE_HEAD_COLOR: Color = Color::new(0.0, 1.0, 0.533, 1.0);
pub const FOOD_COLOR: Color = Color::new(1.0, 0.420, 0.420, 1.0);
pub const GRID_LINE_COLOR: Color = Color::new(0.086, 0.129, 0.243, 1.0);
pub const TEXT_COLOR: Color = Color::new(0.918, 0.918, 0.918, 1.0);
pub const ACCENT_COLOR: Color = Color::new(1.0, 0.851, 0.239, 1.0);
pub const DIM_TEXT_COLOR: Color = Color::new(0.533, 0.533, 0.533, 1.0);

/// Runtime knobs resolved from the environment once at startup.
pub struct Config {
    pub audio_enabled: bool,
    pub high_score_path: PathBuf,
    pub background_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            audio_enabled: !env_flag("SNAKE_DISABLE_AUDIO"),
            high_score_path: env_path("SNAKE_HIGH_SCORE_FILE", ".snake_high_score"),
            background_path: env_path("SNAKE_BACKGROUND_FILE", ".snake_background.png"),
        }
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name).map(|value| is_truthy(&value)).unwrap_or(false)
}

fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes")
}

fn env_path(name: &str, default: &str) -> PathBuf {
    env::var_os(name)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_flags() {
        assert!(is_truthy("1"));
        assert!(is_truthy("true"));
        assert!(is_truthy("YES"));
        assert!(is_truthy(" yes "));
        assert!(!is_truthy(""));
        assert!(!is_truthy("0"));
        assert!(!is_truthy("no"));
    }
}
