//! Snake arcade game: a fixed-tick grid game behind a macroquad window,
//! with a persisted high score and best-effort sound and background image.

pub mod audio;
pub mod config;
pub mod game;
pub mod highscore;
pub mod input;
pub mod render;
