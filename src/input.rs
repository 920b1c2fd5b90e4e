use macroquad::input::{get_keys_pressed, KeyCode};

use crate::game::Direction;

/// A key press translated into game terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    TogglePause,
    Restart,
}

impl Command {
    fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Up => Some(Command::Steer(Direction::Up)),
            KeyCode::Down => Some(Command::Steer(Direction::Down)),
            KeyCode::Left => Some(Command::Steer(Direction::Left)),
            KeyCode::Right => Some(Command::Steer(Direction::Right)),
            KeyCode::P => Some(Command::TogglePause),
            KeyCode::R | KeyCode::Space => Some(Command::Restart),
            _ => None,
        }
    }
}

/// Commands for the keys that went down this frame.
pub fn poll() -> Vec<Command> {
    get_keys_pressed()
        .into_iter()
        .filter_map(Command::from_key)
        .collect()
}
