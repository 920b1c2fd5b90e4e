use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use macroquad::logging::warn;

/// Read the persisted high score; anything wrong with the file means 0.
pub fn load(path: &Path) -> u32 {
    read(path).unwrap_or(0)
}

/// Persist a new high score, best-effort. Callers only pass values that
/// beat the previous one, so the stored value never decreases.
pub fn save(path: &Path, score: u32) {
    if let Err(err) = write(path, score) {
        warn!("failed to save high score: {:#}", err);
    }
}

fn read(path: &Path) -> Result<u32> {
    let text = fs::read_to_string(path)?;
    let value: i64 = text.trim().parse()?;
    Ok(value.clamp(0, u32::MAX as i64) as u32)
}

fn write(path: &Path, score: u32) -> Result<()> {
    fs::write(path, score.to_string()).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("snake_arcade_{}_{}", std::process::id(), name))
    }

    #[test]
    fn missing_file_loads_as_zero() {
        assert_eq!(load(&temp_file("missing")), 0);
    }

    #[test]
    fn whitespace_padded_integer_parses() {
        let path = temp_file("padded");
        fs::write(&path, "  42\n").unwrap();
        assert_eq!(load(&path), 42);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn negative_value_clamps_to_zero() {
        let path = temp_file("negative");
        fs::write(&path, "-7").unwrap();
        assert_eq!(load(&path), 0);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn garbage_loads_as_zero() {
        let path = temp_file("garbage");
        fs::write(&path, "not a number").unwrap();
        assert_eq!(load(&path), 0);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_file("round_trip");
        save(&path, 123);
        assert_eq!(load(&path), 123);
        assert_eq!(fs::read_to_string(&path).unwrap(), "123");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn save_into_bad_directory_is_swallowed() {
        let path = temp_file("no_such_dir").join("high_score");
        save(&path, 5);
        assert_eq!(load(&path), 0);
    }
}
