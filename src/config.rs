use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const APP_DIR_NAME: &str = "neon-snake";
const CONFIG_FILE_NAME: &str = "config.json";

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

/// Reference board: 800x600 pixels at 20 pixels per cell.
pub const DEFAULT_GRID_WIDTH: u16 = 40;
pub const DEFAULT_GRID_HEIGHT: u16 = 30;

pub const MIN_GRID_SIDE: u16 = 8;
pub const MAX_GRID_SIDE: u16 = 200;

/// Tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 80;
pub const MIN_TICK_INTERVAL_MS: u64 = 10;
pub const MAX_TICK_INTERVAL_MS: u64 = 2000;

/// Points awarded per food eaten.
pub const FOOD_REWARD: u32 = 10;

/// Length of the snake after a reset.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Head cell of the snake after a reset.
pub const INITIAL_HEAD: (i32, i32) = (5, 5);

/// Food never spawns within this many cells of the border.
pub const FOOD_SPAWN_MARGIN: i32 = 1;

/// Upper bound on rejection samples before enumerating free cells.
pub const FOOD_SPAWN_MAX_ATTEMPTS: u32 = 64;

/// User-tunable settings, loaded from an optional JSON file.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub grid_width: u16,
    pub grid_height: u16,
    pub tick_interval_ms: u64,
    pub ascii: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            ascii: false,
        }
    }
}

impl Settings {
    /// Returns the configured board dimensions.
    #[must_use]
    pub fn grid(&self) -> GridSize {
        GridSize {
            width: self.grid_width,
            height: self.grid_height,
        }
    }

    /// Checks that every value is inside its supported range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let side_ok = |side: u16| (MIN_GRID_SIDE..=MAX_GRID_SIDE).contains(&side);
        if !side_ok(self.grid_width) || !side_ok(self.grid_height) {
            return Err(ConfigError::InvalidGrid {
                width: self.grid_width,
                height: self.grid_height,
                min: MIN_GRID_SIDE,
                max: MAX_GRID_SIDE,
            });
        }

        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&self.tick_interval_ms) {
            return Err(ConfigError::InvalidTickInterval(
                self.tick_interval_ms,
                MIN_TICK_INTERVAL_MS,
                MAX_TICK_INTERVAL_MS,
            ));
        }

        Ok(())
    }
}

/// Returns the platform-correct default config file path.
#[must_use]
pub fn default_config_path() -> PathBuf {
    let mut base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(CONFIG_FILE_NAME);
    base
}

/// Loads settings from `path`.
///
/// Returns defaults when the file does not exist. Returns `Err` when the file
/// exists but cannot be read or parsed, so the caller can report it before
/// entering raw terminal mode.
pub fn load_settings(path: &Path) -> Result<Settings, ConfigError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_str::<Settings>(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
