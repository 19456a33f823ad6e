//! Board/render constants and on-disk locations.

mod settings;

pub use settings::{GameSettings, LogSettings, Settings, UiSettings};

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{Error, Result};

// Shared game UI/constants.
pub const BOARD_W: usize = 10;
pub const BOARD_H: usize = 20;
pub const LINE_SCORE: u64 = 100;
pub const DEFAULT_TICK_MS: u64 = 1000;
pub const CELL_W: usize = 2; // each block is two characters wide
pub const PLAY_W: usize = BOARD_W * CELL_W + 2; // inner width plus side walls
pub const PLAY_H: usize = BOARD_H + 2; // inner height plus ceiling/floor
// Minimal pane width to fit the playfield plus the cabinet border.
pub const MIN_PANE_WIDTH: u16 = (PLAY_W as u16) + 2;

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "stratomercata", "stratoblocks")
        .ok_or_else(|| Error::config("Could not determine home directory"))
}

pub fn config_dir() -> Result<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn log_dir() -> Result<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().join("logs"))
}
