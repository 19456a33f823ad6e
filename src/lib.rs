//! Falling-block puzzle engine with a terminal front-end.
//!
//! - **game**: board, pieces, piece sources and the [`Game`] state machine
//! - **ui**: ratatui rendering of the engine's queryable state
//! - **app**: terminal lifecycle, gravity timer and key mapping
//! - **config**: constants and TOML settings
//!
//! The engine is synchronous and never fails; anything that can drive it
//! (a timer, a test, a replay) just calls its commands in order.

pub mod app;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;

pub use config::{
    BOARD_H, BOARD_W, CELL_W, DEFAULT_TICK_MS, LINE_SCORE, MIN_PANE_WIDTH, PLAY_H, PLAY_W,
    Settings,
};
pub use error::{Error, Result};
pub use game::{Board, Cell, Game, Phase, Piece, PieceSource, RenderCell, Shape};
