//! Noughts - windowed tic-tac-toe against a random computer opponent.
//!
//! The rules live in [`noughts_core`]; this crate turns clicks and key
//! presses into engine calls and paints the board with egui.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Geometry**: pointer position to board cell
//! - **Render**: board painting and result text
//! - **App**: the eframe update loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
mod geometry;
mod render;

pub use app::NoughtsApp;
pub use config::{AppConfig, ConfigError, MAX_CELL_SIZE, MIN_CELL_SIZE};
pub use geometry::Grid;
pub use render::result_message;
