//! Noughts core - tic-tac-toe rules and turn engine.
//!
//! A human plays against a computer opponent that picks uniformly at random
//! among the empty cells. The window, drawing, and event loop live in the
//! `noughts` binary; this crate owns everything with rules in it.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Cell`]s with win and draw checks
//! - **Player**: a [`Role`] (human or automated) bound to a [`Mark`]
//! - **Game**: the turn engine; a human move is answered immediately by the
//!   automated player unless it ended the game
//!
//! # Example
//!
//! ```
//! use noughts_core::{Game, GameRng, GameStatus, Mark, Turn};
//!
//! let mut game = Game::new(Mark::X, GameRng::new(42));
//! let turn = game.apply_human_move(1, 1);
//! assert!(matches!(turn, Turn::Played { reply: Some(_), .. }));
//! assert_eq!(game.status(), GameStatus::InProgress);
//! assert_eq!(game.free_cell_count(), 7);
//!
//! // Occupied cells are ignored.
//! assert_eq!(game.apply_human_move(1, 1), Turn::Ignored);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod player;
mod position;
mod rng;
pub mod rules;
mod types;

pub use board::Board;
pub use error::GameError;
pub use game::{Game, Turn};
pub use player::{Player, Role};
pub use position::{CELLS, COLS, Position, ROWS};
pub use rng::GameRng;
pub use types::{Cell, GameStatus, Mark};
