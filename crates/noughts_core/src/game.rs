//! Turn engine: a human move followed by the automated reply.

use crate::board::Board;
use crate::error::GameError;
use crate::player::{Player, Role};
use crate::position::{CELLS, Position};
use crate::rng::GameRng;
use crate::rules;
use crate::types::{Cell, GameStatus, Mark};
use tracing::{debug, info, instrument};

/// What a call to [`Game::apply_human_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The move was off the board, onto an occupied cell, or made after the
    /// game ended. Nothing changed.
    Ignored,
    /// The human played `human`; `reply` is the automated player's answer,
    /// absent when the human's move ended the game.
    Played {
        /// Cell the human took.
        human: Position,
        /// Cell the automated player took, if it got to move.
        reply: Option<Position>,
    },
}

/// Tic-tac-toe game between a human and a random opponent.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    human: Player,
    automated: Player,
    free_cells: usize,
    status: GameStatus,
    rng: GameRng,
}

impl Game {
    /// Creates a game where the human plays `human_mark` and the computer
    /// plays the other mark.
    #[instrument(skip(rng), fields(seed = rng.seed()))]
    pub fn new(human_mark: Mark, rng: GameRng) -> Self {
        Self::from_parts(
            Player::human(human_mark),
            Player::automated(human_mark.opponent()),
            rng,
        )
    }

    /// Creates a game from an explicit pair of players.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if the first player is not human, the second is
    /// not automated, or both share a mark.
    #[instrument(skip(rng), fields(seed = rng.seed()))]
    pub fn with_players(human: Player, automated: Player, rng: GameRng) -> Result<Self, GameError> {
        if human.role() != Role::Human {
            return Err(GameError::new("First player must be human"));
        }
        if automated.role() != Role::Automated {
            return Err(GameError::new("Second player must be automated"));
        }
        if human.mark() == automated.mark() {
            return Err(GameError::new(format!(
                "Players must use different marks, both use {}",
                human.mark()
            )));
        }
        Ok(Self::from_parts(human, automated, rng))
    }

    fn from_parts(human: Player, automated: Player, rng: GameRng) -> Self {
        let mut game = Self {
            board: Board::new(),
            human,
            automated,
            free_cells: CELLS,
            status: GameStatus::InProgress,
            rng,
        };
        game.reset();
        game
    }

    /// Starts a fresh round with the same players.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.free_cells = CELLS;
        self.status = GameStatus::InProgress;
        self.human.clear_last_move();
        self.automated.clear_last_move();
        debug!("Board reset");
    }

    /// Plays the human's move at `(row, col)` and, if the game goes on, the
    /// automated reply.
    ///
    /// Out-of-range coordinates, occupied cells, and moves after the game
    /// has ended are ignored.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Turn {
        if self.status.is_terminal() {
            debug!("Game over, move ignored");
            return Turn::Ignored;
        }

        let requested = Position::from_row_col(row, col);
        let Some(pos) = self
            .human
            .choose_move(&self.board, requested, &mut self.rng)
        else {
            debug!("Cell unavailable, move ignored");
            return Turn::Ignored;
        };

        self.human.apply(&mut self.board, pos);
        self.free_cells -= 1;
        info!(player = %self.human, "Human moved");

        if self.board.has_win(self.human.mark()) {
            self.finish(GameStatus::Won(self.human.mark()));
            return Turn::Played { human: pos, reply: None };
        }
        if self.free_cells == 0 {
            self.finish(GameStatus::Draw);
            return Turn::Played { human: pos, reply: None };
        }

        let reply = self.play_automated();

        if self.board.has_win(self.automated.mark()) {
            self.finish(GameStatus::Won(self.automated.mark()));
        } else if self.free_cells == 0 {
            self.finish(GameStatus::Draw);
        }

        Turn::Played {
            human: pos,
            reply: Some(reply),
        }
    }

    fn play_automated(&mut self) -> Position {
        let choice = self.automated.choose_move(&self.board, None, &mut self.rng);
        let Some(pos) = choice else {
            panic!(
                "automated move requested with {} free cells on\n{}",
                self.free_cells,
                self.board.display()
            );
        };
        self.automated.apply(&mut self.board, pos);
        self.free_cells -= 1;
        info!(player = %self.automated, "Automated player moved");
        pos
    }

    fn finish(&mut self, status: GameStatus) {
        debug_assert!(status != GameStatus::Draw || rules::is_draw(&self.board));
        self.status = status;
        info!(?status, board = %self.board.display(), "Game over");
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Checks whether the game has reached a win or a draw.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the cell at `(row, col)`, or `None` if it is off the board.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<Cell> {
        Position::from_row_col(row, col).map(|pos| self.board.get(pos))
    }

    /// Returns the cell at `pos`.
    pub fn cell(&self, pos: Position) -> Cell {
        self.board.get(pos)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the human player.
    pub fn human(&self) -> &Player {
        &self.human
    }

    /// Returns the automated player.
    pub fn automated(&self) -> &Player {
        &self.automated
    }

    /// Number of empty cells left.
    pub fn free_cell_count(&self) -> usize {
        self.free_cells
    }

    /// Number of cells holding a mark.
    pub fn occupied_cell_count(&self) -> usize {
        self.board.occupied_cell_count()
    }

    /// Seed of the game's random source.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
