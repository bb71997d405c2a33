//! The two kinds of player and how each picks a cell.

use crate::board::Board;
use crate::position::Position;
use crate::rng::GameRng;
use crate::types::Mark;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Who decides a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Moves come from pointer input and are only validated here.
    Human,
    /// Moves are drawn uniformly at random from the empty cells.
    Automated,
}

/// A player bound to one mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    role: Role,
    mark: Mark,
    last_move: Option<Position>,
}

impl Player {
    /// Creates a human player.
    pub fn human(mark: Mark) -> Self {
        Self::new(Role::Human, mark)
    }

    /// Creates an automated player.
    pub fn automated(mark: Mark) -> Self {
        Self::new(Role::Automated, mark)
    }

    /// Creates a player with the given role.
    pub fn new(role: Role, mark: Mark) -> Self {
        Self {
            role,
            mark,
            last_move: None,
        }
    }

    /// Returns the player's role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns the player's mark.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Last cell this player wrote to, cleared on reset.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Picks the cell for this player's next move.
    ///
    /// A human plays `requested` when it names an empty cell and `None`
    /// otherwise. An automated player ignores `requested` and draws from the
    /// empty cells, returning `None` only on a full board.
    #[instrument(skip(self, board, rng), fields(role = ?self.role, mark = %self.mark))]
    pub fn choose_move(
        &self,
        board: &Board,
        requested: Option<Position>,
        rng: &mut GameRng,
    ) -> Option<Position> {
        match self.role {
            Role::Human => requested.filter(|&pos| board.is_empty(pos)),
            Role::Automated => {
                let free = board.empty_positions();
                let choice = rng.choose(&free).copied();
                debug!(free = free.len(), ?choice, "Automated player chose cell");
                choice
            }
        }
    }

    /// Writes this player's mark at `pos` and remembers the move.
    pub fn apply(&mut self, board: &mut Board, pos: Position) {
        board.place(pos, self.mark);
        self.last_move = Some(pos);
    }

    /// Forgets the last move.
    pub(crate) fn clear_last_move(&mut self) {
        self.last_move = None;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.last_move {
            Some(pos) => write!(f, "{{{}; {}}} : {}", pos.row(), pos.col(), self.mark),
            None => write!(f, "{{-; -}} : {}", self.mark),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_takes_requested_empty_cell() {
        let board = Board::new();
        let mut rng = GameRng::new(0);
        let human = Player::human(Mark::X);
        assert_eq!(
            human.choose_move(&board, Some(Position::Center), &mut rng),
            Some(Position::Center)
        );
    }

    #[test]
    fn test_human_rejects_occupied_cell() {
        let mut board = Board::new();
        board.place(Position::Center, Mark::O);
        let mut rng = GameRng::new(0);
        let human = Player::human(Mark::X);
        assert_eq!(human.choose_move(&board, Some(Position::Center), &mut rng), None);
        assert_eq!(human.choose_move(&board, None, &mut rng), None);
    }

    #[test]
    fn test_automated_only_picks_empty_cells() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Mark::X);
        board.place(Position::Center, Mark::X);
        let mut rng = GameRng::new(3);
        let bot = Player::automated(Mark::O);
        for _ in 0..200 {
            let pos = bot.choose_move(&board, None, &mut rng).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_automated_single_free_cell_always_chosen() {
        let mut board = Board::new();
        for pos in Position::ALL {
            if pos != Position::BottomCenter {
                board.place(pos, Mark::X);
            }
        }
        let mut rng = GameRng::new(11);
        let bot = Player::automated(Mark::O);
        for _ in 0..500 {
            assert_eq!(
                bot.choose_move(&board, Some(Position::TopLeft), &mut rng),
                Some(Position::BottomCenter)
            );
        }
    }

    #[test]
    fn test_automated_full_board_has_no_move() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.place(pos, Mark::X);
        }
        let mut rng = GameRng::new(1);
        assert_eq!(Player::automated(Mark::O).choose_move(&board, None, &mut rng), None);
    }

    #[test]
    fn test_automated_reaches_every_free_cell() {
        let board = Board::new();
        let mut rng = GameRng::new(5);
        let bot = Player::automated(Mark::O);
        let mut seen = [false; 9];
        for _ in 0..1000 {
            let pos = bot.choose_move(&board, None, &mut rng).unwrap();
            seen[pos.to_index()] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn test_apply_records_last_move_and_display() {
        let mut board = Board::new();
        let mut human = Player::human(Mark::X);
        assert_eq!(human.to_string(), "{-; -} : X");

        human.apply(&mut board, Position::MiddleRight);
        assert_eq!(board.get(Position::MiddleRight).mark(), Some(Mark::X));
        assert_eq!(human.last_move(), Some(Position::MiddleRight));
        assert_eq!(human.to_string(), "{1; 2} : X");
    }
}
