//! 3x3 board storage.

use crate::position::{CELLS, COLS, Position, ROWS};
use crate::rules;
use crate::types::{Cell, Mark};
use serde::{Deserialize, Serialize};

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELLS],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Writes `mark` into an empty cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell is already occupied. Callers validate the target
    /// before placing, so an occupied target means the engine is broken.
    pub fn place(&mut self, pos: Position, mark: Mark) {
        let cell = &mut self.cells[pos.to_index()];
        assert!(
            cell.is_empty(),
            "cannot place {mark} on occupied cell {pos}: {cell:?}"
        );
        *cell = Cell::Occupied(mark);
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Checks whether `mark` holds a complete row, column, or diagonal.
    pub fn has_win(&self, mark: Mark) -> bool {
        rules::has_win(self, mark)
    }

    /// Returns the mark holding a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        rules::check_winner(self)
    }

    /// Number of empty cells.
    pub fn free_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    /// Number of occupied cells.
    pub fn occupied_cell_count(&self) -> usize {
        CELLS - self.free_cell_count()
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_empty(pos))
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                let index = row * COLS + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < COLS - 1 {
                    result.push('|');
                }
            }
            if row < ROWS - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
