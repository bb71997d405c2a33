//! Stateless board rendering.

use crate::geometry::Grid;
use egui::{Color32, CornerRadius, Painter, Rect, Stroke};
use noughts_core::{Cell, Game, GameStatus, Mark, Position};

/// Fill color of a cell.
pub const CELL_FILL: Color32 = Color32::from_rgb(180, 180, 180);
/// Color of the grid lines between cells.
pub const OUTLINE: Color32 = Color32::WHITE;
/// Color of an X.
pub const CROSS: Color32 = Color32::from_rgb(255, 0, 0);
/// Color of an O.
pub const NOUGHT: Color32 = Color32::from_rgb(0, 0, 255);

/// Width of the outline drawn around each cell.
const OUTLINE_WIDTH: f32 = 2.0;
/// Gap between a mark and the cell edge.
const MARK_INSET: f32 = 10.0;

/// Draws every cell of the board.
pub fn draw_board(painter: &Painter, grid: &Grid, game: &Game) {
    painter.rect_filled(board_rect(grid), CornerRadius::ZERO, OUTLINE);
    for pos in Position::ALL {
        draw_cell(painter, grid.cell_rect(pos), game.cell(pos));
    }
}

fn board_rect(grid: &Grid) -> Rect {
    grid.cell_rect(Position::TopLeft)
        .union(grid.cell_rect(Position::BottomRight))
}

fn draw_cell(painter: &Painter, rect: Rect, cell: Cell) {
    painter.rect_filled(rect.shrink(OUTLINE_WIDTH / 2.0), CornerRadius::ZERO, CELL_FILL);

    match cell {
        Cell::Empty => {}
        Cell::Occupied(Mark::X) => {
            let inner = rect.shrink(MARK_INSET);
            let stroke = Stroke::new(1.0, CROSS);
            painter.line_segment([inner.left_top(), inner.right_bottom()], stroke);
            painter.line_segment([inner.left_bottom(), inner.right_top()], stroke);
        }
        Cell::Occupied(Mark::O) => {
            let radius = rect.width() / 2.0 - MARK_INSET;
            painter.circle_filled(rect.center(), radius, NOUGHT);
            painter.circle_stroke(rect.center(), radius, Stroke::new(1.0, Color32::WHITE));
        }
    }
}

/// Text of the result notice for a finished game.
pub fn result_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(Mark::X) => Some("X wins!"),
        GameStatus::Won(Mark::O) => Some("O wins!"),
        GameStatus::Draw => Some("Draw!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_message() {
        assert_eq!(result_message(GameStatus::InProgress), None);
        assert_eq!(result_message(GameStatus::Won(Mark::X)), Some("X wins!"));
        assert_eq!(result_message(GameStatus::Won(Mark::O)), Some("O wins!"));
        assert_eq!(result_message(GameStatus::Draw), Some("Draw!"));
    }
}
