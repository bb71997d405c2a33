//! Mapping between window points and board cells.

use egui::{Pos2, Rect, Vec2, pos2};
use noughts_core::Position;

/// A square grid of fixed-size cells anchored at `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    origin: Pos2,
    cell_size: f32,
}

impl Grid {
    /// Creates a grid whose top-left corner is `origin`.
    pub fn new(origin: Pos2, cell_size: f32) -> Self {
        Self { origin, cell_size }
    }

    /// Translates a point to `(row, col)` by whole cells.
    ///
    /// Points left of or above the origin give `None`. Points past the last
    /// row or column still map to a coordinate; the game rejects those.
    pub fn locate(&self, point: Pos2) -> Option<(usize, usize)> {
        let local = point - self.origin;
        if local.x < 0.0 || local.y < 0.0 || !local.x.is_finite() || !local.y.is_finite() {
            return None;
        }
        let row = (local.y / self.cell_size).floor() as usize;
        let col = (local.x / self.cell_size).floor() as usize;
        Some((row, col))
    }

    /// Screen rectangle covered by `pos`.
    pub fn cell_rect(&self, pos: Position) -> Rect {
        let min = pos2(
            self.origin.x + pos.col() as f32 * self.cell_size,
            self.origin.y + pos.row() as f32 * self.cell_size,
        );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_cell_interiors() {
        let grid = Grid::new(Pos2::ZERO, 100.0);
        assert_eq!(grid.locate(pos2(50.0, 50.0)), Some((0, 0)));
        assert_eq!(grid.locate(pos2(150.0, 20.0)), Some((0, 1)));
        assert_eq!(grid.locate(pos2(20.0, 250.0)), Some((2, 0)));
        assert_eq!(grid.locate(pos2(299.0, 299.0)), Some((2, 2)));
    }

    #[test]
    fn test_locate_edges_belong_to_next_cell() {
        let grid = Grid::new(Pos2::ZERO, 100.0);
        assert_eq!(grid.locate(pos2(0.0, 0.0)), Some((0, 0)));
        assert_eq!(grid.locate(pos2(100.0, 99.9)), Some((0, 1)));
        assert_eq!(grid.locate(pos2(99.9, 200.0)), Some((2, 0)));
    }

    #[test]
    fn test_locate_outside() {
        let grid = Grid::new(Pos2::ZERO, 100.0);
        assert_eq!(grid.locate(pos2(-1.0, 50.0)), None);
        assert_eq!(grid.locate(pos2(50.0, -0.5)), None);
        assert_eq!(grid.locate(pos2(300.0, 0.0)), Some((0, 3)));
    }

    #[test]
    fn test_locate_respects_origin() {
        let grid = Grid::new(pos2(10.0, 20.0), 50.0);
        assert_eq!(grid.locate(pos2(5.0, 30.0)), None);
        assert_eq!(grid.locate(pos2(65.0, 125.0)), Some((2, 1)));
    }

    #[test]
    fn test_cell_rect() {
        let grid = Grid::new(pos2(10.0, 10.0), 100.0);
        let rect = grid.cell_rect(Position::MiddleRight);
        assert_eq!(rect.min, pos2(210.0, 110.0));
        assert_eq!(rect.max, pos2(310.0, 210.0));
    }
}
