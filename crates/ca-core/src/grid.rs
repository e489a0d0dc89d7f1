//! Battlefield grid primitives.
//!
//! The arena floor is a fixed 7x11 rectangle. Rows grow downward and
//! columns grow rightward; all distances are Manhattan.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::{GRID_COLS, GRID_ROWS};

/// One tile on the battlefield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Nearest in-bounds tile.
    pub fn clamped(self) -> Self {
        Self {
            row: self.row.clamp(0, GRID_ROWS - 1),
            col: self.col.clamp(0, GRID_COLS - 1),
        }
    }

    pub fn in_bounds(self) -> bool {
        (0..GRID_ROWS).contains(&self.row) && (0..GRID_COLS).contains(&self.col)
    }

    /// Manhattan distance to another tile.
    pub fn distance(self, other: Position) -> i32 {
        (self.row - other.row).abs() + (self.col - other.col).abs()
    }

    /// The tile one step in `dir`. Not clamped; may leave the grid.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// In-bounds orthogonal neighbors, in `Direction::ALL` order.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        Direction::ALL
            .into_iter()
            .map(move |d| self.step(d))
            .filter(|p| p.in_bounds())
    }
}

/// Orthogonal movement directions.
///
/// `ALL` fixes the scan order used by pathfinding and the enemy AI, so
/// tie-breaks between equally good tiles are reproducible.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Row/column delta for this direction.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pulls_back_inside() {
        assert_eq!(Position::new(-3, 4).clamped(), Position::new(0, 4));
        assert_eq!(Position::new(2, 99).clamped(), Position::new(2, GRID_COLS - 1));
        assert_eq!(Position::new(99, -1).clamped(), Position::new(GRID_ROWS - 1, 0));
        let inside = Position::new(3, 5);
        assert_eq!(inside.clamped(), inside);
    }

    #[test]
    fn distance_is_manhattan() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert_eq!(a.distance(b), 7);
        assert_eq!(b.distance(a), 7);
        assert_eq!(a.distance(a), 0);
    }

    #[test]
    fn step_follows_deltas() {
        let p = Position::new(3, 5);
        assert_eq!(p.step(Direction::Up), Position::new(2, 5));
        assert_eq!(p.step(Direction::Down), Position::new(4, 5));
        assert_eq!(p.step(Direction::Left), Position::new(3, 4));
        assert_eq!(p.step(Direction::Right), Position::new(3, 6));
    }

    #[test]
    fn neighbors_skip_out_of_bounds() {
        let corner = Position::new(0, 0);
        let n: Vec<_> = corner.neighbors().collect();
        assert_eq!(n, vec![Position::new(1, 0), Position::new(0, 1)]);

        let center = Position::new(3, 5);
        assert_eq!(center.neighbors().count(), 4);
    }

    #[test]
    fn neighbor_order_is_fixed() {
        let p = Position::new(3, 5);
        let n: Vec<_> = p.neighbors().collect();
        assert_eq!(
            n,
            vec![
                Position::new(2, 5),
                Position::new(4, 5),
                Position::new(3, 4),
                Position::new(3, 6),
            ]
        );
    }
}
