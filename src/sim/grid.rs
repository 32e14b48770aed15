//! Grid coordinates and directions
//!
//! Positions are integer cells; the playfield is always square.

use glam::IVec2;
use serde::Serialize;

/// A grid cell (x grows right, y grows down)
pub type Position = IVec2;

/// Cardinal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
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

    /// Unit step for this direction
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Direction of a unit step, if `delta` is one
    pub fn from_delta(delta: IVec2) -> Option<Self> {
        Direction::ALL.into_iter().find(|d| d.delta() == delta)
    }
}

/// True if `pos` lies inside a `size` x `size` grid
#[inline]
pub fn in_bounds(pos: Position, size: i32) -> bool {
    pos.x >= 0 && pos.y >= 0 && pos.x < size && pos.y < size
}

/// Manhattan distance between two cells
#[inline]
pub fn manhattan(a: Position, b: Position) -> i32 {
    (a - b).abs().element_sum()
}

/// Border cells where a carried egg is banked
#[inline]
pub fn is_escape_zone(pos: Position) -> bool {
    pos.x == 0 || pos.y == 0
}

/// Cells eggs may spawn on (never the escape zone, never the far edge)
pub fn interior_cells(size: i32) -> impl Iterator<Item = Position> {
    (1..size - 1).flat_map(move |y| (1..size - 1).map(move |x| IVec2::new(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_eq!(d.delta() + d.opposite().delta(), IVec2::ZERO);
        }
    }

    #[test]
    fn test_bounds() {
        assert!(in_bounds(IVec2::new(0, 0), 10));
        assert!(in_bounds(IVec2::new(9, 9), 10));
        assert!(!in_bounds(IVec2::new(10, 0), 10));
        assert!(!in_bounds(IVec2::new(0, -1), 10));
    }

    #[test]
    fn test_manhattan_and_escape_zone() {
        assert_eq!(manhattan(IVec2::new(1, 1), IVec2::new(4, 3)), 5);
        assert!(is_escape_zone(IVec2::new(0, 5)));
        assert!(is_escape_zone(IVec2::new(5, 0)));
        assert!(!is_escape_zone(IVec2::new(9, 9)));
    }

    #[test]
    fn test_interior_cells() {
        let cells: Vec<_> = interior_cells(4).collect();
        assert_eq!(cells.len(), 4);
        assert!(cells.iter().all(|c| c.x >= 1 && c.y >= 1 && c.x <= 2 && c.y <= 2));
        assert_eq!(Direction::from_delta(IVec2::new(0, 1)), Some(Direction::Down));
        assert_eq!(Direction::from_delta(IVec2::new(1, 1)), None);
    }
}
