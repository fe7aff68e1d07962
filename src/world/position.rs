//! Grid coordinates
//!
//! Integer 2D position used as the key for all spatial lookups.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Sub};

use serde::{Deserialize, Serialize};

/// A position on the map grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to another position
    pub fn distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chebyshev distance (allows diagonal)
    pub fn chebyshev_distance(&self, other: &Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, rhs: Position) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Div<i32> for Position {
    type Output = Position;

    /// Component-wise division, truncating toward zero. The maze carver
    /// relies on `(neighbor - current) / 2` landing on the wall cell
    /// between two rooms that are two cells apart.
    fn div(self, rhs: i32) -> Position {
        Position::new(self.x / rhs, self.y / rhs)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Position::new(3, -2);
        let b = Position::new(1, 4);
        assert_eq!(a + b, Position::new(4, 2));
        assert_eq!(a - b, Position::new(2, -6));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(Position::new(2, -2) / 2, Position::new(1, -1));
        assert_eq!(Position::new(3, -3) / 2, Position::new(1, -1));
    }

    #[test]
    fn test_midpoint_of_carve_step() {
        // Neighbors in the logical maze grid are two cells apart; the
        // midpoint is the wall between them.
        let current = Position::new(4, 6);
        let neighbor = Position::new(4, 4);
        let mid = current + (neighbor - current) / 2;
        assert_eq!(mid, Position::new(4, 5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(7, -1).to_string(), "(7, -1)");
    }
}
