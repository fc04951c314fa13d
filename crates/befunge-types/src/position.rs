use crate::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell coordinate on the program grid.
///
/// Both axes are 0-based and signed: the cursor is allowed to wander
/// into negative territory and come back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i64,
    pub col: i64,
}

impl Position {
    /// Create a new position.
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// The top-left cell.
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// The neighbouring position one cell away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row.wrapping_add(dr), self.col.wrapping_add(dc))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row, self.col)
    }
}
