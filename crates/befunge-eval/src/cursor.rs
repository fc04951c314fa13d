//! The instruction pointer.

use befunge_types::{Direction, Position};

/// Position, heading and the two one-shot execution modes.
///
/// Holds coordinates only, never a copy of grid contents, so a `put`
/// is visible the next time the cursor fetches that cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub position: Position,
    pub direction: Direction,
    /// Fetched cells are pushed as code points until the next `"`.
    pub string_mode: bool,
    /// The next in-bounds cell is discarded without being looked at.
    pub skip_next: bool,
}

impl Cursor {
    /// A cursor parked one cell left of the origin, heading right.
    ///
    /// The first `advance()` lands on `(0, 0)`.
    pub fn new() -> Self {
        Self {
            position: Position::new(0, -1),
            direction: Direction::Right,
            string_mode: false,
            skip_next: false,
        }
    }

    /// Move exactly one cell in the current heading. No wrap-around.
    pub fn advance(&mut self) {
        self.position = self.position.step(self.direction);
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}
