use crate::Position;
use thiserror::Error;

/// Errors raised by direct grid access.
///
/// The evaluator never surfaces these to a running program: an
/// out-of-bounds `put` degrades into a no-op at the opcode level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// The position does not name an existing cell.
    #[error("position {position} is outside the grid")]
    OutOfBounds { position: Position },
}
