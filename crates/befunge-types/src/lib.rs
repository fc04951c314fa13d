//! Shared types for the Befunge engine.
//!
//! This crate defines the program grid, cursor coordinates, headings,
//! and the error types used by the evaluator and the host-facing crate.

mod direction;
mod error;
mod grid;
mod position;

pub use direction::Direction;
pub use error::GridError;
pub use grid::Grid;
pub use position::Position;

/// Result type used for grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
