//! Befunge execution engine.
//!
//! Runs a program grid with a single instruction pointer, a stack of
//! signed integers that reads as zero when empty, and the `g`/`p`
//! opcodes that let a program rewrite its own grid while it runs.

pub mod cursor;
pub mod engine;
pub mod error;
pub mod opcode;
pub mod random;
pub mod stack;

pub use cursor::Cursor;
pub use engine::{Engine, EngineConfig, StepOutcome};
pub use error::{EvalError, EvalResult};
pub use opcode::Opcode;
pub use random::{DirectionSource, FixedDirections, RandomDirections};
pub use stack::Stack;
