//! Runtime error types for the Befunge evaluator.
//!
//! Malformed programs never raise: stack underflow and out-of-bounds
//! access degrade into defined values inside the opcodes. The only
//! error is the host-imposed step budget running out.

use befunge_types::Position;
use thiserror::Error;

/// Evaluation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The configured step budget ran out before `@` was reached.
    #[error("step limit of {limit} exceeded at {position}")]
    StepLimitExceeded { limit: u64, position: Position },
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
