//! Structured run report for hosts that want more than the output text.

use befunge_eval::{DirectionSource, Engine, EvalError};
use befunge_types::Position;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// The outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// True when the program reached `@`.
    pub success: bool,
    /// Everything printed, in emission order.
    pub output: String,
    /// Loop iterations taken, drift steps included.
    pub steps: u64,
    /// Stack contents at the end, bottom first.
    pub final_stack: Vec<i64>,
    /// Where the cursor stopped.
    pub final_position: Position,
    /// The grid at the end, one string per row, including `p` writes.
    pub final_grid: Vec<String>,
    /// Lowercase hex SHA-256 of the program text.
    pub source_hash: String,
    /// Why the run stopped early, if it did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RunResult {
    pub(crate) fn from_engine<R: DirectionSource>(
        program: &str,
        engine: &mut Engine<R>,
        error: Option<EvalError>,
    ) -> Self {
        Self {
            success: error.is_none(),
            output: engine.take_output(),
            steps: engine.steps(),
            final_stack: engine.stack().as_slice().to_vec(),
            final_position: engine.cursor().position,
            final_grid: engine.grid().rows().map(|row| row.iter().collect()).collect(),
            source_hash: source_hash(program),
            error: error.map(|e| e.to_string()),
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Lowercase hex SHA-256 of `program`.
pub fn source_hash(program: &str) -> String {
    Sha256::digest(program.as_bytes())
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect()
}
