//! Befunge engine entry points.
//!
//! ```text
//! program text → Grid → Engine (advance → fetch → dispatch)* → output text
//! ```
//!
//! Hosts own reading the program and printing the result; everything
//! here takes the program as a string and hands back the output.

mod config;
mod result;

pub use befunge_eval::{
    DirectionSource, Engine, EngineConfig, EvalError, EvalResult, FixedDirections,
    RandomDirections,
};
pub use befunge_types::{Direction, Grid, Position};
pub use config::RunConfig;
pub use result::{source_hash, RunResult};

use tracing::debug;

/// Run a program to completion and return everything it printed.
///
/// `?` draws from OS entropy. There is no step limit: a program that
/// never reaches `@` never returns.
pub fn run(program: &str) -> String {
    run_with_directions(program, RandomDirections::from_entropy())
}

/// Like [`run`], with the headings for `?` supplied by the caller.
pub fn run_with_directions<R: DirectionSource>(program: &str, directions: R) -> String {
    let mut engine = Engine::with_directions(program, directions);
    while !engine.is_halted() {
        engine.step();
    }
    engine.take_output()
}

/// Run under a [`RunConfig`]: optional seed and step limit.
pub fn run_with_config(program: &str, config: &RunConfig) -> EvalResult<String> {
    config.engine(program).run()
}

/// Run under a [`RunConfig`] and return a structured report.
///
/// Never fails: a step-limit stop is reported with `success: false`
/// and the output produced up to that point.
pub fn run_to_result(program: &str, config: &RunConfig) -> RunResult {
    let mut engine = config.engine(program);
    let outcome = engine.run();
    debug!(
        success = outcome.is_ok(),
        steps = engine.steps(),
        step_limit = ?engine.config().step_limit,
        "run finished"
    );
    RunResult::from_engine(program, &mut engine, outcome.err())
}
