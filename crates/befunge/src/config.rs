//! Host-supplied run configuration.

use befunge_eval::{Engine, EngineConfig, RandomDirections};
use serde::{Deserialize, Serialize};

/// How a single run is set up.
///
/// Every field is optional; an empty JSON object gives an entropy-seeded
/// run with no step limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    /// Seed for `?`. The same seed reproduces the same run.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Stop with an error after this many steps.
    #[serde(default)]
    pub step_limit: Option<u64>,
}

impl RunConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    pub(crate) fn engine(&self, program: &str) -> Engine<RandomDirections> {
        let directions = match self.seed {
            Some(seed) => RandomDirections::seeded(seed),
            None => RandomDirections::from_entropy(),
        };
        Engine::with_directions(program, directions).with_config(EngineConfig {
            step_limit: self.step_limit,
        })
    }
}
