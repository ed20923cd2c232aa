//! Configuration parameters for the stochastic local search.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunable settings of the search loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Probability that an iteration attempts a mutation (the rest keep the
    /// current state); 0 returns the initial greedy solution unchanged
    pub sls_probability: f64,
    /// Maximum number of loop iterations
    pub max_loops: u32,
    /// Number of consecutive same-cost iterations treated as stagnation
    pub max_cost_repetition: u32,
    /// Optional wall-clock budget for one search run
    pub time_limit: Option<Duration>,
    /// Seed for the random source; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            sls_probability: 0.4,
            max_loops: 10_000,
            max_cost_repetition: 1_000,
            time_limit: None,
            seed: None,
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Config::default()
    }

    /// Set the mutation probability.
    pub fn with_sls_probability(mut self, probability: f64) -> Self {
        self.sls_probability = probability;
        self
    }

    /// Set the maximum number of loop iterations.
    pub fn with_max_loops(mut self, loops: u32) -> Self {
        self.max_loops = loops;
        self
    }

    /// Set the stagnation ceiling.
    pub fn with_max_cost_repetition(mut self, repetitions: u32) -> Self {
        self.max_cost_repetition = repetitions;
        self
    }

    /// Set the time limit.
    pub fn with_time_limit(mut self, duration: Duration) -> Self {
        self.time_limit = Some(duration);
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
