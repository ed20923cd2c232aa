//! # SLS-PDP
//!
//! A stochastic local search optimizer for the capacitated
//! pickup-and-delivery problem: assign a fleet of vehicles to a set of
//! pickup/delivery tasks so as to minimize total travel cost.
//!
//! A greedy builder produces a first assignment; the search then repeatedly
//! derives neighbor states through two route-mutation operators (handing a
//! task to another vehicle, re-placing a task's pickup and deliver within a
//! route), keeps only states that pass the constraint checks, and walks to
//! the cheapest one while tracking the best state ever seen. The loop is
//! time-boxed and stops early on stagnation, so it can be used as an anytime
//! planner.

pub mod config;
pub mod constraints;
pub mod initial;
pub mod local_search;
pub mod movement;
pub mod problem;
pub mod solution;
pub mod utils;

use crate::config::Config;
use crate::initial::build_initial_state;
use crate::local_search::LocalSearch;
use crate::problem::Problem;
use crate::solution::SolutionState;

use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};

/// The main structure that orchestrates the stochastic local search.
pub struct SlsAlgorithm {
    pub problem: Problem,
    pub config: Config,
    pub best_state: Option<SolutionState>,
    pub run_time: Duration,
    pub iterations: u32,
    local_search: LocalSearch,
    rng: ChaCha8Rng,
    start_time: Instant,
}

impl SlsAlgorithm {
    /// Create a new search instance for the given problem and configuration.
    pub fn new(problem: Problem, config: Config) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        SlsAlgorithm {
            problem,
            // Derive a distinct stream so the coin flips and the neighbor
            // tie-breaks are not correlated
            local_search: LocalSearch::new(config.seed.map(|seed| seed ^ 1)),
            config,
            best_state: None,
            run_time: Duration::from_secs(0),
            iterations: 0,
            rng,
            start_time: Instant::now(),
        }
    }

    /// Build the greedy initial state and install it as the incumbent.
    pub fn initialize(&mut self) {
        self.best_state = Some(build_initial_state(&self.problem));
    }

    /// Run the search until a termination criterion is met and return the
    /// best state seen.
    ///
    /// Never fails: with a zero mutation probability, an exhausted time
    /// budget or no improving neighbor, the initial greedy state comes back
    /// unchanged.
    pub fn run(&mut self) -> &SolutionState {
        self.start_time = Instant::now();
        self.iterations = 0;

        self.initialize();
        let mut current = self
            .best_state
            .clone()
            .expect("initialize always produces a state");

        let mut overall_best = current.clone();
        let mut overall_best_cost = current.cost(&self.problem);
        let mut best_cost = overall_best_cost;
        let mut cost_repetition = 0;

        // The deadline margin grows to the worst iteration seen plus slack,
        // so a slow iteration cannot push the loop past its budget twice
        let mut safety_margin = Duration::from_millis(1000);

        let probability = self.config.sls_probability;
        if probability > 0.0 && self.problem.tasks.len() > 1 {
            while self.iterations < self.config.max_loops
                && cost_repetition < self.config.max_cost_repetition
                && self.within_deadline(safety_margin)
            {
                let iteration_start = Instant::now();
                self.iterations += 1;

                // An iteration mutates only when the coin flip allows it; a
                // skipped flip still consumes the loop budget
                let r = self.rng.gen_range(0..100);
                if f64::from(r) < probability * 100.0 {
                    let neighbours = self.local_search.choose_neighbours(&current, &self.problem);
                    if neighbours.is_empty() {
                        debug!("no neighbours left, search converged");
                        break;
                    }

                    if let Some(selected) = self.local_search.local_choice(neighbours, &self.problem)
                    {
                        current = selected;
                    }

                    let new_cost = current.cost(&self.problem);
                    if new_cost < overall_best_cost {
                        debug!(
                            "iteration {}: new incumbent cost {:.2}",
                            self.iterations, new_cost
                        );
                        overall_best_cost = new_cost;
                        overall_best = current.clone();
                    }

                    if new_cost == best_cost {
                        cost_repetition += 1;
                    } else {
                        cost_repetition = 0;
                    }
                    best_cost = new_cost;
                }

                let iteration_time = iteration_start.elapsed();
                if iteration_time > safety_margin {
                    safety_margin = iteration_time + Duration::from_millis(1000);
                }
            }
        }

        self.run_time = self.start_time.elapsed();
        debug!(
            "search finished after {} iterations, best cost {:.2}",
            self.iterations, overall_best_cost
        );

        self.best_state = Some(overall_best);
        self.best_state.as_ref().unwrap()
    }

    /// Whether another iteration fits into the time budget, leaving the
    /// safety margin untouched.
    fn within_deadline(&self, safety_margin: Duration) -> bool {
        match self.config.time_limit {
            Some(limit) => self.start_time.elapsed() + safety_margin < limit,
            None => true,
        }
    }
}
