//! Neighborhood generation and selection for the stochastic local search.

pub mod change_vehicle;
pub mod reorder;

use crate::constraints::{check_solution_state, check_vehicle_load};
use crate::movement::ActionKind;
use crate::problem::Problem;
use crate::solution::SolutionState;
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generates and selects neighbor states.
///
/// Owns the random source used for vehicle picking and tie-breaking; seeding
/// it makes whole search runs reproducible.
pub struct LocalSearch {
    rng: ChaCha8Rng,
}

impl LocalSearch {
    /// Create a new local search instance, seeded when a seed is given.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        LocalSearch { rng }
    }

    /// Generate the full neighbor set of a state.
    ///
    /// Picks one vehicle uniformly at random among those carrying at least
    /// one task, then emits: one change-vehicle neighbor per other vehicle
    /// able to carry the picked vehicle's first task, each followed by all
    /// re-placements of that task inside its new route, plus all reorderings
    /// of every task within the picked vehicle's own route. Returns an empty
    /// set when no vehicle carries a task.
    pub fn choose_neighbours(
        &mut self,
        state: &SolutionState,
        problem: &Problem,
    ) -> Vec<SolutionState> {
        let mut neighbours = Vec::new();

        let loaded: Vec<usize> = problem
            .vehicles
            .iter()
            .map(|v| v.id)
            .filter(|&v| state.first_movement(v).is_some())
            .collect();
        if loaded.is_empty() {
            return neighbours;
        }
        let picked = loaded[self.rng.gen_range(0..loaded.len())];

        // Change-vehicle operator: move the picked vehicle's first task to
        // the front of every other vehicle that can carry it
        let first = state.first_movement(picked).unwrap();
        let weight = problem.tasks[first.task].weight;
        for vehicle in &problem.vehicles {
            if vehicle.id == picked || weight > vehicle.capacity {
                continue;
            }

            let moved = self.change_vehicle(state, picked, vehicle.id);
            let receiver_len = moved.route(vehicle.id).len();
            if check_vehicle_load(&moved, problem, vehicle.id) {
                neighbours.push(moved.clone());
            }

            // All other placements of the moved task within its new route
            for i in 2..receiver_len.saturating_sub(1) {
                for j in i + 1..receiver_len {
                    if let Some(reordered) =
                        self.change_task_order(&moved, problem, vehicle.id, 0, 1, i, j)
                    {
                        neighbours.push(reordered);
                    }
                }
            }
        }

        // Change-task-order operator over the picked vehicle's own route
        let plan = state.route(picked).to_vec();
        let size = plan.len();
        if size > 2 {
            for (k, movement) in plan.iter().enumerate() {
                if movement.kind != ActionKind::Pickup {
                    continue;
                }

                // The matching deliver is somewhere after the pickup; a valid
                // state always has it in the same route
                let deliver_idx = plan[k + 1..]
                    .iter()
                    .position(|m| m.task == movement.task)
                    .map(|offset| k + 1 + offset)
                    .unwrap_or_else(|| {
                        panic!("no matching deliver for task {} in route {}", movement.task, picked)
                    });

                for (i, j) in (0..size).tuple_combinations() {
                    if i == k && j == deliver_idx {
                        continue;
                    }
                    if let Some(reordered) =
                        self.change_task_order(state, problem, picked, k, deliver_idx, i, j)
                    {
                        neighbours.push(reordered);
                    }
                }
            }
        }

        neighbours
    }

    /// Select the cheapest valid neighbor, breaking cost ties uniformly at
    /// random. Returns `None` when every neighbor fails validation.
    pub fn local_choice(
        &mut self,
        neighbours: Vec<SolutionState>,
        problem: &Problem,
    ) -> Option<SolutionState> {
        let mut best_cost = f64::MAX;
        let mut best: Vec<SolutionState> = Vec::new();

        for neighbour in neighbours {
            let cost = neighbour.cost(problem);
            if cost <= best_cost {
                if check_solution_state(&neighbour, problem) != 0 {
                    continue;
                }
                if cost < best_cost {
                    best.clear();
                    best_cost = cost;
                }
                best.push(neighbour);
            }
        }

        if best.is_empty() {
            return None;
        }
        let choice = self.rng.gen_range(0..best.len());
        Some(best.swap_remove(choice))
    }
}
