//! Constraint checks for solution states.
//!
//! All checks are pure functions over an immutable [`SolutionState`]; they
//! report violations as an error count and never mutate anything, so calling
//! them twice on the same state always yields the same result.

use crate::movement::ActionKind;
use crate::problem::Problem;
use crate::solution::SolutionState;
use std::collections::{HashMap, HashSet};

/// Verify all structural and capacity constraints of a state.
///
/// Returns the number of violations found. The running-load check
/// short-circuits: the first overflow or underflow anywhere stops the scan
/// and returns immediately with a single additional error, so error counts
/// stay deterministic regardless of how broken the rest of the state is.
pub fn check_solution_state(state: &SolutionState, problem: &Problem) -> usize {
    let mut errors = 0;

    for vehicle in &problem.vehicles {
        let route = state.route(vehicle.id);

        if let Some(first) = state.first_movement(vehicle.id) {
            // The first movement of a route must be a pickup at time 1
            if first.kind != ActionKind::Pickup {
                errors += 1;
            }
            if state.time_index_of(first) != 1 {
                errors += 1;
            }
        }

        let mut occurrences: HashMap<usize, u32> = HashMap::new();
        let mut current_load: i64 = 0;

        for (position, movement) in route.iter().enumerate() {
            // Time indices form a contiguous ascending sequence from 1
            if state.time_index_of(*movement) != position + 1 {
                errors += 1;
            }

            match movement.kind {
                ActionKind::Pickup => {
                    occurrences.insert(movement.task, 1);
                    current_load += i64::from(problem.tasks[movement.task].weight);
                    if current_load > i64::from(vehicle.capacity) {
                        return errors + 1;
                    }
                }
                ActionKind::Deliver => {
                    if let Some(count) = occurrences.get_mut(&movement.task) {
                        *count += 1;
                    }
                    current_load -= i64::from(problem.tasks[movement.task].weight);
                    if current_load < 0 {
                        return errors + 1;
                    }
                }
            }
        }

        // Every task touched by this vehicle must be picked up before being
        // delivered, both within this route
        for count in occurrences.values() {
            if *count != 2 {
                errors += 1;
            }
        }

        // A vehicle ends its route empty
        if current_load != 0 {
            errors += 1;
        }
    }

    errors += check_movements_done_once(state);

    errors
}

/// Capacity check for a single vehicle: the running load never exceeds the
/// capacity, never goes negative and returns to zero at the end.
///
/// Used by operators that only perturb one vehicle's route, where a full
/// [`check_solution_state`] pass would be wasted work.
pub fn check_vehicle_load(state: &SolutionState, problem: &Problem, vehicle: usize) -> bool {
    let capacity = i64::from(problem.vehicles[vehicle].capacity);
    let mut current_load: i64 = 0;

    for movement in state.route(vehicle) {
        match movement.kind {
            ActionKind::Pickup => {
                current_load += i64::from(problem.tasks[movement.task].weight);
                if current_load > capacity {
                    return false;
                }
            }
            ActionKind::Deliver => {
                current_load -= i64::from(problem.tasks[movement.task].weight);
                if current_load < 0 {
                    return false;
                }
            }
        }
    }

    current_load == 0
}

/// Each movement occurs exactly once across all vehicle routes.
fn check_movements_done_once(state: &SolutionState) -> usize {
    let mut total = 0;
    let mut seen = HashSet::new();

    for route in state.routes() {
        total += route.len();
        seen.extend(route.iter().map(|m| m.id()));
    }

    if seen.len() != total {
        1
    } else {
        0
    }
}
