//! Change-task-order operator: re-place a task's pickup and deliver within
//! one vehicle's route.

use crate::constraints::check_vehicle_load;
use crate::movement::Movement;
use crate::problem::Problem;
use crate::solution::SolutionState;

use super::LocalSearch;

impl LocalSearch {
    /// Move the pickup at `pickup_idx` to `pickup_next_idx` and the matching
    /// deliver at `deliver_idx` to `deliver_next_idx` within one vehicle's
    /// route, leaving every other vehicle's chain untouched.
    ///
    /// The deliver is moved first; moving it in front of the pickup shifts
    /// the pickup's index by one, which the removal accounts for. When both
    /// target positions equal the current ones the route comes back
    /// unchanged. Returns `None` when the reordered route violates the
    /// vehicle's load profile.
    #[allow(clippy::too_many_arguments)]
    pub fn change_task_order(
        &self,
        state: &SolutionState,
        problem: &Problem,
        vehicle: usize,
        pickup_idx: usize,
        deliver_idx: usize,
        pickup_next_idx: usize,
        deliver_next_idx: usize,
    ) -> Option<SolutionState> {
        let mut next_movements = state.next_movements();
        let mut first_movements = state.first_movements();
        let mut plan: Vec<Movement> = state.route(vehicle).to_vec();

        let deliver_changing = plan[deliver_idx];
        let pickup_changing = plan[pickup_idx];

        if deliver_idx != deliver_next_idx {
            plan.remove(deliver_idx);
            plan.insert(deliver_next_idx, deliver_changing);
        }
        if pickup_idx != pickup_next_idx {
            if deliver_next_idx <= pickup_idx && deliver_idx != deliver_next_idx {
                plan.remove(pickup_idx + 1);
            } else {
                plan.remove(pickup_idx);
            }
            plan.insert(pickup_next_idx, pickup_changing);
        }

        // Rebuild this vehicle's successor chain from the mutated sequence
        first_movements[vehicle] = Some(plan[0]);
        for pair in plan.windows(2) {
            next_movements[pair[0].id()] = Some(pair[1]);
        }
        next_movements[plan[plan.len() - 1].id()] = None;

        let state = SolutionState::build(next_movements, first_movements);
        if !check_vehicle_load(&state, problem, vehicle) {
            return None;
        }

        Some(state)
    }
}
