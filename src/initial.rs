//! Greedy construction of the first solution state.

use crate::constraints::check_solution_state;
use crate::movement::Movement;
use crate::problem::Problem;
use crate::solution::SolutionState;
use log::{debug, warn};

/// Build an initial state by greedy nearest insertion.
///
/// Tasks are assigned in input order to the vehicle whose route currently
/// ends closest to the task's pickup city (the home city for an empty
/// route, otherwise the delivery city of the last appended task). A task
/// too heavy for the chosen vehicle falls back to the first vehicle that
/// can carry it; a task no vehicle can carry is dropped with a warning.
/// Each vehicle's route picks up and immediately delivers its tasks in
/// assignment order, without interleaving.
pub fn build_initial_state(problem: &Problem) -> SolutionState {
    let mut distributed: Vec<Vec<usize>> = vec![Vec::new(); problem.vehicles.len()];

    for task in &problem.tasks {
        let mut chosen: Option<usize> = None;
        let mut shortest_distance = f64::MAX;

        for vehicle in &problem.vehicles {
            let assigned = &distributed[vehicle.id];
            let last_location = match assigned.last() {
                Some(&last_task) => problem.tasks[last_task].delivery,
                None => vehicle.home,
            };
            let distance = problem.get_distance(last_location, task.pickup);
            if distance < shortest_distance {
                shortest_distance = distance;
                chosen = Some(vehicle.id);
            }
        }

        // If the task is too heavy for the nearest vehicle, fall back to the
        // first vehicle that can carry it
        if let Some(v) = chosen {
            if problem.vehicles[v].capacity < task.weight {
                chosen = problem
                    .vehicles
                    .iter()
                    .find(|vehicle| task.weight <= vehicle.capacity)
                    .map(|vehicle| vehicle.id);
            }
        }

        match chosen {
            Some(v) => distributed[v].push(task.id),
            None => warn!("no vehicle can carry task {}, dropping it", task.id),
        }
    }

    let mut next_movements: Vec<Option<Movement>> = vec![None; problem.movement_count()];
    let mut first_movements: Vec<Option<Movement>> = vec![None; problem.vehicles.len()];

    for vehicle in &problem.vehicles {
        let assigned = &distributed[vehicle.id];
        if assigned.is_empty() {
            continue;
        }

        first_movements[vehicle.id] = Some(Movement::pickup(assigned[0]));
        let mut previous = Movement::pickup(assigned[0]);
        for &task in &assigned[1..] {
            let deliver = Movement::deliver(previous.task);
            next_movements[previous.id()] = Some(deliver);
            let pickup = Movement::pickup(task);
            next_movements[deliver.id()] = Some(pickup);
            previous = pickup;
        }
        let final_deliver = Movement::deliver(previous.task);
        next_movements[previous.id()] = Some(final_deliver);
    }

    let state = SolutionState::build(next_movements, first_movements);

    let errors = check_solution_state(&state, problem);
    if errors != 0 {
        warn!("initial state violates {} constraints", errors);
    }
    debug!("initial state cost: {:.2}", state.cost(problem));

    state
}
