//! Unit tests for the greedy initial-solution builder.

use sls_pdp::constraints::check_solution_state;
use sls_pdp::initial::build_initial_state;
use sls_pdp::movement::Movement;
use sls_pdp::problem::{Location, Problem, Task, Vehicle};

/// Creates a test problem with two vehicles and three tasks.
fn create_test_problem() -> Problem {
    let locations = vec![
        Location::new(0, 0.0, 0.0),   // home of vehicle 0
        Location::new(1, 20.0, 0.0),  // home of vehicle 1
        Location::new(2, 0.0, 10.0),  // pickup of task 0
        Location::new(3, 10.0, 10.0), // delivery of task 0
        Location::new(4, 20.0, 10.0), // pickup of task 1
        Location::new(5, 30.0, 10.0), // delivery of task 1
        Location::new(6, 5.0, 0.0),   // pickup of task 2
        Location::new(7, 5.0, 5.0),   // delivery of task 2
    ];

    let vehicles = vec![Vehicle::new(0, 0, 10, 1.0), Vehicle::new(1, 1, 8, 1.0)];

    let tasks = vec![
        Task::new(0, 2, 3, 4, 100.0),
        Task::new(1, 4, 5, 6, 100.0),
        Task::new(2, 6, 7, 3, 100.0),
    ];

    Problem::new("TestProblem".to_string(), locations, vehicles, tasks)
}

#[test]
fn test_initial_state_is_valid() {
    let problem = create_test_problem();
    let state = build_initial_state(&problem);

    assert_eq!(check_solution_state(&state, &problem), 0);
}

#[test]
fn test_initial_state_assigns_nearest_vehicle() {
    let problem = create_test_problem();
    let state = build_initial_state(&problem);

    // Task 0 is nearest to vehicle 0's home; task 1 then extends vehicle 0's
    // route (ties broken by vehicle order); task 2 goes to vehicle 1
    assert_eq!(
        state.route(0),
        &[
            Movement::pickup(0),
            Movement::deliver(0),
            Movement::pickup(1),
            Movement::deliver(1),
        ]
    );
    assert_eq!(state.route(1), &[Movement::pickup(2), Movement::deliver(2)]);
}

#[test]
fn test_initial_state_routes_are_pickup_then_deliver() {
    let problem = create_test_problem();
    let state = build_initial_state(&problem);

    for route in state.routes() {
        for pair in route.chunks(2) {
            assert_eq!(pair.len(), 2);
            assert_eq!(pair[0], Movement::pickup(pair[0].task));
            assert_eq!(pair[1], Movement::deliver(pair[0].task));
        }
    }
}

#[test]
fn test_single_task_single_vehicle_cost() {
    // One task at distance 5 from the closer vehicle's home, pickup to
    // delivery distance 3
    let locations = vec![
        Location::new(0, 0.0, 0.0),   // home of vehicle 0
        Location::new(1, 100.0, 0.0), // home of vehicle 1
        Location::new(2, 4.0, 3.0),   // pickup
        Location::new(3, 4.0, 0.0),   // delivery
    ];
    let vehicles = vec![Vehicle::new(0, 0, 10, 1.0), Vehicle::new(1, 1, 10, 1.0)];
    let tasks = vec![Task::new(0, 2, 3, 5, 100.0)];
    let problem = Problem::new("TwoVehiclesOneTask".to_string(), locations, vehicles, tasks);

    let state = build_initial_state(&problem);

    assert_eq!(state.route(0), &[Movement::pickup(0), Movement::deliver(0)]);
    assert!(state.route(1).is_empty());
    assert!((state.cost(&problem) - 8.0).abs() < 1e-6);
}

#[test]
fn test_task_heavier_than_chosen_vehicle_falls_back() {
    // Vehicle 0 is nearest but too small; vehicle 1 can carry the task
    let locations = vec![
        Location::new(0, 0.0, 0.0),
        Location::new(1, 50.0, 0.0),
        Location::new(2, 1.0, 0.0),
        Location::new(3, 2.0, 0.0),
    ];
    let vehicles = vec![Vehicle::new(0, 0, 5, 1.0), Vehicle::new(1, 1, 10, 1.0)];
    let tasks = vec![Task::new(0, 2, 3, 7, 100.0)];
    let problem = Problem::new("Fallback".to_string(), locations, vehicles, tasks);

    let state = build_initial_state(&problem);

    assert!(state.route(0).is_empty());
    assert_eq!(state.route(1), &[Movement::pickup(0), Movement::deliver(0)]);
    assert_eq!(check_solution_state(&state, &problem), 0);
}

#[test]
fn test_undeliverable_task_is_dropped() {
    // A task heavier than every vehicle's capacity is left out of the plan
    let locations = vec![
        Location::new(0, 0.0, 0.0),
        Location::new(1, 1.0, 0.0),
        Location::new(2, 2.0, 0.0),
    ];
    let vehicles = vec![Vehicle::new(0, 0, 5, 1.0)];
    let tasks = vec![Task::new(0, 1, 2, 6, 100.0)];
    let problem = Problem::new("TooHeavy".to_string(), locations, vehicles, tasks);

    let state = build_initial_state(&problem);

    assert!(state.route(0).is_empty());
    assert_eq!(state.cost(&problem), 0.0);
    assert_eq!(check_solution_state(&state, &problem), 0);
}
