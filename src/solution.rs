//! Solution representation: the successor-map state of all vehicle routes.

use crate::movement::{ActionKind, Movement};
use crate::problem::Problem;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::fmt;

/// A complete assignment of movements to vehicles.
///
/// The state is a successor map built from two tables: `next_movements[m]`
/// is the movement performed immediately after movement id `m` by the
/// vehicle carrying it, and `first_movements[v]` is the movement that starts
/// vehicle `v`'s route (`None` for an idle vehicle). The ordered route per
/// vehicle and the 1-based time index of every movement are derived once at
/// construction; the total cost is computed lazily and cached.
///
/// A state is immutable once built. The neighborhood operators copy the two
/// tables, edit the copies and build a fresh state, so no instance is ever
/// aliased or mutated after it has been scored.
#[derive(Clone, Serialize, Deserialize)]
pub struct SolutionState {
    next_movements: Vec<Option<Movement>>,
    first_movements: Vec<Option<Movement>>,
    /// Ordered movement sequence per vehicle, derived from the tables
    routes: Vec<Vec<Movement>>,
    /// 1-based position of each movement id within its route, 0 if unrouted
    time_index: Vec<usize>,
    #[serde(skip)]
    cost: OnceCell<f64>,
}

impl SolutionState {
    /// Build a state from its successor tables, deriving the ordered routes
    /// and the time index.
    ///
    /// `next_movements` is indexed by movement id (length `2 * n_tasks`),
    /// `first_movements` by vehicle id. The operators are responsible for
    /// handing in well-formed tables; a cycle in a successor chain is a
    /// programming error and panics.
    pub fn build(
        next_movements: Vec<Option<Movement>>,
        first_movements: Vec<Option<Movement>>,
    ) -> Self {
        let n_movements = next_movements.len();
        let mut routes = Vec::with_capacity(first_movements.len());
        let mut time_index = vec![0; n_movements];

        for first in &first_movements {
            let mut route = Vec::new();
            let mut next = *first;

            while let Some(movement) = next {
                route.push(movement);
                assert!(
                    route.len() <= n_movements,
                    "cycle in successor chain starting at movement {}",
                    first.unwrap().id()
                );
                next = next_movements[movement.id()];
            }

            for (i, movement) in route.iter().enumerate() {
                time_index[movement.id()] = i + 1;
            }
            routes.push(route);
        }

        SolutionState {
            next_movements,
            first_movements,
            routes,
            time_index,
            cost: OnceCell::new(),
        }
    }

    /// Owned copy of the successor table, for operators to edit.
    pub fn next_movements(&self) -> Vec<Option<Movement>> {
        self.next_movements.clone()
    }

    /// Owned copy of the first-movement table, for operators to edit.
    pub fn first_movements(&self) -> Vec<Option<Movement>> {
        self.first_movements.clone()
    }

    /// First movement of a vehicle's route, `None` if the vehicle is idle.
    pub fn first_movement(&self, vehicle: usize) -> Option<Movement> {
        self.first_movements[vehicle]
    }

    /// Ordered movement sequences, one per vehicle (read-only view).
    pub fn routes(&self) -> &[Vec<Movement>] {
        &self.routes
    }

    /// Ordered movement sequence of one vehicle.
    pub fn route(&self, vehicle: usize) -> &[Movement] {
        &self.routes[vehicle]
    }

    /// 1-based position of a movement within its vehicle's route.
    pub fn time_index_of(&self, movement: Movement) -> usize {
        self.time_index[movement.id()]
    }

    /// Total cost of the state, computed on first access and cached.
    pub fn cost(&self, problem: &Problem) -> f64 {
        *self.cost.get_or_init(|| self.compute_cost(problem))
    }

    /// The per-vehicle plan as `(action, task id)` pairs, ready for an
    /// instruction emitter to turn into concrete travel steps.
    pub fn vehicle_plans(&self) -> Vec<Vec<(ActionKind, usize)>> {
        self.routes
            .iter()
            .map(|route| route.iter().map(|m| (m.kind, m.task)).collect())
            .collect()
    }

    /// Sum over vehicles of the travelled distance times cost per km: from
    /// the vehicle's home to its first pickup, then between the resulting
    /// locations of consecutive movements.
    fn compute_cost(&self, problem: &Problem) -> f64 {
        let mut total_cost = 0.0;

        for vehicle in &problem.vehicles {
            let route = &self.routes[vehicle.id];
            let mut vehicle_distance = match self.first_movements[vehicle.id] {
                Some(first) => problem.get_distance(vehicle.home, first.location(problem)),
                None => 0.0,
            };

            for pair in route.windows(2) {
                vehicle_distance +=
                    problem.get_distance(pair[0].location(problem), pair[1].location(problem));
            }

            total_cost += vehicle_distance * vehicle.cost_per_km;
        }

        total_cost
    }
}

impl PartialEq for SolutionState {
    fn eq(&self, other: &Self) -> bool {
        self.next_movements == other.next_movements
            && self.first_movements == other.first_movements
    }
}

impl fmt::Debug for SolutionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SolutionState:")?;
        match self.cost.get() {
            Some(cost) => writeln!(f, "  Cost: {:.2}", cost)?,
            None => writeln!(f, "  Cost: <not evaluated>")?,
        }

        for (v, route) in self.routes.iter().enumerate() {
            let plan: Vec<String> = route
                .iter()
                .map(|m| match m.kind {
                    ActionKind::Pickup => format!("P{}", m.task),
                    ActionKind::Deliver => format!("D{}", m.task),
                })
                .collect();
            writeln!(f, "  Vehicle {}: [{}]", v, plan.join(", "))?;
        }

        Ok(())
    }
}
