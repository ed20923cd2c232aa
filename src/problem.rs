//! Problem definition and data structures for the pickup-and-delivery problem.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

/// A location (city) in the problem, used only to derive the distance matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

impl Location {
    /// Create a new location.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Location { id, x, y }
    }

    /// Calculate the Euclidean distance between two locations.
    pub fn distance(&self, other: &Location) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// A transport task: pick up a load in one city and deliver it in another.
///
/// Tasks are immutable; ids are assigned by the loader as a dense `0..n`
/// range and are never changed by the optimizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: usize,
    /// Index of the pickup location
    pub pickup: usize,
    /// Index of the delivery location
    pub delivery: usize,
    pub weight: u32,
    pub reward: f64,
}

impl Task {
    /// Create a new task.
    pub fn new(id: usize, pickup: usize, delivery: usize, weight: u32, reward: f64) -> Self {
        Task {
            id,
            pickup,
            delivery,
            weight,
            reward,
        }
    }
}

/// A vehicle of the fleet. The `id` doubles as a dense array index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: usize,
    /// Index of the home (current) location
    pub home: usize,
    pub capacity: u32,
    pub cost_per_km: f64,
}

impl Vehicle {
    /// Create a new vehicle.
    pub fn new(id: usize, home: usize, capacity: u32, cost_per_km: f64) -> Self {
        Vehicle {
            id,
            home,
            capacity,
            cost_per_km,
        }
    }
}

/// A pickup-and-delivery problem instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub name: String,
    pub locations: Vec<Location>,
    pub vehicles: Vec<Vehicle>,
    pub tasks: Vec<Task>,
    pub distance_matrix: Vec<Vec<f64>>,
}

impl Problem {
    /// Create a new problem instance, precomputing the distance matrix.
    pub fn new(
        name: String,
        locations: Vec<Location>,
        vehicles: Vec<Vehicle>,
        tasks: Vec<Task>,
    ) -> Self {
        let distance_matrix = Self::compute_distance_matrix(&locations);

        Problem {
            name,
            locations,
            vehicles,
            tasks,
            distance_matrix,
        }
    }

    /// Distance between two location indices.
    pub fn get_distance(&self, from: usize, to: usize) -> f64 {
        self.distance_matrix[from][to]
    }

    /// Total number of movements (one pickup and one deliver per task).
    pub fn movement_count(&self) -> usize {
        self.tasks.len() * 2
    }

    /// Generate the full distance matrix for all locations.
    fn compute_distance_matrix(locations: &[Location]) -> Vec<Vec<f64>> {
        let n = locations.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for i in 0..n {
            for j in 0..n {
                if i != j {
                    matrix[i][j] = locations[i].distance(&locations[j]);
                }
            }
        }

        matrix
    }

    /// Load a problem from a file.
    ///
    /// Format: a name line, a `n_locations n_vehicles n_tasks` line, then one
    /// line per location (`x y`), per vehicle (`home capacity cost_per_km`)
    /// and per task (`pickup delivery weight reward`).
    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path)?;
        let reader = io::BufReader::new(file);
        let mut lines = reader.lines();

        // Parse problem name
        let name = lines.next().unwrap()?.trim().to_string();

        // Parse entity counts
        let counts = lines.next().unwrap()?;
        let parts: Vec<&str> = counts.split_whitespace().collect();
        let n_locations = parts[0].parse::<usize>().unwrap();
        let n_vehicles = parts[1].parse::<usize>().unwrap();
        let n_tasks = parts[2].parse::<usize>().unwrap();

        let mut locations = Vec::with_capacity(n_locations);
        for id in 0..n_locations {
            let line = lines.next().unwrap()?;
            let parts: Vec<&str> = line.split_whitespace().collect();
            let x = parts[0].parse::<f64>().unwrap();
            let y = parts[1].parse::<f64>().unwrap();
            locations.push(Location::new(id, x, y));
        }

        let mut vehicles = Vec::with_capacity(n_vehicles);
        for id in 0..n_vehicles {
            let line = lines.next().unwrap()?;
            let parts: Vec<&str> = line.split_whitespace().collect();
            let home = parts[0].parse::<usize>().unwrap();
            let capacity = parts[1].parse::<u32>().unwrap();
            let cost_per_km = parts[2].parse::<f64>().unwrap();
            vehicles.push(Vehicle::new(id, home, capacity, cost_per_km));
        }

        let mut tasks = Vec::with_capacity(n_tasks);
        for id in 0..n_tasks {
            let line = lines.next().unwrap()?;
            let parts: Vec<&str> = line.split_whitespace().collect();
            let pickup = parts[0].parse::<usize>().unwrap();
            let delivery = parts[1].parse::<usize>().unwrap();
            let weight = parts[2].parse::<u32>().unwrap();
            let reward = parts[3].parse::<f64>().unwrap();
            tasks.push(Task::new(id, pickup, delivery, weight, reward));
        }

        Ok(Problem::new(name, locations, vehicles, tasks))
    }
}
