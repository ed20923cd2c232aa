//! Utility functions and structures around the search.

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use crate::movement::ActionKind;
use crate::problem::Problem;
use crate::solution::SolutionState;

/// Format a duration as hours, minutes, and seconds.
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.as_secs();
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}h {:02}m {:02}s", hours, minutes, seconds)
}

/// Save a per-vehicle plan to a file.
pub fn save_plan<P: AsRef<Path>>(
    state: &SolutionState,
    problem: &Problem,
    path: P,
) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Plan for instance: {}", problem.name)?;
    writeln!(file, "Total Cost: {:.2}", state.cost(problem))?;
    writeln!(file, "Vehicles: {}", problem.vehicles.len())?;
    writeln!(file)?;

    for vehicle in &problem.vehicles {
        let route = state.route(vehicle.id);
        write!(file, "Vehicle #{}: ", vehicle.id)?;

        if route.is_empty() {
            writeln!(file, "Idle")?;
            continue;
        }

        write!(file, "home {}", vehicle.home)?;
        for movement in route {
            let task = &problem.tasks[movement.task];
            match movement.kind {
                ActionKind::Pickup => {
                    write!(file, " -> pickup task {} at {}", task.id, task.pickup)?
                }
                ActionKind::Deliver => {
                    write!(file, " -> deliver task {} at {}", task.id, task.delivery)?
                }
            }
        }
        writeln!(file)?;
    }

    Ok(())
}

/// Summary of one search run.
pub struct SearchStatistics {
    pub iterations: u32,
    pub runtime: Duration,
    pub best_cost: f64,
    pub vehicles_used: usize,
    pub tasks_planned: usize,
}

impl SearchStatistics {
    /// Gather statistics from a finished state.
    pub fn from_state(
        state: &SolutionState,
        problem: &Problem,
        iterations: u32,
        runtime: Duration,
    ) -> Self {
        let vehicles_used = state.routes().iter().filter(|r| !r.is_empty()).count();
        let tasks_planned = state.routes().iter().map(|r| r.len()).sum::<usize>() / 2;

        SearchStatistics {
            iterations,
            runtime,
            best_cost: state.cost(problem),
            vehicles_used,
            tasks_planned,
        }
    }

    /// Format the statistics as a string.
    pub fn format(&self) -> String {
        format!(
            "Search Statistics:
- Iterations: {}
- Runtime: {}
- Best Cost: {:.2}
- Vehicles Used: {}
- Tasks Planned: {}",
            self.iterations,
            format_duration(self.runtime),
            self.best_cost,
            self.vehicles_used,
            self.tasks_planned
        )
    }
}
