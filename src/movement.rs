//! Movements: the atomic pickup and deliver actions tied to one task.

use crate::problem::Problem;
use serde::{Deserialize, Serialize};

/// The kind of action a movement performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Pickup,
    Deliver,
}

/// An atomic pickup or deliver action for one task.
///
/// Movements are plain values: two exist per task system-wide, identified in
/// a dense id space of size `2 * n_tasks` where the pickup of task `t`
/// occupies id `2*t` and its delivery id `2*t + 1`. The id is used to index
/// the successor table of a [`SolutionState`](crate::solution::SolutionState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movement {
    pub task: usize,
    pub kind: ActionKind,
}

impl Movement {
    /// The pickup movement of a task.
    pub fn pickup(task: usize) -> Self {
        Movement {
            task,
            kind: ActionKind::Pickup,
        }
    }

    /// The deliver movement of a task.
    pub fn deliver(task: usize) -> Self {
        Movement {
            task,
            kind: ActionKind::Deliver,
        }
    }

    /// Index of this movement in the movement-id space.
    pub fn id(&self) -> usize {
        match self.kind {
            ActionKind::Pickup => self.task * 2,
            ActionKind::Deliver => self.task * 2 + 1,
        }
    }

    /// Reconstruct a movement from its id.
    pub fn from_id(id: usize) -> Self {
        if id % 2 == 0 {
            Movement::pickup(id / 2)
        } else {
            Movement::deliver(id / 2)
        }
    }

    /// The location where the vehicle ends up after performing this movement:
    /// the pickup city for a pickup, the delivery city for a delivery.
    pub fn location(&self, problem: &Problem) -> usize {
        let task = &problem.tasks[self.task];
        match self.kind {
            ActionKind::Pickup => task.pickup,
            ActionKind::Deliver => task.delivery,
        }
    }
}
