//! Change-vehicle operator: hand a task over to another vehicle.

use crate::movement::{ActionKind, Movement};
use crate::solution::SolutionState;

use super::LocalSearch;

impl LocalSearch {
    /// Move the donor's first task to the front of the receiver's route.
    ///
    /// The donor's first movement (a pickup, by invariant) and its matching
    /// deliver are spliced out of the donor's chain; the pair is prepended
    /// to the receiver's route, pickup immediately followed by deliver and
    /// then whatever the receiver did first before. The caller checks the
    /// receiver's capacity against the task weight before invoking, and
    /// validates the receiver's load on the result.
    ///
    /// Panics if the donor carries no task or its first task has no
    /// reachable deliver, both of which mean a corrupt state.
    pub fn change_vehicle(
        &self,
        state: &SolutionState,
        donor: usize,
        receiver: usize,
    ) -> SolutionState {
        let mut next_movements = state.next_movements();
        let mut first_movements = state.first_movements();

        let m1 = first_movements[donor].expect("change_vehicle called on an empty donor route");
        let m2 = first_movements[receiver];

        let mut m1_next = next_movements[m1.id()].expect("pickup is never the last movement");
        let m1_deliver;

        if m1_next.kind == ActionKind::Deliver {
            // The task is delivered right after being picked up
            m1_deliver = m1_next;
            m1_next = match next_movements[m1_next.id()] {
                Some(movement) => movement,
                None => {
                    // The pair was the donor's whole route
                    first_movements[donor] = None;
                    self.splice_in(&mut next_movements, &mut first_movements, m1, m1_deliver, m2, receiver);
                    return SolutionState::build(next_movements, first_movements);
                }
            };
        } else {
            // The deliver comes later: scan forward and relink around it
            let mut prev = m1_next;
            let mut current = next_movements[m1_next.id()];
            while let Some(movement) = current {
                if movement.task == m1.task {
                    break;
                }
                prev = movement;
                current = next_movements[movement.id()];
            }
            match current {
                Some(deliver) => {
                    next_movements[prev.id()] = next_movements[deliver.id()];
                    m1_deliver = deliver;
                }
                None => panic!(
                    "no matching deliver for task {} in change_vehicle",
                    m1.task
                ),
            }
        }

        first_movements[donor] = Some(m1_next);
        self.splice_in(&mut next_movements, &mut first_movements, m1, m1_deliver, m2, receiver);

        SolutionState::build(next_movements, first_movements)
    }

    /// Prepend the pickup/deliver pair to the receiver's chain.
    fn splice_in(
        &self,
        next_movements: &mut [Option<Movement>],
        first_movements: &mut [Option<Movement>],
        pickup: Movement,
        deliver: Movement,
        old_first: Option<Movement>,
        receiver: usize,
    ) {
        next_movements[pickup.id()] = Some(deliver);
        next_movements[deliver.id()] = old_first;
        first_movements[receiver] = Some(pickup);
    }
}
