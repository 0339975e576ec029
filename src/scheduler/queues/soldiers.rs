use super::{restore_front, rotation_order, QueueError};
use crate::model::{GuardList, SoldierId};
use crate::period::TimeWindow;
use crate::scheduler::busy;
use std::collections::VecDeque;

/// File round-robin de soldats : l'ordre chronologique prime.
#[derive(Debug, Clone)]
pub struct SoldierQueue<'a> {
    queue: VecDeque<SoldierId>,
    snapshot: &'a [GuardList],
}

impl<'a> SoldierQueue<'a> {
    /// Construit la file à partir des soldats éligibles et de tout l'historique
    /// disponible (`snapshot`).
    pub fn new(eligible: &[SoldierId], snapshot: &'a [GuardList]) -> Self {
        let uses = snapshot
            .iter()
            .flat_map(|gl| gl.shifts.iter())
            .filter(|s| !s.soldiers.is_empty())
            .map(|s| (s.guard_time, s.soldiers.clone()))
            .collect();
        Self {
            queue: rotation_order(eligible, uses),
            snapshot,
        }
    }

    /// Prend `amount` soldats libres sur `window`.
    ///
    /// Les soldats occupés sont mis de côté puis remis en tête; les soldats
    /// retenus passent en fin de file.
    pub fn next(&mut self, window: TimeWindow, amount: u32) -> Result<Vec<SoldierId>, QueueError> {
        let wanted = amount as usize;
        let mut popped: Vec<SoldierId> = Vec::new();
        let mut picked: Vec<SoldierId> = Vec::with_capacity(wanted);
        let mut busy_ones: Vec<SoldierId> = Vec::new();

        while picked.len() < wanted {
            let Some(soldier) = self.queue.pop_front() else {
                let found = picked.len() as u32;
                restore_front(&mut self.queue, popped);
                return Err(QueueError::NotEnoughSoldiers {
                    requested: amount,
                    found,
                });
            };
            popped.push(soldier.clone());

            if busy::is_soldier_busy_during(self.snapshot, window, &soldier) {
                busy_ones.push(soldier);
            } else {
                picked.push(soldier);
            }
        }

        self.queue.extend(picked.iter().cloned());
        restore_front(&mut self.queue, busy_ones);
        Ok(picked)
    }

    /// Ordre courant, de la tête à la queue.
    pub fn order(&self) -> impl Iterator<Item = &SoldierId> {
        self.queue.iter()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
