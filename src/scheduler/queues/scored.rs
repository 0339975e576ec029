use super::QueueError;
use crate::model::{GuardList, GuardPost, SoldierId};
use crate::period::TimeWindow;
use crate::scheduler::busy;
use crate::statistics::soldier_scores;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScoredSoldier {
    soldier: SoldierId,
    score: u32,
}

/// File de soldats triée par score cumulé croissant.
///
/// Un soldat servi ne revient dans le réservoir actif qu'une fois celui-ci
/// vidé : pendant une même génération, chacun sert avant que quiconque soit
/// repris.
#[derive(Debug, Clone)]
pub struct ScoredSoldierQueue<'a> {
    active: VecDeque<ScoredSoldier>,
    used: Vec<ScoredSoldier>,
    snapshot: &'a [GuardList],
}

impl<'a> ScoredSoldierQueue<'a> {
    /// Scores initiaux calculés sur `snapshot` avec les plages du poste;
    /// un soldat jamais vu part de 0.
    pub fn new(post: &GuardPost, eligible: &[SoldierId], snapshot: &'a [GuardList]) -> Self {
        let scores = soldier_scores(post, snapshot);
        let mut queue = Self {
            active: VecDeque::new(),
            used: Vec::new(),
            snapshot,
        };
        let mut entries: Vec<ScoredSoldier> = Vec::with_capacity(eligible.len());
        for soldier in eligible {
            if entries.iter().any(|e| &e.soldier == soldier) {
                continue;
            }
            entries.push(ScoredSoldier {
                soldier: soldier.clone(),
                score: scores.get(soldier).copied().unwrap_or(0),
            });
        }
        queue.enqueue(entries);
        queue
    }

    /// Prend les `amount` soldats libres de plus faible score et leur ajoute
    /// `score_to_add`.
    pub fn next(
        &mut self,
        window: TimeWindow,
        amount: u32,
        score_to_add: u32,
    ) -> Result<Vec<SoldierId>, QueueError> {
        let wanted = amount as usize;
        let mut picked: Vec<ScoredSoldier> = Vec::with_capacity(wanted);
        let mut busy_ones: Vec<ScoredSoldier> = Vec::new();

        while picked.len() < wanted {
            let Some(entry) = self.dequeue() else {
                let found = picked.len() as u32;
                self.enqueue(busy_ones);
                self.enqueue(picked);
                return Err(QueueError::NotEnoughSoldiers {
                    requested: amount,
                    found,
                });
            };

            if busy::is_soldier_busy_during(self.snapshot, window, &entry.soldier) {
                busy_ones.push(entry);
            } else {
                picked.push(entry);
            }
        }

        let ids = picked.iter().map(|e| e.soldier.clone()).collect();
        for mut entry in picked {
            entry.score += score_to_add;
            self.used.push(entry);
        }
        self.enqueue(busy_ones);
        Ok(ids)
    }

    /// Score courant d'un soldat (réservoir actif ou déjà servi).
    pub fn score_of(&self, soldier: &SoldierId) -> Option<u32> {
        self.active
            .iter()
            .chain(self.used.iter())
            .find(|e| &e.soldier == soldier)
            .map(|e| e.score)
    }

    fn enqueue(&mut self, entries: Vec<ScoredSoldier>) {
        self.active.extend(entries);
        // tri stable : à score égal, l'ordre d'arrivée est conservé
        self.active.make_contiguous().sort_by_key(|e| e.score);
    }

    fn dequeue(&mut self) -> Option<ScoredSoldier> {
        if self.active.is_empty() {
            let used = std::mem::take(&mut self.used);
            self.enqueue(used);
        }
        self.active.pop_front()
    }
}
