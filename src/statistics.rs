//! Statistiques par soldat sur un ensemble de listes de garde.

use crate::model::{GuardList, GuardPost, SoldierId};
use crate::period::GuardTime;
use crate::scheduler::occupancy::score_at;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoldierStats {
    pub soldier: SoldierId,
    pub shifts: u32,
    pub periods: u32,
    pub last_guard: Option<GuardTime>,
}

/// Charge de chaque soldat apparaissant dans `lists`, triée par id.
///
/// Les tours en erreur comptent s'ils citent des soldats.
pub fn soldier_statistics(lists: &[GuardList]) -> Vec<SoldierStats> {
    let mut by_soldier: BTreeMap<SoldierId, SoldierStats> = BTreeMap::new();

    for shift in lists.iter().flat_map(|gl| gl.shifts.iter()) {
        for soldier in &shift.soldiers {
            let stats = by_soldier
                .entry(soldier.clone())
                .or_insert_with(|| SoldierStats {
                    soldier: soldier.clone(),
                    shifts: 0,
                    periods: 0,
                    last_guard: None,
                });
            stats.shifts += 1;
            stats.periods += shift.duration;
            stats.last_guard = stats.last_guard.max(Some(shift.guard_time));
        }
    }

    by_soldier.into_values().collect()
}

/// Score cumulé par soldat, chaque tour valant le score de sa période de
/// début selon les plages de `post`.
pub fn soldier_scores(post: &GuardPost, lists: &[GuardList]) -> BTreeMap<SoldierId, u32> {
    let mut scores: BTreeMap<SoldierId, u32> = BTreeMap::new();
    for shift in lists.iter().flat_map(|gl| gl.shifts.iter()) {
        let score = score_at(post, shift.guard_time.period);
        for soldier in &shift.soldiers {
            *scores.entry(soldier.clone()).or_insert(0) += score;
        }
    }
    scores
}
