//! Oracle d'occupation : sans état, l'ensemble des tours est toujours passé
//! explicitement.

use crate::model::{GuardList, Shift, SoldierId, TeamId};
use crate::period::{GuardTime, TimeWindow};

fn shifts(lists: &[GuardList]) -> impl Iterator<Item = &Shift> {
    lists.iter().flat_map(|gl| gl.shifts.iter())
}

/// `true` si un tour de `lists` dont l'intervalle contient `time` cite `soldier`.
pub fn is_soldier_busy(lists: &[GuardList], time: GuardTime, soldier: &SoldierId) -> bool {
    is_soldier_busy_during(lists, TimeWindow::new(time, 1), soldier)
}

/// `true` si `soldier` est engagé sur un tour qui chevauche `window`.
pub fn is_soldier_busy_during(lists: &[GuardList], window: TimeWindow, soldier: &SoldierId) -> bool {
    shifts(lists).any(|s| s.has_soldier(soldier) && s.window().overlaps(&window))
}

pub fn is_team_busy(lists: &[GuardList], time: GuardTime, team: &TeamId) -> bool {
    is_team_busy_during(lists, TimeWindow::new(time, 1), team)
}

pub fn is_team_busy_during(lists: &[GuardList], window: TimeWindow, team: &TeamId) -> bool {
    shifts(lists).any(|s| s.team.as_ref() == Some(team) && s.window().overlaps(&window))
}
