use super::{restore_front, rotation_order, QueueError, SoldierQueue};
use crate::model::{GuardList, GuardPostId, SoldierId, Team, TeamId};
use crate::period::TimeWindow;
use crate::scheduler::busy;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
struct QueuedTeam<'a> {
    id: TeamId,
    soldiers: SoldierQueue<'a>,
}

/// Équipe retenue et ses soldats pour un créneau.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamPick {
    pub team: TeamId,
    pub soldiers: Vec<SoldierId>,
}

/// Round-robin sur les équipes d'un poste, chacune avec sa propre file de
/// soldats.
#[derive(Debug, Clone)]
pub struct TeamQueue<'a> {
    queue: VecDeque<QueuedTeam<'a>>,
    snapshot: &'a [GuardList],
}

impl<'a> TeamQueue<'a> {
    /// L'ordre des équipes vient de la liste du poste `post`; les files
    /// internes voient tout `snapshot`.
    pub fn new(post: &GuardPostId, teams: &[&Team], snapshot: &'a [GuardList]) -> Self {
        let ids: Vec<TeamId> = teams.iter().map(|t| t.id.clone()).collect();
        let uses = snapshot
            .iter()
            .filter(|gl| &gl.guard_post_id == post)
            .flat_map(|gl| gl.shifts.iter())
            .filter_map(|s| s.team.clone().map(|team| (s.guard_time, vec![team])))
            .collect();

        let queue = rotation_order(&ids, uses)
            .into_iter()
            .filter_map(|id| {
                let team = teams.iter().find(|t| t.id == id)?;
                Some(QueuedTeam {
                    soldiers: SoldierQueue::new(&team.members, snapshot),
                    id,
                })
            })
            .collect();

        Self { queue, snapshot }
    }

    /// Prend la prochaine équipe libre capable de fournir `soldiers_amount`
    /// soldats libres sur `window`.
    ///
    /// Une équipe occupée ou incomplète est sautée pour ce créneau seulement :
    /// elle repasse en tête.
    pub fn next(&mut self, window: TimeWindow, soldiers_amount: u32) -> Result<TeamPick, QueueError> {
        let mut skipped: Vec<QueuedTeam<'a>> = Vec::new();

        loop {
            let Some(mut team) = self.queue.pop_front() else {
                restore_front(&mut self.queue, skipped);
                return Err(QueueError::NoTeamAvailable);
            };

            if busy::is_team_busy_during(self.snapshot, window, &team.id) {
                skipped.push(team);
                continue;
            }

            match team.soldiers.next(window, soldiers_amount) {
                Ok(soldiers) => {
                    let pick = TeamPick {
                        team: team.id.clone(),
                        soldiers,
                    };
                    self.queue.push_back(team);
                    restore_front(&mut self.queue, skipped);
                    return Ok(pick);
                }
                Err(err) => {
                    tracing::trace!(team = %team.id, %err, "team cannot staff slot");
                    skipped.push(team);
                }
            }
        }
    }

    /// Ordre courant des équipes, de la tête à la queue.
    pub fn order(&self) -> impl Iterator<Item = &TeamId> {
        self.queue.iter().map(|t| &t.id)
    }
}
