mod busy;
mod conflicts;
mod generate;
mod history;
pub mod occupancy;
pub mod queues;
mod simplify;
pub mod strategies;
mod types;
mod util;

pub use busy::{is_soldier_busy, is_soldier_busy_during, is_team_busy, is_team_busy_during};
pub use conflicts::detect_conflicts;
pub use generate::generate_guard_lists;
pub use history::{commit_guard_lists, merge_guard_lists, truncate_from, CommitSummary};
pub use simplify::simplify_shifts;
pub use types::{
    CommitRequest, Conflict, ConflictKind, GenerateRequest, Horizon, SchedError, ShiftRef,
};

use crate::model::{GuardList, Roster};
use crate::storage::Storage;

/// Scheduler : encapsule l'instantané (postes, équipes, historique)
#[derive(Debug, Default)]
pub struct Scheduler {
    roster: Roster,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            roster: Roster::default(),
        }
    }

    pub fn from_roster(roster: Roster) -> Self {
        Self { roster }
    }

    /// Charge l'instantané depuis un support.
    pub fn load<S: Storage + ?Sized>(storage: &S) -> Result<Self, SchedError> {
        Ok(Self::from_roster(storage.load()?))
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }
    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// Aperçu : ne modifie pas l'historique.
    pub fn generate(&self, request: &GenerateRequest) -> Result<Vec<GuardList>, SchedError> {
        let horizon = request.horizon()?;
        Ok(generate_guard_lists(
            &self.roster.guard_posts,
            &self.roster.teams,
            &self.roster.history,
            horizon,
        ))
    }

    /// Valide un aperçu : troncature puis ajout dans l'historique en mémoire.
    ///
    /// À persister ensuite avec [`Storage::save`].
    pub fn commit(&mut self, request: CommitRequest) -> Result<CommitSummary, SchedError> {
        let Some(from) = request.horizon_start()? else {
            tracing::info!("nothing to commit");
            return Ok(CommitSummary::default());
        };
        let summary = commit_guard_lists(&mut self.roster.history, request.guard_lists, from);
        if summary.skipped > 0 {
            tracing::warn!(skipped = summary.skipped, %from, "ignored shifts starting before commit point");
        }
        tracing::info!(
            %from,
            truncated = summary.truncated,
            appended = summary.appended,
            "guard lists committed"
        );
        Ok(summary)
    }

    /// Historique, avec les noms de postes résolus depuis les postes courants.
    pub fn history(&self) -> Vec<GuardList> {
        self.roster
            .history
            .iter()
            .map(|gl| GuardList {
                guard_post_display_name: util::guard_post_display_name(&self.roster, &gl.guard_post_id),
                ..gl.clone()
            })
            .collect()
    }

    pub fn detect_conflicts(&self) -> Vec<Conflict> {
        detect_conflicts(&self.roster.history)
    }
}
