//! Files de rotation.
//!
//! Contrat commun : l'avant de la file est le prochain à servir, `push_back`
//! = vient d'être utilisé, `push_front` = temporairement indisponible (il
//! garde sa priorité). Une demande qui échoue laisse la file inchangée.

mod scored;
mod soldiers;
mod teams;

pub use scored::ScoredSoldierQueue;
pub use soldiers::SoldierQueue;
pub use teams::{TeamPick, TeamQueue};

use crate::period::GuardTime;
use std::collections::VecDeque;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("not enough soldiers available ({found} of {requested})")]
    NotEnoughSoldiers { requested: u32, found: u32 },
    #[error("no available team")]
    NoTeamAvailable,
}

/// Ordre de rotation initial.
///
/// Les candidats jamais vus passent en tête (ordre d'éligibilité), puis les
/// autres du moins récemment au plus récemment utilisé. `uses` associe un
/// instant aux candidats apparus à cet instant; seule la dernière
/// apparition de chacun compte.
pub(crate) fn rotation_order<T: Clone + PartialEq>(
    eligible: &[T],
    mut uses: Vec<(GuardTime, Vec<T>)>,
) -> VecDeque<T> {
    uses.sort_by_key(|(time, _)| *time);

    // du plus récent au plus ancien : la première rencontre est la dernière utilisation
    let mut seen: VecDeque<T> = VecDeque::new();
    for (_, ids) in uses.iter().rev() {
        for id in ids.iter().rev() {
            if eligible.contains(id) && !seen.contains(id) {
                seen.push_front(id.clone());
            }
        }
    }

    let mut order: VecDeque<T> = VecDeque::with_capacity(eligible.len());
    for id in eligible {
        if !seen.contains(id) && !order.contains(id) {
            order.push_back(id.clone());
        }
    }
    order.extend(seen);
    order
}

/// Remet `items` en tête de file en conservant leur ordre.
pub(crate) fn restore_front<T>(queue: &mut VecDeque<T>, items: Vec<T>) {
    for item in items.into_iter().rev() {
        queue.push_front(item);
    }
}
