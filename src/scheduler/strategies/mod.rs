//! Stratégies d'attribution : un contrat commun, trois implémentations.

mod round_robin;
mod scored;
mod team_round_robin;

pub use round_robin::RoundRobin;
pub use scored::ScoredScheduling;
pub use team_round_robin::TeamRoundRobin;

use super::Horizon;
use crate::model::{GuardList, GuardPost, Shift, StrategyKind, Team};

/// Entrées d'un handler pour un poste.
#[derive(Debug, Clone, Copy)]
pub struct PostContext<'a> {
    pub post: &'a GuardPost,
    /// historique tronqué + tours déjà produits pendant cette génération
    pub snapshot: &'a [GuardList],
    pub teams: &'a [Team],
    pub horizon: Horizon,
}

/// Produit la séquence chronologique des tours d'un poste sur l'horizon.
///
/// Une pénurie sur un créneau est inscrite dans `Shift::error` et
/// n'interrompt pas la boucle.
pub trait StrategyHandler {
    fn name(&self) -> &'static str;
    fn build(&self, ctx: &PostContext<'_>) -> Vec<Shift>;
}

/// Stratégie résolue, une fois par poste et par génération.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    RoundRobin,
    TeamRoundRobin,
    ScoredScheduling,
}

impl Strategy {
    /// Les identifiants inconnus retombent sur le round-robin.
    pub fn resolve(post: &GuardPost) -> Self {
        match &post.strategy {
            StrategyKind::RoundRobin => Strategy::RoundRobin,
            StrategyKind::TeamRoundRobin => Strategy::TeamRoundRobin,
            StrategyKind::ScoredScheduling => Strategy::ScoredScheduling,
            StrategyKind::Unknown(raw) => {
                tracing::warn!(
                    guard_post = %post.id,
                    strategy = %raw,
                    fallback = "roundrobin",
                    "unknown strategy, falling back to round-robin"
                );
                Strategy::RoundRobin
            }
        }
    }

    pub fn handler(self) -> &'static dyn StrategyHandler {
        match self {
            Strategy::RoundRobin => &RoundRobin,
            Strategy::TeamRoundRobin => &TeamRoundRobin,
            Strategy::ScoredScheduling => &ScoredScheduling,
        }
    }
}
