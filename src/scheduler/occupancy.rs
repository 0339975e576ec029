use crate::model::{GuardPost, Occupation};

/// Score d'une période hors de toute plage pondérée.
pub const DEFAULT_SCORE: u32 = 1;

/// Besoins d'un poste pour une période donnée.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyAt {
    pub covered: bool,
    pub soldiers_required: u32,
    /// jamais nul
    pub shift_duration: u32,
    pub score: u32,
}

pub fn occupation_at(post: &GuardPost, period: u8) -> Option<&Occupation> {
    post.occupation.iter().find(|o| o.covers(period))
}

pub fn score_at(post: &GuardPost, period: u8) -> u32 {
    post.score_windows
        .iter()
        .find(|w| w.covers(period))
        .map_or(DEFAULT_SCORE, |w| w.score)
}

/// Résout l'occupation d'un poste à `period`.
///
/// Hors fenêtre : aucun soldat requis, tour d'une période.
pub fn occupancy_at(post: &GuardPost, period: u8) -> OccupancyAt {
    let occupation = occupation_at(post, period);
    OccupancyAt {
        covered: occupation.is_some(),
        soldiers_required: occupation.map_or(0, |_| post.soldiers_required),
        shift_duration: occupation.map_or(1, |o| o.duration.max(1)),
        score: score_at(post, period),
    }
}
