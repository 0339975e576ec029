use crate::model::{GuardPostId, Roster, SoldierId, Team};

/// Équipes éligibles pour un poste, dans l'ordre fourni.
pub(super) fn teams_for_post<'a>(post: &GuardPostId, teams: &'a [Team]) -> Vec<&'a Team> {
    teams.iter().filter(|t| t.is_eligible_for(post)).collect()
}

/// Soldats éligibles pour un poste (membres des équipes éligibles, sans doublon).
pub(super) fn soldiers_for_post(post: &GuardPostId, teams: &[Team]) -> Vec<SoldierId> {
    let mut out: Vec<SoldierId> = Vec::new();
    for team in teams_for_post(post, teams) {
        for soldier in &team.members {
            if !out.contains(soldier) {
                out.push(soldier.clone());
            }
        }
    }
    out
}

/// Nom affiché d'un poste; vide (et signalé) si le poste est inconnu.
pub(super) fn guard_post_display_name(roster: &Roster, id: &GuardPostId) -> String {
    match roster.find_guard_post(id) {
        Some(post) => post.display_name.clone(),
        None => {
            tracing::warn!(guard_post = %id, "could not find guard post");
            String::new()
        }
    }
}
