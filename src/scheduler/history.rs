use super::simplify::simplify_shifts;
use crate::model::GuardList;
use crate::period::GuardTime;

/// Résultat d'une fusion dans l'historique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommitSummary {
    pub truncated: usize,
    pub appended: usize,
    /// tours antérieurs au point de troncature, ignorés
    pub skipped: usize,
}

/// Retire tous les tours commençant à `from` ou après. Les listes vidées
/// sont conservées.
pub fn truncate_from(lists: &mut [GuardList], from: GuardTime) -> usize {
    let mut removed = 0;
    for gl in lists.iter_mut() {
        let before = gl.shifts.len();
        gl.shifts.retain(|s| s.guard_time < from);
        removed += before - gl.shifts.len();
    }
    removed
}

/// Fusionne deux ensembles de listes par poste, dans un nouvel instantané.
pub fn merge_guard_lists(base: &[GuardList], extra: &[GuardList]) -> Vec<GuardList> {
    let mut merged = base.to_vec();
    for gl in extra {
        match merged.iter_mut().find(|m| m.guard_post_id == gl.guard_post_id) {
            Some(existing) => existing.shifts.extend(gl.shifts.iter().cloned()),
            None => merged.push(gl.clone()),
        }
    }
    merged
}

/// Tronque `history` à `from` puis y ajoute les nouveaux tours simplifiés.
///
/// Seuls les tours à partir de `from` sont ajoutés : après coup l'historique
/// contient exactement l'ancien avant `from` et le nouveau après.
pub fn commit_guard_lists(
    history: &mut Vec<GuardList>,
    new_lists: Vec<GuardList>,
    from: GuardTime,
) -> CommitSummary {
    let mut summary = CommitSummary {
        truncated: truncate_from(history, from),
        ..CommitSummary::default()
    };

    for gl in new_lists {
        let total = gl.shifts.len();
        let mut shifts: Vec<_> = gl.shifts.into_iter().filter(|s| s.guard_time >= from).collect();
        summary.skipped += total - shifts.len();
        shifts.sort_by_key(|s| s.guard_time);
        let shifts = simplify_shifts(shifts);
        summary.appended += shifts.len();

        match history.iter_mut().find(|h| h.guard_post_id == gl.guard_post_id) {
            Some(existing) => {
                if !gl.guard_post_display_name.is_empty() {
                    existing.guard_post_display_name = gl.guard_post_display_name;
                }
                existing.shifts.extend(shifts);
            }
            None => history.push(GuardList {
                guard_post_id: gl.guard_post_id,
                guard_post_display_name: gl.guard_post_display_name,
                shifts,
            }),
        }
    }

    summary
}
