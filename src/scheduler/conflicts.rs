use super::{Conflict, ConflictKind, ShiftRef};
use crate::model::{GuardList, GuardPostId, Shift};

struct Entry<'a> {
    post: &'a GuardPostId,
    shift: &'a Shift,
}

impl Entry<'_> {
    fn to_ref(&self) -> ShiftRef {
        ShiftRef {
            guard_post: self.post.clone(),
            guard_time: self.shift.guard_time,
            duration: self.shift.duration,
        }
    }
}

/// Détecte les doubles affectations (soldat ou équipe) entre tous les postes.
///
/// Les tours en erreur sont ignorés.
pub fn detect_conflicts(lists: &[GuardList]) -> Vec<Conflict> {
    let mut entries: Vec<Entry<'_>> = lists
        .iter()
        .flat_map(|gl| {
            gl.shifts
                .iter()
                .filter(|s| s.error.is_none())
                .map(move |shift| Entry {
                    post: &gl.guard_post_id,
                    shift,
                })
        })
        .collect();
    entries.sort_by_key(|e| e.shift.guard_time);

    let mut out = Vec::new();

    for (idx, a) in entries.iter().enumerate() {
        for b in entries.iter().skip(idx + 1) {
            // trié : plus aucun chevauchement possible au-delà
            if b.shift.guard_time >= a.shift.end() {
                break;
            }

            for soldier in a.shift.soldiers.iter().filter(|s| b.shift.has_soldier(s)) {
                out.push(Conflict {
                    kind: ConflictKind::SoldierOverlap(soldier.clone()),
                    shift_a: a.to_ref(),
                    shift_b: b.to_ref(),
                });
            }

            if let (Some(team), Some(other)) = (&a.shift.team, &b.shift.team) {
                if team == other {
                    out.push(Conflict {
                        kind: ConflictKind::TeamOverlap(team.clone()),
                        shift_a: a.to_ref(),
                        shift_b: b.to_ref(),
                    });
                }
            }
        }
    }

    out
}
