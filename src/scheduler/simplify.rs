use crate::model::{Shift, SoldierId};

/// Compacte une séquence chronologique de tours d'un même poste.
///
/// - les créneaux vides sans erreur (poste non tenu) disparaissent;
/// - les créneaux en erreur restent, même vides;
/// - deux tours contigus avec la même équipe et les mêmes soldats fusionnent.
pub fn simplify_shifts(shifts: Vec<Shift>) -> Vec<Shift> {
    let mut out: Vec<Shift> = Vec::with_capacity(shifts.len());

    for shift in shifts {
        if shift.soldiers.is_empty() && shift.error.is_none() {
            continue;
        }
        if let Some(last) = out.last_mut() {
            if can_merge(last, &shift) {
                last.duration += shift.duration;
                if last.error.is_none() {
                    last.error = shift.error;
                }
                continue;
            }
        }
        out.push(shift);
    }

    out
}

fn can_merge(a: &Shift, b: &Shift) -> bool {
    a.end() == b.guard_time && a.team == b.team && same_soldiers(&a.soldiers, &b.soldiers)
}

fn same_soldiers(a: &[SoldierId], b: &[SoldierId]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a: Vec<&SoldierId> = a.iter().collect();
    let mut b: Vec<&SoldierId> = b.iter().collect();
    a.sort();
    b.sort();
    a == b
}
