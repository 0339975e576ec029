use super::{PostContext, StrategyHandler};
use crate::model::Shift;
use crate::scheduler::occupancy::{occupancy_at, score_at};
use crate::scheduler::queues::ScoredSoldierQueue;
use crate::scheduler::util;

/// Remplit d'abord les créneaux les mieux notés avec les soldats les moins
/// chargés.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoredScheduling;

impl StrategyHandler for ScoredScheduling {
    fn name(&self) -> &'static str {
        "scored-scheduling"
    }

    fn build(&self, ctx: &PostContext<'_>) -> Vec<Shift> {
        // passe 1 : tous les créneaux de l'horizon, vides
        let mut slots: Vec<Shift> = Vec::new();
        let mut cursor = ctx.horizon.start;
        while ctx.horizon.contains(cursor) {
            let occupancy = occupancy_at(ctx.post, cursor.period);
            let slot = Shift::empty(cursor, occupancy.shift_duration);
            cursor = slot.end();
            slots.push(slot);
        }

        // passe 2 : score décroissant; tri stable, donc ordre chronologique à égalité
        let mut ranked: Vec<(usize, u32)> = slots
            .iter()
            .enumerate()
            .map(|(idx, s)| (idx, score_at(ctx.post, s.guard_time.period)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let eligible = util::soldiers_for_post(&ctx.post.id, ctx.teams);
        let mut queue = ScoredSoldierQueue::new(ctx.post, &eligible, ctx.snapshot);

        for (idx, score) in ranked {
            let slot = &mut slots[idx];
            let required = occupancy_at(ctx.post, slot.guard_time.period).soldiers_required;
            if required == 0 {
                continue;
            }
            match queue.next(slot.window(), required, score) {
                Ok(soldiers) => slot.soldiers = soldiers,
                Err(err) => {
                    tracing::debug!(guard_post = %ctx.post.id, at = %slot.guard_time, %err, "slot left unfilled");
                    slot.error = Some(err.to_string());
                }
            }
        }

        slots
    }
}
