use super::{PostContext, StrategyHandler};
use crate::model::Shift;
use crate::period::TimeWindow;
use crate::scheduler::occupancy::occupancy_at;
use crate::scheduler::queues::SoldierQueue;
use crate::scheduler::util;

/// Sert le soldat éligible le moins récemment utilisé.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoundRobin;

impl StrategyHandler for RoundRobin {
    fn name(&self) -> &'static str {
        "roundrobin"
    }

    fn build(&self, ctx: &PostContext<'_>) -> Vec<Shift> {
        let eligible = util::soldiers_for_post(&ctx.post.id, ctx.teams);
        let mut queue = SoldierQueue::new(&eligible, ctx.snapshot);
        let mut out = Vec::new();
        let mut cursor = ctx.horizon.start;

        while ctx.horizon.contains(cursor) {
            let occupancy = occupancy_at(ctx.post, cursor.period);
            let window = TimeWindow::new(cursor, occupancy.shift_duration);
            let mut shift = Shift::empty(cursor, occupancy.shift_duration);

            // les périodes non tenues sont enregistrées vides
            match queue.next(window, occupancy.soldiers_required) {
                Ok(soldiers) => shift.soldiers = soldiers,
                Err(err) => {
                    tracing::debug!(guard_post = %ctx.post.id, at = %cursor, %err, "slot left unfilled");
                    shift.error = Some(err.to_string());
                }
            }

            out.push(shift);
            cursor = window.end();
        }

        out
    }
}
