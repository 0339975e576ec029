use super::{PostContext, StrategyHandler};
use crate::model::Shift;
use crate::period::TimeWindow;
use crate::scheduler::occupancy::occupancy_at;
use crate::scheduler::queues::TeamQueue;
use crate::scheduler::util;

/// Round-robin par équipe, avec rotation interne des soldats de chaque équipe.
#[derive(Debug, Default, Clone, Copy)]
pub struct TeamRoundRobin;

impl StrategyHandler for TeamRoundRobin {
    fn name(&self) -> &'static str {
        "team-roundrobin"
    }

    fn build(&self, ctx: &PostContext<'_>) -> Vec<Shift> {
        let teams = util::teams_for_post(&ctx.post.id, ctx.teams);
        let mut queue = TeamQueue::new(&ctx.post.id, &teams, ctx.snapshot);
        let mut out = Vec::new();
        let mut cursor = ctx.horizon.start;

        while ctx.horizon.contains(cursor) {
            let occupancy = occupancy_at(ctx.post, cursor.period);
            let window = TimeWindow::new(cursor, occupancy.shift_duration);
            cursor = window.end();

            // contrairement au round-robin, rien n'est enregistré hors occupation
            if occupancy.soldiers_required == 0 {
                continue;
            }

            let mut shift = Shift::empty(window.start, occupancy.shift_duration);
            match queue.next(window, occupancy.soldiers_required) {
                Ok(pick) => {
                    shift.team = Some(pick.team);
                    shift.soldiers = pick.soldiers;
                }
                Err(err) => {
                    tracing::debug!(guard_post = %ctx.post.id, at = %window.start, %err, "slot left unfilled");
                    shift.error = Some(err.to_string());
                }
            }
            out.push(shift);
        }

        out
    }
}
