use super::history::{merge_guard_lists, truncate_from};
use super::simplify::simplify_shifts;
use super::strategies::{PostContext, Strategy};
use super::Horizon;
use crate::model::{GuardList, GuardPost, Team};

/// Génère les listes de garde de tous les postes sur `horizon`.
///
/// Fonction pure d'un instantané : l'historique est copié puis tronqué au
/// début de l'horizon, rien n'est persisté. Les postes sont traités par ordre
/// de priorité de stratégie; chacun voit l'historique et les tours déjà
/// produits par les postes précédents.
pub fn generate_guard_lists(
    guard_posts: &[GuardPost],
    teams: &[Team],
    history: &[GuardList],
    horizon: Horizon,
) -> Vec<GuardList> {
    let mut history = history.to_vec();
    truncate_from(&mut history, horizon.start);

    let mut ordered: Vec<&GuardPost> = guard_posts.iter().collect();
    ordered.sort_by_key(|p| p.strategy.processing_order());

    let mut produced: Vec<GuardList> = Vec::with_capacity(ordered.len());

    for post in ordered {
        let snapshot = merge_guard_lists(&history, &produced);
        let handler = Strategy::resolve(post).handler();
        tracing::debug!(guard_post = %post.id, strategy = handler.name(), "building guard list");

        let ctx = PostContext {
            post,
            snapshot: &snapshot,
            teams,
            horizon,
        };
        let shifts = simplify_shifts(handler.build(&ctx));
        produced.push(GuardList::new(post, shifts));
    }

    produced
}
