#![forbid(unsafe_code)]
mod common;

use common::{at, ids, list, names, post, shift, team, with_scores};
use garde::period::TimeWindow;
use garde::scheduler::queues::{QueueError, ScoredSoldierQueue, SoldierQueue, TeamQueue};
use garde::scheduler::{is_soldier_busy, is_team_busy};
use garde::{GuardPostId, Shift, SoldierId, TeamId};

#[test]
fn unseen_soldiers_first_then_least_recently_used() {
    let history = vec![
        list("a", vec![shift(at(1, 4), 2, &["A"]), shift(at(1, 20), 2, &["A"])]),
        list("b", vec![shift(at(1, 8), 2, &["B"]), shift(at(1, 12), 2, &["C"])]),
    ];
    let queue = SoldierQueue::new(&ids(&["A", "B", "C", "D"]), &history);
    let order: Vec<&str> = queue.order().map(|s| s.as_str()).collect();
    // D jamais vu; B (p8) < C (p12) < A (p20)
    assert_eq!(order, vec!["D", "B", "C", "A"]);
}

#[test]
fn ineligible_soldiers_in_history_are_ignored() {
    let history = vec![list("a", vec![shift(at(1, 4), 2, &["Z", "A"])])];
    let queue = SoldierQueue::new(&ids(&["A", "B"]), &history);
    let order: Vec<&str> = queue.order().map(|s| s.as_str()).collect();
    assert_eq!(order, vec!["B", "A"]);
}

#[test]
fn soldiers_of_one_shift_keep_their_order() {
    let history = vec![list("a", vec![shift(at(1, 4), 2, &["A", "B"])])];
    let mut queue = SoldierQueue::new(&ids(&["A", "B", "C"]), &history);
    assert_eq!(queue.order().map(|s| s.as_str()).collect::<Vec<_>>(), vec!["C", "A", "B"]);

    // une file vivante remet A et B en queue dans le même ordre
    let mut live = SoldierQueue::new(&ids(&["A", "B", "C"]), &[]);
    live.next(TimeWindow::new(at(1, 4), 2), 2).unwrap();
    assert_eq!(live.order().map(|s| s.as_str()).collect::<Vec<_>>(), vec!["C", "A", "B"]);
    queue.next(TimeWindow::new(at(1, 8), 2), 1).unwrap();
    assert_eq!(queue.order().map(|s| s.as_str()).collect::<Vec<_>>(), vec!["A", "B", "C"]);
}

#[test]
fn point_busy_checks_are_half_open() {
    let history = vec![list("gate", vec![shift(at(1, 46), 4, &["A"])])];
    let a = SoldierId::new("A");
    assert!(!is_soldier_busy(&history, at(1, 45), &a));
    assert!(is_soldier_busy(&history, at(1, 46), &a));
    // le tour passe minuit : p46..p2 du lendemain
    assert!(is_soldier_busy(&history, at(2, 1), &a));
    assert!(!is_soldier_busy(&history, at(2, 2), &a));
    assert!(!is_soldier_busy(&history, at(1, 47), &SoldierId::new("B")));
}

#[test]
fn team_busy_checks_ignore_listed_soldiers() {
    let team_shift = Shift {
        team: Some(TeamId::new("T1")),
        ..shift(at(1, 10), 2, &[])
    };
    let history = vec![list("gate", vec![team_shift])];
    let t1 = TeamId::new("T1");
    assert!(is_team_busy(&history, at(1, 10), &t1));
    assert!(is_team_busy(&history, at(1, 11), &t1));
    assert!(!is_team_busy(&history, at(1, 12), &t1));
    assert!(!is_team_busy(&history, at(1, 9), &t1));
    assert!(!is_team_busy(&history, at(1, 10), &TeamId::new("T2")));
    assert!(!is_soldier_busy(&history, at(1, 10), &SoldierId::new("A")));
}

fn busy_history() -> Vec<garde::GuardList> {
    vec![list(
        "other",
        vec![
            shift(at(1, 10), 10, &["A"]),
            shift(at(1, 12), 1, &["B"]),
            shift(at(1, 13), 1, &["C"]),
        ],
    )]
}

#[test]
fn busy_soldier_keeps_its_place_at_the_front() {
    let history = busy_history();
    let mut queue = SoldierQueue::new(&ids(&["A", "B", "C"]), &history);
    assert_eq!(queue.order().map(|s| s.as_str()).collect::<Vec<_>>(), vec!["A", "B", "C"]);

    let picked = queue.next(TimeWindow::new(at(1, 15), 1), 1).unwrap();
    assert_eq!(names(&picked), vec!["B"]);
    assert_eq!(queue.order().map(|s| s.as_str()).collect::<Vec<_>>(), vec!["A", "C", "B"]);

    // A est libéré : il repasse avant les autres
    let picked = queue.next(TimeWindow::new(at(1, 25), 1), 1).unwrap();
    assert_eq!(names(&picked), vec!["A"]);
    assert_eq!(queue.order().map(|s| s.as_str()).collect::<Vec<_>>(), vec!["C", "B", "A"]);
}

#[test]
fn busy_check_covers_the_whole_window() {
    let history = busy_history();
    let mut queue = SoldierQueue::new(&ids(&["A", "B", "C"]), &history);
    // A est libre à p8 mais engagé dès p10
    let picked = queue.next(TimeWindow::new(at(1, 8), 4), 1).unwrap();
    assert_eq!(names(&picked), vec!["B"]);
}

#[test]
fn failed_request_leaves_queue_untouched() {
    let history = busy_history();
    let mut queue = SoldierQueue::new(&ids(&["A", "B", "C"]), &history);
    let err = queue.next(TimeWindow::new(at(1, 15), 1), 3).unwrap_err();
    assert_eq!(err, QueueError::NotEnoughSoldiers { requested: 3, found: 2 });
    assert_eq!(queue.order().map(|s| s.as_str()).collect::<Vec<_>>(), vec!["A", "B", "C"]);
    assert_eq!(queue.len(), 3);
}

#[test]
fn zero_soldiers_requested_is_not_an_error() {
    let mut queue = SoldierQueue::new(&[], &[]);
    assert!(queue.is_empty());
    assert!(queue.next(TimeWindow::new(at(1, 0), 1), 0).unwrap().is_empty());
    assert!(queue.next(TimeWindow::new(at(1, 0), 1), 1).is_err());
}

#[test]
fn scored_queue_prefers_lowest_accumulated_score() {
    let hill = post("hill", "scored-scheduling", 1, &[(0, 0, 24)]);
    let mut queue = ScoredSoldierQueue::new(&hill, &ids(&["X", "Y"]), &[]);
    let w = TimeWindow::new(at(1, 24), 24);

    assert_eq!(names(&queue.next(w, 1, 5).unwrap()), vec!["X"]);
    assert_eq!(queue.score_of(&garde::SoldierId::new("X")), Some(5));
    assert_eq!(names(&queue.next(w, 1, 1).unwrap()), vec!["Y"]);
    // réservoir vide : les soldats servis reviennent, Y (1) avant X (5)
    assert_eq!(names(&queue.next(w, 1, 1).unwrap()), vec!["Y"]);
    assert_eq!(queue.score_of(&garde::SoldierId::new("Y")), Some(2));
}

#[test]
fn scored_queue_seeds_scores_from_history() {
    let hill = with_scores(post("hill", "scored-scheduling", 1, &[(0, 0, 4)]), &[(40, 4, 3)]);
    let history = vec![list("hill", vec![shift(at(1, 44), 4, &["X"]), shift(at(1, 10), 4, &["Y"])])];
    let queue = ScoredSoldierQueue::new(&hill, &ids(&["X", "Y", "Z"]), &history);
    assert_eq!(queue.score_of(&garde::SoldierId::new("X")), Some(3));
    assert_eq!(queue.score_of(&garde::SoldierId::new("Y")), Some(1));
    assert_eq!(queue.score_of(&garde::SoldierId::new("Z")), Some(0));
}

#[test]
fn scored_queue_skips_busy_and_fails_cleanly() {
    let hill = post("hill", "scored-scheduling", 1, &[(0, 0, 4)]);
    let history = vec![list("other", vec![shift(at(1, 0), 8, &["X"])])];
    let mut queue = ScoredSoldierQueue::new(&hill, &ids(&["X", "Y"]), &history);
    let w = TimeWindow::new(at(1, 2), 2);

    let err = queue.next(w, 2, 1).unwrap_err();
    assert_eq!(err, QueueError::NotEnoughSoldiers { requested: 2, found: 1 });
    assert_eq!(names(&queue.next(w, 1, 1).unwrap()), vec!["Y"]);
}

#[test]
fn team_skipped_while_busy_is_offered_first_afterwards() {
    let t1 = team("T1", &["a1", "a2"], &["gate"]);
    let t2 = team("T2", &["b1", "b2"], &["gate"]);
    let mut engaged = shift(at(1, 0), 4, &["a1"]);
    engaged.team = Some(TeamId::new("T1"));
    let history = vec![list("tower", vec![engaged])];

    let mut queue = TeamQueue::new(&GuardPostId::new("gate"), &[&t1, &t2], &history);
    let pick = queue.next(TimeWindow::new(at(1, 0), 2), 1).unwrap();
    assert_eq!(pick.team.as_str(), "T2");
    assert_eq!(names(&pick.soldiers), vec!["b1"]);
    assert_eq!(queue.order().map(|t| t.as_str()).collect::<Vec<_>>(), vec!["T1", "T2"]);

    let pick = queue.next(TimeWindow::new(at(1, 4), 2), 1).unwrap();
    assert_eq!(pick.team.as_str(), "T1");
    // a1 a déjà servi (poste tower) : a2 passe d'abord
    assert_eq!(names(&pick.soldiers), vec!["a2"]);
}

#[test]
fn team_without_enough_free_members_is_skipped_not_dropped() {
    let t1 = team("T1", &["a1"], &["gate"]);
    let t2 = team("T2", &["b1", "b2"], &["gate"]);
    let mut queue = TeamQueue::new(&GuardPostId::new("gate"), &[&t1, &t2], &[]);

    let pick = queue.next(TimeWindow::new(at(1, 0), 2), 2).unwrap();
    assert_eq!(pick.team.as_str(), "T2");
    assert_eq!(queue.order().map(|t| t.as_str()).collect::<Vec<_>>(), vec!["T1", "T2"]);

    let pick = queue.next(TimeWindow::new(at(1, 2), 2), 1).unwrap();
    assert_eq!(pick.team.as_str(), "T1");
}

#[test]
fn team_order_follows_this_post_history_only() {
    let t1 = team("T1", &["a1"], &["gate"]);
    let t2 = team("T2", &["b1"], &["gate"]);
    let used = |t: &str, p: u8| Shift {
        team: Some(TeamId::new(t)),
        ..shift(at(1, p), 2, &[])
    };
    let history = vec![
        list("gate", vec![used("T2", 0), used("T1", 2)]),
        list("tower", vec![used("T2", 4)]),
    ];
    let queue = TeamQueue::new(&GuardPostId::new("gate"), &[&t1, &t2], &history);
    assert_eq!(queue.order().map(|t| t.as_str()).collect::<Vec<_>>(), vec!["T2", "T1"]);
}

#[test]
fn no_team_available_is_reported() {
    let t1 = team("T1", &["a1"], &["gate"]);
    let mut queue = TeamQueue::new(&GuardPostId::new("gate"), &[&t1], &[]);
    let err = queue.next(TimeWindow::new(at(1, 0), 2), 2).unwrap_err();
    assert_eq!(err, QueueError::NoTeamAvailable);
    assert_eq!(queue.order().count(), 1);
}
