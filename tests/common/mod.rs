#![allow(dead_code)]
use chrono::NaiveDate;
use garde::{
    GuardList, GuardPost, GuardPostId, GuardTime, Occupation, ScoreWindow, Shift, SoldierId,
    StrategyKind, Team, TeamId,
};

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
}

pub fn at(d: u32, period: u8) -> GuardTime {
    GuardTime::new(day(d), period).unwrap()
}

pub fn ids(raw: &[&str]) -> Vec<SoldierId> {
    raw.iter().map(SoldierId::new).collect()
}

pub fn post(id: &str, strategy: &str, soldiers_required: u32, occupation: &[(u8, u8, u32)]) -> GuardPost {
    GuardPost {
        id: GuardPostId::new(id),
        display_name: id.to_uppercase(),
        strategy: StrategyKind::from(strategy.to_string()),
        soldiers_required,
        occupation: occupation
            .iter()
            .map(|&(from, to, duration)| Occupation { from, to, duration })
            .collect(),
        score_windows: Vec::new(),
    }
}

pub fn with_scores(mut post: GuardPost, windows: &[(u8, u8, u32)]) -> GuardPost {
    post.score_windows = windows
        .iter()
        .map(|&(from, to, score)| ScoreWindow { from, to, score })
        .collect();
    post
}

pub fn team(id: &str, members: &[&str], posts: &[&str]) -> Team {
    Team {
        id: TeamId::new(id),
        name: format!("Team {id}"),
        members: ids(members),
        eligible_posts: posts.iter().map(GuardPostId::new).collect(),
    }
}

pub fn shift(time: GuardTime, duration: u32, soldiers: &[&str]) -> Shift {
    Shift {
        soldiers: ids(soldiers),
        team: None,
        guard_time: time,
        duration,
        error: None,
    }
}

pub fn list(post: &str, shifts: Vec<Shift>) -> GuardList {
    GuardList {
        guard_post_id: GuardPostId::new(post),
        guard_post_display_name: String::new(),
        shifts,
    }
}

pub fn names(soldiers: &[SoldierId]) -> Vec<&str> {
    soldiers.iter().map(SoldierId::as_str).collect()
}
