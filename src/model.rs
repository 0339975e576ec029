use crate::period::{in_ring, GuardTime, TimeWindow};
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new<S: AsRef<str>>(s: S) -> Self {
                Self(s.as_ref().to_owned())
            }
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identifiant opaque d'un soldat
    SoldierId
);
string_id!(
    /// Identifiant fort pour Team
    TeamId
);
string_id!(
    /// Identifiant fort pour GuardPost
    GuardPostId
);

/// Stratégie d'attribution déclarée sur un poste.
///
/// Les identifiants inconnus sont conservés tels quels (`Unknown`) ; le
/// générateur les traite comme du round-robin en le signalant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StrategyKind {
    RoundRobin,
    TeamRoundRobin,
    ScoredScheduling,
    Unknown(String),
}

impl StrategyKind {
    pub fn as_str(&self) -> &str {
        match self {
            StrategyKind::RoundRobin => "roundrobin",
            StrategyKind::TeamRoundRobin => "team-roundrobin",
            StrategyKind::ScoredScheduling => "scored-scheduling",
            StrategyKind::Unknown(raw) => raw,
        }
    }

    /// Ordre de traitement : plus petit = traité en premier.
    pub fn processing_order(&self) -> u32 {
        match self {
            StrategyKind::TeamRoundRobin => 1,
            StrategyKind::RoundRobin => 2,
            StrategyKind::ScoredScheduling => 3,
            StrategyKind::Unknown(_) => 999,
        }
    }
}

impl From<String> for StrategyKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "roundrobin" | "round-robin" => StrategyKind::RoundRobin,
            "team-roundrobin" | "team-round-robin" => StrategyKind::TeamRoundRobin,
            "scored-scheduling" => StrategyKind::ScoredScheduling,
            _ => StrategyKind::Unknown(raw),
        }
    }
}

impl From<StrategyKind> for String {
    fn from(kind: StrategyKind) -> Self {
        kind.as_str().to_owned()
    }
}

/// Plage journalière pendant laquelle le poste doit être tenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupation {
    /// inclus
    pub from: u8,
    /// exclu
    pub to: u8,
    /// périodes par tour de garde
    pub duration: u32,
}

impl Occupation {
    pub fn covers(&self, period: u8) -> bool {
        in_ring(period, self.from, self.to)
    }
}

/// Pondération d'une plage horaire (stratégie à score uniquement).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreWindow {
    pub from: u8,
    pub to: u8,
    pub score: u32,
}

impl ScoreWindow {
    pub fn covers(&self, period: u8) -> bool {
        in_ring(period, self.from, self.to)
    }
}

/// Poste de garde, immuable pendant une génération.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardPost {
    pub id: GuardPostId,
    pub display_name: String,
    pub strategy: StrategyKind,
    pub soldiers_required: u32,
    #[serde(default)]
    pub occupation: Vec<Occupation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub score_windows: Vec<ScoreWindow>,
}

/// Équipe : membres + postes pour lesquels elle est éligible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub members: Vec<SoldierId>,
    #[serde(default)]
    pub eligible_posts: Vec<GuardPostId>,
}

impl Team {
    pub fn is_eligible_for(&self, post: &GuardPostId) -> bool {
        self.eligible_posts.contains(post)
    }
}

/// Tour de garde affecté à des soldats (et éventuellement une équipe).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    #[serde(default)]
    pub soldiers: Vec<SoldierId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<TeamId>,
    pub guard_time: GuardTime,
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Shift {
    /// Créneau vide, à remplir plus tard.
    pub fn empty(guard_time: GuardTime, duration: u32) -> Self {
        Self {
            soldiers: Vec::new(),
            team: None,
            guard_time,
            duration,
            error: None,
        }
    }

    pub fn window(&self) -> TimeWindow {
        TimeWindow::new(self.guard_time, self.duration)
    }

    pub fn end(&self) -> GuardTime {
        self.window().end()
    }

    pub fn has_soldier(&self, soldier: &SoldierId) -> bool {
        self.soldiers.contains(soldier)
    }
}

/// Liste de garde d'un poste : unité de l'aperçu comme de l'historique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardList {
    pub guard_post_id: GuardPostId,
    #[serde(default)]
    pub guard_post_display_name: String,
    #[serde(default)]
    pub shifts: Vec<Shift>,
}

impl GuardList {
    pub fn new(post: &GuardPost, shifts: Vec<Shift>) -> Self {
        Self {
            guard_post_id: post.id.clone(),
            guard_post_display_name: post.display_name.clone(),
            shifts,
        }
    }

    /// Premier `guard_time` de la liste, s'il y en a un.
    pub fn earliest(&self) -> Option<GuardTime> {
        self.shifts.iter().map(|s| s.guard_time).min()
    }
}

/// Instantané complet : postes, équipes et historique.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Roster {
    #[serde(default)]
    pub guard_posts: Vec<GuardPost>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub history: Vec<GuardList>,
}

impl Roster {
    pub fn find_guard_post<'a>(&'a self, id: &GuardPostId) -> Option<&'a GuardPost> {
        self.guard_posts.iter().find(|p| &p.id == id)
    }

    /// Ajoute ou remplace des équipes (clé = id).
    pub fn upsert_teams(&mut self, teams: Vec<Team>) {
        for team in teams {
            match self.teams.iter_mut().find(|t| t.id == team.id) {
                Some(existing) => *existing = team,
                None => self.teams.push(team),
            }
        }
    }

    /// Ajoute ou remplace des postes (clé = id).
    pub fn upsert_guard_posts(&mut self, posts: Vec<GuardPost>) {
        for post in posts {
            match self.guard_posts.iter_mut().find(|p| p.id == post.id) {
                Some(existing) => *existing = post,
                None => self.guard_posts.push(post),
            }
        }
    }
}
