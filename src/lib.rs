#![forbid(unsafe_code)]
//! Garde — moteur de génération de tours de garde.
//!
//! - Journée découpée en 48 périodes de 30 minutes, cycle circulaire.
//! - Trois stratégies : round-robin, round-robin par équipe, score.
//! - Aucune double affectation entre postes; pénuries signalées par créneau.
//! - Historique tronqué puis complété à chaque validation (JSON).

pub mod io;
pub mod model;
pub mod period;
pub mod scheduler;
pub mod statistics;
pub mod storage;

pub use model::{
    GuardList, GuardPost, GuardPostId, Occupation, Roster, ScoreWindow, Shift, SoldierId,
    StrategyKind, Team, TeamId,
};
pub use period::{GuardTime, TimeWindow, PERIODS_PER_DAY};
pub use scheduler::{
    CommitRequest, CommitSummary, Conflict, ConflictKind, GenerateRequest, Horizon, SchedError,
    Scheduler,
};
pub use statistics::{soldier_statistics, SoldierStats};
pub use storage::{JsonStorage, Storage};
