use crate::model::{GuardList, GuardPostId, SoldierId, TeamId};
use crate::period::{GuardTime, PERIODS_PER_DAY};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Demande de génération (aperçu).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub start_period: u8,
    pub duration_periods: u32,
    pub date: NaiveDate,
}

impl GenerateRequest {
    pub fn horizon(&self) -> Result<Horizon, SchedError> {
        let start = GuardTime::new(self.date, self.start_period)
            .ok_or(SchedError::InvalidPeriod(self.start_period))?;
        if self.duration_periods == 0 {
            return Err(SchedError::EmptyHorizon);
        }
        Ok(Horizon::new(start, self.duration_periods))
    }
}

/// Demande de validation d'un aperçu.
///
/// Sans `start_period`, l'historique est tronqué à partir du plus petit
/// `guard_time` présent dans `guard_lists`. Avec `start_period` mais sans
/// `date`, le point retenu est le dernier passage à cette période avant le
/// premier tour de l'aperçu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitRequest {
    pub guard_lists: Vec<GuardList>,
    #[serde(default)]
    pub start_period: Option<u8>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl CommitRequest {
    pub fn new(guard_lists: Vec<GuardList>) -> Self {
        Self {
            guard_lists,
            start_period: None,
            date: None,
        }
    }

    fn earliest(&self) -> Option<GuardTime> {
        self.guard_lists.iter().filter_map(GuardList::earliest).min()
    }

    /// Point de troncature; `Ok(None)` si rien ne permet de le déterminer.
    pub fn horizon_start(&self) -> Result<Option<GuardTime>, SchedError> {
        let Some(period) = self.start_period else {
            return Ok(self.earliest());
        };
        if period >= PERIODS_PER_DAY {
            return Err(SchedError::InvalidPeriod(period));
        }
        let date = match self.date {
            Some(date) => Some(date),
            // dernier passage à `period` au plus tard au premier tour
            None => self.earliest().and_then(|first| {
                if first.period < period {
                    first.date.pred_opt()
                } else {
                    Some(first.date)
                }
            }),
        };
        Ok(date.and_then(|d| GuardTime::new(d, period)))
    }
}

/// Horizon de génération `[start, end]` : un créneau est ouvert tant que le
/// curseur n'a pas dépassé `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Horizon {
    pub start: GuardTime,
    pub end: GuardTime,
}

impl Horizon {
    pub fn new(start: GuardTime, duration_periods: u32) -> Self {
        Self {
            start,
            end: start.add_periods(duration_periods),
        }
    }

    pub fn contains(&self, time: GuardTime) -> bool {
        self.start <= time && time <= self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictKind {
    SoldierOverlap(SoldierId),
    TeamOverlap(TeamId),
}

/// Référence vers un tour précis d'une liste de garde.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRef {
    pub guard_post: GuardPostId,
    pub guard_time: GuardTime,
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub kind: ConflictKind,
    pub shift_a: ShiftRef,
    pub shift_b: ShiftRef,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("invalid period {0}: must be in [0, 48)")]
    InvalidPeriod(u8),
    #[error("generation horizon must cover at least one period")]
    EmptyHorizon,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
