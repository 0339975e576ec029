//! Modèle temporel : une journée = 48 périodes de 30 minutes.
//!
//! `GuardTime` est ordonné de façon canonique : le plus tôt est le plus petit
//! (date d'abord, puis période). Troncature, test d'occupation et files de
//! rotation s'appuient tous sur cet ordre.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Nombre de périodes dans une journée (1 période = 30 min).
pub const PERIODS_PER_DAY: u8 = 48;

/// Minutes couvertes par une période.
pub const MINUTES_PER_PERIOD: u32 = 30;

/// Point absolu dans le cycle journalier.
///
/// L'ordre des champs compte : `Ord` dérivé compare la date, puis la période.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GuardTime {
    pub date: NaiveDate,
    pub period: u8,
}

impl GuardTime {
    /// Construit un `GuardTime`; `None` si `period` sort de `[0, 48)`.
    pub fn new(date: NaiveDate, period: u8) -> Option<Self> {
        (period < PERIODS_PER_DAY).then_some(Self { date, period })
    }

    /// Avance de `periods` périodes, avec report sur la date.
    pub fn add_periods(self, periods: u32) -> Self {
        let total = u64::from(self.period) + u64::from(periods);
        let per_day = u64::from(PERIODS_PER_DAY);
        Self {
            date: self.date + Duration::days((total / per_day) as i64),
            period: (total % per_day) as u8,
        }
    }

    /// Recule de `periods` périodes, avec report sur la date.
    pub fn sub_periods(self, periods: u32) -> Self {
        let total = i64::from(self.period) - i64::from(periods);
        let per_day = i64::from(PERIODS_PER_DAY);
        Self {
            date: self.date + Duration::days(total.div_euclid(per_day)),
            period: total.rem_euclid(per_day) as u8,
        }
    }

    /// Nombre de périodes de `self` jusqu'à `later` (négatif si `later` est avant).
    pub fn periods_until(self, later: GuardTime) -> i64 {
        let days = (later.date - self.date).num_days();
        days * i64::from(PERIODS_PER_DAY) + i64::from(later.period) - i64::from(self.period)
    }

    /// Heure de début au format `HH:MM`.
    pub fn clock(&self) -> String {
        let minutes = u32::from(self.period) * MINUTES_PER_PERIOD;
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    }
}

impl fmt::Display for GuardTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (p{})", self.date, self.clock(), self.period)
    }
}

/// `true` si `period` appartient à l'intervalle circulaire `[from, to)`.
///
/// `from >= to` signifie que l'intervalle passe minuit; `from == to` couvre
/// donc toute la journée.
pub fn in_ring(period: u8, from: u8, to: u8) -> bool {
    if from < to {
        from <= period && period < to
    } else {
        period >= from || period < to
    }
}

/// Intervalle demi-ouvert `[start, start + duration)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: GuardTime,
    pub duration: u32,
}

impl TimeWindow {
    pub fn new(start: GuardTime, duration: u32) -> Self {
        Self { start, duration }
    }

    pub fn end(&self) -> GuardTime {
        self.start.add_periods(self.duration)
    }

    pub fn contains(&self, time: GuardTime) -> bool {
        self.start <= time && time < self.end()
    }

    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end() && other.start < self.end()
    }
}
