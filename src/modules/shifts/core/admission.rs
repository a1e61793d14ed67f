use serde::Serialize;

use crate::modules::shifts::core::date_index::DateIndex;
use crate::modules::shifts::core::shift::{ShiftDate, ShiftRecord};

/// Maximum number of live postings per calendar day.
pub const DAY_CAPACITY: usize = 2;

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Denial {
    #[error("day capacity reached")]
    DayCapacityReached,

    #[error("user already posted for this date")]
    AlreadyPosted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Allowed,
    Denied(Denial),
}

impl Admission {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Admission::Allowed)
    }

    pub fn reason(&self) -> Option<String> {
        match self {
            Admission::Allowed => None,
            Admission::Denied(denial) => Some(denial.to_string()),
        }
    }
}

/// `{ "allowed": bool, "reason": string | null }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdmissionView {
    pub allowed: bool,
    pub reason: Option<String>,
}

impl From<Admission> for AdmissionView {
    fn from(admission: Admission) -> Self {
        Self {
            allowed: admission.is_allowed(),
            reason: admission.reason(),
        }
    }
}

/// Signature of the rule a store evaluates atomically with a write.
pub type AdmissionRule = fn(&[ShiftRecord], &str) -> Admission;

/// Capacity is checked before uniqueness; the first failing check wins.
pub fn admit_on_day(day: &[ShiftRecord], user_id: &str) -> Admission {
    if day.len() >= DAY_CAPACITY {
        return Admission::Denied(Denial::DayCapacityReached);
    }
    if day.iter().any(|record| record.user_id == user_id) {
        return Admission::Denied(Denial::AlreadyPosted);
    }
    Admission::Allowed
}

pub fn check_admission(index: &DateIndex, date: &ShiftDate, user_id: &str) -> Admission {
    admit_on_day(index.day(date), user_id)
}
