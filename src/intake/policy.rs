use crate::models::CoverageCheck;
use chrono::NaiveDate;

/// Inclusive effective period of a policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for PolicyPeriod {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or(NaiveDate::MIN),
            end: NaiveDate::from_ymd_opt(2026, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }
}

impl PolicyPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn check(&self, loss_date: NaiveDate) -> CoverageCheck {
        if loss_date < self.start {
            CoverageCheck::PrecedesInception
        } else if loss_date > self.end {
            CoverageCheck::ExceedsExpiration
        } else {
            CoverageCheck::WithinPeriod
        }
    }
}
