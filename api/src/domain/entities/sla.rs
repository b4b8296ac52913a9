//! SLA configuration and the business-hours calendar used to measure it

use chrono::{DateTime, Datelike, Duration, NaiveTime, TimeZone, Utc, Weekday};

use super::ids::{ComplexId, SlaId};
use super::pqr::{PqrCategory, PqrPriority};
use crate::error::DomainError;

/// Resolution budget for a `(category, priority)` pair.
/// `None` on either side is a wildcard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlaConfig {
    pub id: SlaId,
    pub complex_id: ComplexId,
    pub category: Option<PqrCategory>,
    pub priority: Option<PqrPriority>,
    pub resolution_time_minutes: i64,
    pub business_hours_only: bool,
    pub active: bool,
}

impl SlaConfig {
    /// How precisely this row targets `(category, priority)`: 3 for an exact
    /// match down to 0 for a full wildcard, `None` when it does not apply.
    pub fn specificity(&self, category: PqrCategory, priority: PqrPriority) -> Option<u8> {
        if !self.active {
            return None;
        }
        match (self.category, self.priority) {
            (Some(c), Some(p)) if c == category && p == priority => Some(3),
            (Some(c), None) if c == category => Some(2),
            (None, Some(p)) if p == priority => Some(1),
            (None, None) => Some(0),
            _ => None,
        }
    }
}

/// Weekly opening hours of a complex administration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessHours {
    opens_at: NaiveTime,
    closes_at: NaiveTime,
    working_days: Vec<Weekday>,
    utc_offset: Duration,
}

impl BusinessHours {
    pub fn new(
        opens_at: NaiveTime,
        closes_at: NaiveTime,
        mut working_days: Vec<Weekday>,
        utc_offset_minutes: i32,
    ) -> Result<Self, DomainError> {
        working_days.sort_by_key(|d| d.num_days_from_monday());
        working_days.dedup();

        if opens_at >= closes_at {
            return Err(DomainError::Validation(format!(
                "Business hours must open before they close ({} >= {})",
                opens_at, closes_at
            )));
        }
        if working_days.is_empty() {
            return Err(DomainError::Validation(
                "Business hours need at least one working day".to_string(),
            ));
        }
        if utc_offset_minutes.abs() >= 24 * 60 {
            return Err(DomainError::Validation(format!(
                "UTC offset out of range: {} minutes",
                utc_offset_minutes
            )));
        }

        Ok(Self {
            opens_at,
            closes_at,
            working_days,
            utc_offset: Duration::minutes(utc_offset_minutes as i64),
        })
    }

    pub fn opens_at(&self) -> NaiveTime {
        self.opens_at
    }

    pub fn closes_at(&self) -> NaiveTime {
        self.closes_at
    }

    pub fn working_days(&self) -> &[Weekday] {
        &self.working_days
    }

    /// Advance `from` by `minutes` counting only time inside open windows.
    /// Starting outside a window, the count begins at the next opening.
    /// `None` when the deadline falls outside the representable date range.
    pub fn add_business_minutes(
        &self,
        from: DateTime<Utc>,
        minutes: i64,
    ) -> Option<DateTime<Utc>> {
        let mut remaining = Duration::try_minutes(minutes.max(0))?;
        let weekly = (self.closes_at - self.opens_at) * self.working_days.len() as i32;
        // Walk in local wall-clock time
        let mut cursor = from.naive_utc().checked_add_signed(self.utc_offset)?;

        while remaining > Duration::zero() {
            let day = cursor.date();

            if self.working_days.contains(&day.weekday()) {
                let open = day.and_time(self.opens_at);
                let close = day.and_time(self.closes_at);
                if cursor < open {
                    cursor = open;
                }
                if cursor < close {
                    let available = close - cursor;
                    if remaining <= available {
                        cursor += remaining;
                        break;
                    }
                    remaining = remaining - available;
                }
            }

            cursor = day.succ_opt()?.and_time(self.opens_at);

            // Any seven consecutive days from an opening hold exactly one week of open time
            if remaining > weekly {
                let weeks = (remaining.num_seconds() - 1) / weekly.num_seconds();
                cursor = cursor.checked_add_signed(Duration::try_weeks(weeks)?)?;
                remaining = remaining - weekly * i32::try_from(weeks).ok()?;
            }
        }

        let utc = cursor.checked_sub_signed(self.utc_offset)?;
        Some(Utc.from_utc_datetime(&utc))
    }
}

impl Default for BusinessHours {
    /// Monday to Friday, 08:00-18:00, UTC-05:00
    fn default() -> Self {
        Self {
            opens_at: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            closes_at: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default(),
            working_days: vec![
                Weekday::Mon,
                Weekday::Tue,
                Weekday::Wed,
                Weekday::Thu,
                Weekday::Fri,
            ],
            utc_offset: Duration::minutes(-300),
        }
    }
}
