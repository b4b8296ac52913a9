//! SLA due-date calculation

use std::cmp::Reverse;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::domain::entities::{BusinessHours, ComplexId, PqrCategory, PqrPriority, SlaConfig};
use crate::domain::ports::SlaRepository;
use crate::error::DomainError;

/// Default resolution window for CRITICAL tickets (minutes)
pub const DEFAULT_CRITICAL_MINUTES: i64 = 2 * 60;
/// Default resolution window for URGENT tickets (minutes)
pub const DEFAULT_URGENT_MINUTES: i64 = 4 * 60;
/// Default resolution window for HIGH tickets (minutes)
pub const DEFAULT_HIGH_MINUTES: i64 = 24 * 60;
/// Default resolution window for MEDIUM tickets (minutes)
pub const DEFAULT_MEDIUM_MINUTES: i64 = 3 * 24 * 60;
/// Default resolution window for LOW tickets (minutes)
pub const DEFAULT_LOW_MINUTES: i64 = 7 * 24 * 60;

/// Longest resolution window a configured SLA may declare: ten years
pub const MAX_RESOLUTION_MINUTES: i64 = 10 * 365 * 24 * 60;

/// Wall-clock window used when a complex has no SLA row for the ticket
pub fn default_resolution_minutes(priority: PqrPriority) -> i64 {
    match priority {
        PqrPriority::Critical => DEFAULT_CRITICAL_MINUTES,
        PqrPriority::Urgent => DEFAULT_URGENT_MINUTES,
        PqrPriority::High => DEFAULT_HIGH_MINUTES,
        PqrPriority::Medium => DEFAULT_MEDIUM_MINUTES,
        PqrPriority::Low => DEFAULT_LOW_MINUTES,
    }
}

/// Pick the most specific applicable row; ties go to the lowest id
pub fn select_sla(
    rows: Vec<SlaConfig>,
    category: PqrCategory,
    priority: PqrPriority,
) -> Option<SlaConfig> {
    rows.into_iter()
        .filter_map(|row| row.specificity(category, priority).map(|s| (s, row)))
        .max_by_key(|(specificity, row)| (*specificity, Reverse(row.id)))
        .map(|(_, row)| row)
}

/// Computes ticket deadlines from per-complex SLA configuration
pub struct SlaCalculator<L: SlaRepository> {
    slas: Arc<L>,
    business_hours: BusinessHours,
}

impl<L: SlaRepository> SlaCalculator<L> {
    pub fn new(slas: Arc<L>, business_hours: BusinessHours) -> Self {
        Self {
            slas,
            business_hours,
        }
    }

    /// Deadline for a ticket created at `now`. Always strictly after `now`.
    pub async fn calculate_due_date(
        &self,
        complex_id: &ComplexId,
        category: PqrCategory,
        priority: PqrPriority,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, DomainError> {
        let rows = self
            .slas
            .find_active_candidates(complex_id, category, priority)
            .await?;
        let sla = select_sla(rows, category, priority);
        self.due_date_for(sla.as_ref(), priority, now)
    }

    /// Apply an (optional) SLA row to `now`
    pub fn due_date_for(
        &self,
        sla: Option<&SlaConfig>,
        priority: PqrPriority,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, DomainError> {
        let Some(sla) = sla else {
            return add_wall_clock(now, default_resolution_minutes(priority));
        };

        if sla.resolution_time_minutes <= 0 || sla.resolution_time_minutes > MAX_RESOLUTION_MINUTES
        {
            return Err(DomainError::MalformedConfig(format!(
                "SLA {} has a resolution time outside 1..={} minutes ({} minutes)",
                sla.id, MAX_RESOLUTION_MINUTES, sla.resolution_time_minutes
            )));
        }

        tracing::debug!(
            sla_id = %sla.id,
            minutes = sla.resolution_time_minutes,
            business_hours_only = sla.business_hours_only,
            "Applying SLA"
        );

        if sla.business_hours_only {
            self.business_hours
                .add_business_minutes(now, sla.resolution_time_minutes)
                .ok_or_else(|| out_of_range(now, sla.resolution_time_minutes))
        } else {
            add_wall_clock(now, sla.resolution_time_minutes)
        }
    }
}

fn add_wall_clock(now: DateTime<Utc>, minutes: i64) -> Result<DateTime<Utc>, DomainError> {
    Duration::try_minutes(minutes)
        .and_then(|window| now.checked_add_signed(window))
        .ok_or_else(|| out_of_range(now, minutes))
}

fn out_of_range(now: DateTime<Utc>, minutes: i64) -> DomainError {
    DomainError::Internal(format!(
        "Due date for {} + {} minutes is out of range",
        now, minutes
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};

    use crate::domain::entities::SlaId;
    use crate::domain::ports::MockSlaRepository;
    use crate::test_utils::{test_sla, InMemorySlaRepository, COMPLEX};

    fn calculator(repo: InMemorySlaRepository) -> SlaCalculator<InMemorySlaRepository> {
        SlaCalculator::new(Arc::new(repo), BusinessHours::default())
    }

    fn minutes_between(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
        (a - b).num_minutes().abs()
    }

    #[test]
    fn default_matrix_values() {
        assert_eq!(default_resolution_minutes(PqrPriority::Urgent), 240);
        assert_eq!(default_resolution_minutes(PqrPriority::High), 1440);
        assert_eq!(default_resolution_minutes(PqrPriority::Medium), 4320);
        assert_eq!(default_resolution_minutes(PqrPriority::Low), 10080);
        assert!(
            default_resolution_minutes(PqrPriority::Critical)
                <= default_resolution_minutes(PqrPriority::Urgent)
        );
    }

    #[test]
    fn select_prefers_exact_then_lowest_id() {
        let (c, p) = (PqrCategory::Maintenance, PqrPriority::High);
        let rows = vec![
            test_sla(1, None, None, 999, false),
            test_sla(7, Some(c), Some(p), 60, false),
            test_sla(5, Some(c), Some(p), 90, false),
            test_sla(2, Some(c), None, 120, false),
        ];
        let selected = select_sla(rows, c, p).unwrap();
        assert_eq!(selected.id, SlaId(5));
    }

    #[test]
    fn select_ignores_rows_for_other_pairs() {
        let rows = vec![test_sla(
            1,
            Some(PqrCategory::Security),
            Some(PqrPriority::High),
            60,
            false,
        )];
        assert!(select_sla(rows, PqrCategory::Maintenance, PqrPriority::High).is_none());
    }

    #[tokio::test]
    async fn configured_sla_is_wall_clock_minutes() {
        let repo = InMemorySlaRepository::new().with_sla(test_sla(
            1,
            Some(PqrCategory::Maintenance),
            Some(PqrPriority::High),
            240,
            false,
        ));
        let now = Utc::now();
        let due = calculator(repo)
            .calculate_due_date(&COMPLEX, PqrCategory::Maintenance, PqrPriority::High, now)
            .await
            .unwrap();
        assert!(minutes_between(due, now + Duration::minutes(240)) < 1);
    }

    #[tokio::test]
    async fn missing_sla_uses_default_matrix() {
        let now = Utc::now();
        let due = calculator(InMemorySlaRepository::new())
            .calculate_due_date(&COMPLEX, PqrCategory::Security, PqrPriority::Urgent, now)
            .await
            .unwrap();
        assert!(minutes_between(due, now + Duration::hours(4)) < 1);
    }

    #[tokio::test]
    async fn critical_default_is_not_looser_than_urgent() {
        let now = Utc::now();
        let calc = calculator(InMemorySlaRepository::new());
        let critical = calc
            .calculate_due_date(&COMPLEX, PqrCategory::Security, PqrPriority::Critical, now)
            .await
            .unwrap();
        let urgent = calc
            .calculate_due_date(&COMPLEX, PqrCategory::Security, PqrPriority::Urgent, now)
            .await
            .unwrap();
        assert!(critical > now);
        assert!(critical <= urgent);
    }

    #[tokio::test]
    async fn business_hours_sla_skips_closed_time() {
        let repo = InMemorySlaRepository::new().with_sla(test_sla(
            1,
            Some(PqrCategory::Administrative),
            None,
            120,
            true,
        ));
        // Friday 2024-01-12 17:00 at UTC-05:00 is 22:00 UTC
        let now = Utc.with_ymd_and_hms(2024, 1, 12, 22, 0, 0).unwrap();
        let due = calculator(repo)
            .calculate_due_date(
                &COMPLEX,
                PqrCategory::Administrative,
                PqrPriority::Medium,
                now,
            )
            .await
            .unwrap();
        // 1h on Friday, 1h on Monday from 08:00 local = Monday 09:00 local = 14:00 UTC
        assert_eq!(due, Utc.with_ymd_and_hms(2024, 1, 15, 14, 0, 0).unwrap());
    }

    #[tokio::test]
    async fn non_positive_budget_is_malformed() {
        let repo = InMemorySlaRepository::new().with_sla(test_sla(1, None, None, 0, false));
        let result = calculator(repo)
            .calculate_due_date(&COMPLEX, PqrCategory::Other, PqrPriority::Low, Utc::now())
            .await;
        assert!(matches!(result, Err(DomainError::MalformedConfig(_))));
    }

    #[tokio::test]
    async fn lookup_failure_is_propagated() {
        let mut repo = MockSlaRepository::new();
        repo.expect_find_active_candidates()
            .returning(|_, _, _| Err(DomainError::Database("connection refused".to_string())));

        let calc = SlaCalculator::new(Arc::new(repo), BusinessHours::default());
        let result = calc
            .calculate_due_date(&COMPLEX, PqrCategory::Other, PqrPriority::Low, Utc::now())
            .await;
        assert!(matches!(result, Err(DomainError::Database(_))));
    }

    #[tokio::test]
    async fn budget_above_ten_years_is_malformed() {
        let repo = InMemorySlaRepository::new().with_sla(test_sla(
            1,
            Some(PqrCategory::Maintenance),
            None,
            1_000_000_000_000,
            false,
        ));
        let result = calculator(repo)
            .calculate_due_date(&COMPLEX, PqrCategory::Maintenance, PqrPriority::High, Utc::now())
            .await;
        assert!(matches!(result, Err(DomainError::MalformedConfig(_))));
    }

    #[tokio::test]
    async fn ten_year_business_hours_budget_is_accepted() {
        let repo = InMemorySlaRepository::new().with_sla(test_sla(
            1,
            None,
            None,
            MAX_RESOLUTION_MINUTES,
            true,
        ));
        let now = Utc::now();
        let due = calculator(repo)
            .calculate_due_date(&COMPLEX, PqrCategory::Other, PqrPriority::Low, now)
            .await
            .unwrap();
        assert!(due > now);
    }

    #[test]
    fn overflowing_deadline_is_an_internal_error() {
        let calc = calculator(InMemorySlaRepository::new());
        let end_of_time = Utc.from_utc_datetime(&NaiveDateTime::MAX);
        let result = calc.due_date_for(None, PqrPriority::Low, end_of_time);
        assert!(matches!(result, Err(DomainError::Internal(_))));
    }
}
