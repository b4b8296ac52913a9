//! PQR Classification Service
//!
//! Orchestrates the decision taken once per submitted ticket:
//! - Category/subcategory (keyword classifier)
//! - Priority (explicit, urgency keywords, category default)
//! - Assignee (rule, team, administrator)
//! - Due date (SLA)
//!
//! Any configuration lookup failure discards the partial decision and yields
//! `ClassificationResult::fallback()`. Ticket creation is never blocked here.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::assignment::AssignmentResolver;
use super::classifier::classify;
use super::priority::evaluate_priority;
use super::sla::SlaCalculator;
use crate::domain::entities::{
    BusinessHours, ClassificationResult, ComplexId, PqrCategory, PqrPriority, PqrSettings,
    TicketSubmission,
};
use crate::domain::ports::{
    AssignmentRuleRepository, SettingsRepository, SlaRepository, StaffRepository, TeamRepository,
};
use crate::error::DomainError;

/// Service that classifies, prioritizes, routes and schedules new PQRs
pub struct PqrClassificationService<S, L>
where
    S: SettingsRepository,
    L: SlaRepository,
{
    settings: Arc<S>,
    resolver: AssignmentResolver,
    sla: SlaCalculator<L>,
}

impl<S, L> PqrClassificationService<S, L>
where
    S: SettingsRepository,
    L: SlaRepository,
{
    pub fn new<R, T, U>(
        settings: Arc<S>,
        rules: Arc<R>,
        teams: Arc<T>,
        staff: Arc<U>,
        slas: Arc<L>,
        business_hours: BusinessHours,
    ) -> Self
    where
        R: AssignmentRuleRepository + 'static,
        T: TeamRepository + 'static,
        U: StaffRepository + 'static,
    {
        Self::with_resolver(
            settings,
            AssignmentResolver::standard(rules, teams, staff),
            SlaCalculator::new(slas, business_hours),
        )
    }

    /// Build from an already assembled resolver (custom strategy order)
    pub fn with_resolver(
        settings: Arc<S>,
        resolver: AssignmentResolver,
        sla: SlaCalculator<L>,
    ) -> Self {
        Self {
            settings,
            resolver,
            sla,
        }
    }

    /// Classify a submission as of now
    pub async fn process_pqr(&self, submission: &TicketSubmission) -> ClassificationResult {
        self.process_pqr_at(submission, Utc::now()).await
    }

    /// Classify a submission as of `now`. Never fails.
    pub async fn process_pqr_at(
        &self,
        submission: &TicketSubmission,
        now: DateTime<Utc>,
    ) -> ClassificationResult {
        match self.try_process(submission, now).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(
                    complex_id = %submission.complex_id,
                    submitter_id = %submission.submitter_id,
                    error = %e,
                    "PQR classification failed, falling back to default classification"
                );
                ClassificationResult::fallback()
            }
        }
    }

    /// Deadline for a `(category, priority)` pair in a complex
    pub async fn calculate_due_date(
        &self,
        complex_id: &ComplexId,
        category: PqrCategory,
        priority: PqrPriority,
        now: DateTime<Utc>,
    ) -> Result<DateTime<Utc>, DomainError> {
        self.sla
            .calculate_due_date(complex_id, category, priority, now)
            .await
    }

    async fn try_process(
        &self,
        submission: &TicketSubmission,
        now: DateTime<Utc>,
    ) -> Result<ClassificationResult, DomainError> {
        let complex_id = submission.complex_id;
        let settings = self
            .settings
            .find_by_complex(&complex_id)
            .await?
            .unwrap_or_else(|| PqrSettings::enabled(complex_id));

        let text = submission.searchable_text();

        let classification = classify(
            &text,
            submission.category,
            settings.auto_categorize_enabled,
        );
        let decision = evaluate_priority(&text, submission.priority, classification.category);

        let mut tags = classification.tags;
        if let Some(keyword) = decision.urgency_tag {
            tags.insert(keyword);
        }

        let assignment = self
            .resolver
            .resolve(
                &complex_id,
                classification.category,
                classification.subcategory.as_deref(),
                settings.auto_assign_enabled,
            )
            .await?;

        let due_date = self
            .sla
            .calculate_due_date(&complex_id, classification.category, decision.priority, now)
            .await?;

        let result = ClassificationResult::new(
            classification.category,
            classification.subcategory,
            decision.priority,
            tags.into_vec(),
            assignment,
            Some(due_date),
        );

        tracing::info!(
            complex_id = %complex_id,
            category = %result.category,
            priority = %result.priority,
            assigned = result.is_assigned(),
            "PQR classified"
        );

        Ok(result)
    }
}
