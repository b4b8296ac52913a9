//! PQR handlers
//!
//! Classification and due-date endpoints consumed by the ticket creation flow.

use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    ClassificationResult, ComplexId, PqrCategory, PqrPriority, TicketSubmission,
};
use crate::domain::ports::{SettingsRepository, SlaRepository};
use crate::error::AppError;
use crate::AppState;

/// Request body for a standalone due-date computation
#[derive(Debug, Deserialize)]
pub struct DueDateRequest {
    pub category: PqrCategory,
    pub priority: PqrPriority,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DueDateResponse {
    pub due_date: DateTime<Utc>,
}

/// PQR endpoints, without rate limiting
pub fn pqr_routes<S, L>() -> Router<AppState<S, L>>
where
    S: SettingsRepository + 'static,
    L: SlaRepository + 'static,
{
    Router::new()
        .route(
            "/complexes/:complex_id/pqr/classify",
            post(classify_pqr::<S, L>),
        )
        .route(
            "/complexes/:complex_id/pqr/due-date",
            post(calculate_due_date::<S, L>),
        )
}

/// Reject submissions addressed to another complex or missing their text
fn validate_submission(complex_id: ComplexId, submission: &TicketSubmission) -> Result<(), AppError> {
    if submission.complex_id != complex_id {
        return Err(AppError::BadRequest(format!(
            "complexId {} does not match path complex {}",
            submission.complex_id, complex_id
        )));
    }
    if submission.title.trim().is_empty() {
        return Err(AppError::BadRequest("title is required".to_string()));
    }
    if submission.description.trim().is_empty() {
        return Err(AppError::BadRequest("description is required".to_string()));
    }
    Ok(())
}

/// POST /complexes/:complex_id/pqr/classify
///
/// Decide category, priority, assignee and due date for a new PQR.
/// Configuration faults never fail the request; they yield the default classification.
pub async fn classify_pqr<S, L>(
    State(state): State<AppState<S, L>>,
    Path(complex_id): Path<i64>,
    Json(submission): Json<TicketSubmission>,
) -> Result<Json<ClassificationResult>, AppError>
where
    S: SettingsRepository + 'static,
    L: SlaRepository + 'static,
{
    validate_submission(ComplexId(complex_id), &submission)?;

    let result = state.pqr_service.process_pqr(&submission).await;
    Ok(Json(result))
}

/// POST /complexes/:complex_id/pqr/due-date
///
/// Compute the SLA deadline for a category/priority pair as of now.
pub async fn calculate_due_date<S, L>(
    State(state): State<AppState<S, L>>,
    Path(complex_id): Path<i64>,
    Json(request): Json<DueDateRequest>,
) -> Result<Json<DueDateResponse>, AppError>
where
    S: SettingsRepository + 'static,
    L: SlaRepository + 'static,
{
    let due_date = state
        .pqr_service
        .calculate_due_date(
            &ComplexId(complex_id),
            request.category,
            request.priority,
            Utc::now(),
        )
        .await?;

    Ok(Json(DueDateResponse { due_date }))
}
