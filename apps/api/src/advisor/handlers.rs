//! Axum route handlers for the Advisor API.

use anyhow::Context;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::advisor::pipeline::FormOptions;
use crate::errors::AppError;
use crate::models::profile::ProfileForm;
use crate::models::report::CareerReport;
use crate::state::AppState;

/// POST /api/v1/analyze
///
/// Validates the submitted profile and returns salary, career suggestion,
/// skill gaps, courses and roadmap. An incomplete profile yields 400 with
/// every field-level message and no partial report.
pub async fn handle_analyze(
    State(state): State<AppState>,
    payload: Result<Json<ProfileForm>, JsonRejection>,
) -> Result<Json<CareerReport>, AppError> {
    let Json(form) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let advisor = state.advisor.clone();
    let outcome = run_blocking(move || advisor.analyze(&form)).await?;

    let report = outcome.map_err(|errors| {
        info!("Rejected profile with {} field errors", errors.len());
        AppError::InvalidProfile(errors)
    })?;

    Ok(Json(report))
}

/// Runs CPU-bound work on the blocking pool. A panicked or cancelled task
/// surfaces as `AppError::Internal`.
async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let value = tokio::task::spawn_blocking(work)
        .await
        .context("Analysis task did not complete")?;
    Ok(value)
}

/// GET /api/v1/options
///
/// Selector values and numeric bounds accepted by `/api/v1/analyze`.
pub async fn handle_options(State(state): State<AppState>) -> Json<FormOptions> {
    Json(state.advisor.form_options())
}
