//! Handlers for the alert resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use vigil_core::error::CoreError;
use vigil_core::types::DbId;
use vigil_db::models::Alert;
use vigil_db::repositories::AlertRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /alerts/unacknowledged`.
#[derive(Debug, Deserialize)]
pub struct AlertsQuery {
    /// Maximum number of alerts. Defaults to 10, valid range 1..=100.
    pub limit: Option<i64>,
}

/// Default page size for the unacknowledged listing.
const DEFAULT_LIMIT: i64 = 10;

/// Maximum page size for the unacknowledged listing.
const MAX_LIMIT: i64 = 100;

/// Request body for `POST /alerts/{id}/acknowledge`.
///
/// The body is optional. Operator accounts live outside this service, so
/// the actor is recorded as free-form text when provided.
#[derive(Debug, Deserialize)]
pub struct AcknowledgeRequest {
    pub acknowledged_by: Option<String>,
}

/// GET /api/v1/alerts/unacknowledged
///
/// List open alerts, newest first.
pub async fn list_unacknowledged(
    State(state): State<AppState>,
    Query(params): Query<AlertsQuery>,
) -> AppResult<Json<DataResponse<Vec<Alert>>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(AppError::BadRequest(format!(
            "limit must be between 1 and {MAX_LIMIT}"
        )));
    }

    let alerts = AlertRepo::list_unacknowledged(&state.pool, limit).await?;
    Ok(Json(DataResponse::new(alerts)))
}

/// POST /api/v1/alerts/{id}/acknowledge
///
/// Mark an alert acknowledged, recording the optional actor. Acknowledging
/// an already-acknowledged alert overwrites the actor and timestamp.
pub async fn acknowledge(
    State(state): State<AppState>,
    Path(alert_id): Path<DbId>,
    body: Option<Json<AcknowledgeRequest>>,
) -> AppResult<Json<DataResponse<Alert>>> {
    let acknowledged_by = body.and_then(|Json(b)| b.acknowledged_by);

    let alert = AlertRepo::acknowledge(&state.pool, alert_id, acknowledged_by.as_deref())
        .await?
        .ok_or_else(|| CoreError::not_found("Alert", alert_id))?;

    Ok(Json(DataResponse::new(alert)))
}
