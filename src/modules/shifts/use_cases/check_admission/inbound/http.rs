use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::shifts::core::admission::AdmissionView;
use crate::modules::shifts::use_cases::errors::ApplicationError;
use crate::modules::shifts::use_cases::post_shift::inbound::http::ErrorResponse;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdmissionParams {
    pub user_id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(date): Path<String>,
    Query(params): Query<AdmissionParams>,
) -> impl IntoResponse {
    match state.admission_handler.handle(&date, &params.user_id).await {
        Ok(admission) => Json(AdmissionView::from(admission)).into_response(),
        Err(ApplicationError::Validation(e)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}
