use axum::{
    Json,
    extract::{Path, State},
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::shifts::use_cases::post_shift::inbound::http::{ShiftBody, outcome_response};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(shift_id): Path<String>,
    body: Result<Json<ShiftBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let result = state.edit_handler.handle(&shift_id, body.into()).await;
    state.refresh_projection().await;
    outcome_response(result, StatusCode::OK)
}
