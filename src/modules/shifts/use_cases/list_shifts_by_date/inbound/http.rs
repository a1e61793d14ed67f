use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::shifts::core::shift::ShiftDate;
use crate::modules::shifts::core::validation::ValidationError;
use crate::modules::shifts::use_cases::post_shift::inbound::http::ErrorResponse;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListShiftsParams {
    pub from: Option<String>,
    pub to: Option<String>,
}

fn parse_bound(value: Option<&str>) -> Result<Option<ShiftDate>, ValidationError> {
    value.map(ShiftDate::parse).transpose()
}

fn unprocessable(e: ValidationError) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

/// Date index, optionally cut to `from..=to`.
pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListShiftsParams>,
) -> impl IntoResponse {
    let bounds = parse_bound(params.from.as_deref())
        .and_then(|from| Ok((from, parse_bound(params.to.as_deref())?)));
    let (from, to) = match bounds {
        Ok(bounds) => bounds,
        Err(e) => return unprocessable(e),
    };

    let index = state.projection.current().await;
    Json(index.between(from, to)).into_response()
}

pub async fn handle_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> impl IntoResponse {
    let date = match ShiftDate::parse(&date) {
        Ok(date) => date,
        Err(e) => return unprocessable(e),
    };

    let index = state.projection.current().await;
    Json(index.day(&date).to_vec()).into_response()
}
