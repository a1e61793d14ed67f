use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::shifts::core::contact::whatsapp_link;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ContactResponse {
    pub url: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(shift_id): Path<String>,
) -> impl IntoResponse {
    let index = state.projection.current().await;
    match index.find(&shift_id) {
        Some(record) => Json(ContactResponse {
            url: whatsapp_link(record, &state.config.phone_country_code),
        })
        .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
