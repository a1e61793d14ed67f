use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::modules::shifts::core::ports::StoreError;
use crate::modules::shifts::use_cases::errors::ApplicationError;
use crate::modules::shifts::use_cases::post_shift::command::PostShift;
use crate::modules::shifts::use_cases::post_shift::decision::PostOutcome;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftBody {
    pub user_id: String,
    pub name: String,
    pub date: String,
    pub location: String,
    pub time: String,
    pub phone: String,
    pub notes: Option<String>,
}

impl From<ShiftBody> for PostShift {
    fn from(body: ShiftBody) -> Self {
        Self {
            user_id: body.user_id,
            name: body.name,
            date: body.date,
            location: body.location,
            time: body.time,
            phone: body.phone,
            notes: body.notes,
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize)]
pub struct DeniedResponse {
    pub reason: String,
}

/// Shared by post and edit: 409 on denial, 422 on validation, 404 on unknown id.
pub fn outcome_response(
    result: Result<PostOutcome, ApplicationError>,
    success: StatusCode,
) -> Response {
    match result {
        Ok(PostOutcome::Posted(record)) => (success, Json(record)).into_response(),
        Ok(PostOutcome::Denied { reason }) => (
            StatusCode::CONFLICT,
            Json(DeniedResponse {
                reason: reason.to_string(),
            }),
        )
            .into_response(),
        Err(ApplicationError::Validation(e)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response(),
        Err(ApplicationError::Store(StoreError::NotFound(_))) => {
            StatusCode::NOT_FOUND.into_response()
        }
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    }
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<ShiftBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let result = state.post_handler.handle(body.into()).await;
    state.refresh_projection().await;
    outcome_response(result, StatusCode::CREATED)
}

#[cfg(test)]
mod post_shift_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::shifts::adapters::outbound::shift_store_in_memory::InMemoryShiftStore;
    use crate::shell::config::Config;
    use crate::shell::state::AppState;

    use super::handle;

    const VALID_BODY: &str = r#"{"userId":"u-1","name":"Ana","date":"2024-06-01","location":"C.S. Granadilla","time":"20h a 8h","phone":"612345678","notes":null}"#;

    fn make_test_state() -> AppState {
        AppState::new(Config::default(), Arc::new(InMemoryShiftStore::new()))
    }

    fn make_offline_store_state() -> AppState {
        let mut store = InMemoryShiftStore::new();
        store.toggle_offline();
        AppState::new(Config::default(), Arc::new(store))
    }

    fn app(state: AppState) -> Router {
        Router::new().route("/shifts", post(handle)).with_state(state)
    }

    fn post_request(body: &'static str) -> Request<Body> {
        Request::post("/shifts")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_201_with_the_stored_record_on_valid_request() {
        let response = app(make_test_state())
            .oneshot(post_request(VALID_BODY))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json.get("id").is_some());
        assert_eq!(json["userId"], "u-1");
        assert_eq!(json["date"], "2024-06-01");
    }

    #[tokio::test]
    async fn it_should_return_409_with_reason_when_the_user_already_posted() {
        let router = app(make_test_state());
        let first = router.clone().oneshot(post_request(VALID_BODY)).await.unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let response = router.oneshot(post_request(VALID_BODY)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["reason"], "user already posted for this date");
    }

    #[tokio::test]
    async fn it_should_return_422_when_validation_fails() {
        let body = r#"{"userId":"u-1","name":"Ana","date":"2024-06-01","location":"C.S. Granadilla","time":"20h a 8h","phone":"12345"}"#;
        let response = app(make_test_state())
            .oneshot(post_request(body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["error"].as_str().unwrap().contains("12345"));
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let response = app(make_test_state())
            .oneshot(post_request("not-json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_store_is_offline() {
        let response = app(make_offline_store_state())
            .oneshot(post_request(VALID_BODY))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
