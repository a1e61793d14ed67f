use axum::{
    Extension, Router,
    routing::{get, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::shifts::use_cases::check_admission::inbound::http as admission_http;
use crate::modules::shifts::use_cases::contact_poster::inbound::http as contact_http;
use crate::modules::shifts::use_cases::edit_shift::inbound::http as edit_http;
use crate::modules::shifts::use_cases::list_shifts_by_date::inbound::http as list_http;
use crate::modules::shifts::use_cases::post_shift::inbound::http as post_http;
use crate::modules::shifts::use_cases::remove_shift::inbound::http as remove_http;
use crate::shell::graphql::{self, GRAPHQL_PATH};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/shifts", get(list_http::handle).post(post_http::handle))
        .route(
            "/shifts/{id}",
            put(edit_http::handle).delete(remove_http::handle),
        )
        .route("/shifts/{id}/contact", get(contact_http::handle))
        .route("/days/{date}", get(list_http::handle_day))
        .route("/days/{date}/admission", get(admission_http::handle))
        .with_state(state)
}

/// REST routes plus the GraphQL endpoint, with tracing and CORS for the browser client.
pub fn app(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());
    router(state)
        .route(GRAPHQL_PATH, get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
