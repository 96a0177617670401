pub mod docs;
pub mod health;
pub mod polls;
pub mod questions;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{middleware::rate_limit, AppState};

pub fn router(state: AppState) -> Router {
    let rps = state.public_rps;

    let pages = Router::new()
        .route("/polls/", get(polls::index))
        .route("/polls/:id/", get(polls::detail))
        .route("/polls/:id/results/", get(polls::results))
        .route("/polls/:id/vote/", post(polls::vote));

    let api = Router::new()
        .route(
            "/api/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/api/questions/:id", get(questions::get_question))
        .route("/api/questions/:id/choices", post(questions::create_choice))
        .route("/api/openapi.json", get(docs::openapi_json));

    Router::new()
        .route("/health", get(health::health))
        .merge(pages)
        .merge(api)
        .with_state(state)
        .layer(axum::middleware::from_fn_with_state(
            rate_limit::new_rps_state(rps),
            rate_limit::rps_middleware,
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
