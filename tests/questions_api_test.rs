use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Duration, Utc};
use polls::{
    database::memory::MemoryStore,
    utils::time::{from_rfc3339, to_rfc3339, FixedClock},
    AppState,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

fn fixed_now() -> DateTime<Utc> {
    from_rfc3339("2024-06-15T12:00:00Z").expect("valid timestamp")
}

fn setup_app() -> Router {
    let state = AppState::new(
        Arc::new(MemoryStore::new()),
        Arc::new(FixedClock(fixed_now())),
    );
    polls::routes::router(state)
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };
    let resp = app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, json)
}

#[tokio::test]
async fn create_then_fetch_question_with_choices() {
    let app = setup_app();
    let pub_date = fixed_now() - Duration::hours(2);

    let (status, created) = send(
        &app,
        "POST",
        "/api/questions",
        Some(json!({ "question_text": "What's new?", "pub_date": to_rfc3339(pub_date) })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["question_text"], "What's new?");
    assert_eq!(created["was_published_recently"], true);
    let id = created["id"].as_i64().unwrap();

    let (status, choice) = send(
        &app,
        "POST",
        &format!("/api/questions/{}/choices", id),
        Some(json!({ "choice_text": "Not much" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(choice["votes"], 0);

    let (status, fetched) = send(&app, "GET", &format!("/api/questions/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["choices"][0]["choice_text"], "Not much");
}

#[tokio::test]
async fn create_defaults_pub_date_to_now() {
    let app = setup_app();
    let (status, created) = send(
        &app,
        "POST",
        "/api/questions",
        Some(json!({ "question_text": "Right now?" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let pub_date = from_rfc3339(created["pub_date"].as_str().unwrap()).unwrap();
    assert_eq!(pub_date, fixed_now());
}

#[tokio::test]
async fn create_rejects_empty_text() {
    let app = setup_app();
    let (status, body) = send(
        &app,
        "POST",
        "/api/questions",
        Some(json!({ "question_text": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn old_question_is_listed_but_not_recent() {
    let app = setup_app();
    let pub_date = fixed_now() - Duration::days(30);
    send(
        &app,
        "POST",
        "/api/questions",
        Some(json!({ "question_text": "old", "pub_date": to_rfc3339(pub_date) })),
    )
    .await;

    let (_, list) = send(&app, "GET", "/api/questions", None).await;
    let items = list["latest_question_list"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["was_published_recently"], false);
}

#[tokio::test]
async fn future_question_answers_like_an_unknown_id() {
    let app = setup_app();
    let pub_date = fixed_now() + Duration::days(30);
    let (_, created) = send(
        &app,
        "POST",
        "/api/questions",
        Some(json!({ "question_text": "later", "pub_date": to_rfc3339(pub_date) })),
    )
    .await;
    let pending_id = created["id"].as_i64().unwrap();
    let unknown_id = pending_id + 1000;

    for id in [pending_id, unknown_id] {
        let (status, body) = send(&app, "GET", &format!("/api/questions/{}", id), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "No question matches the given query.");
    }

    let mut answers = Vec::new();
    for id in [pending_id, unknown_id] {
        answers.push(
            send(
                &app,
                "POST",
                &format!("/api/questions/{}/choices", id),
                Some(json!({ "choice_text": "prepared" })),
            )
            .await,
        );
    }
    assert_eq!(answers[0].0, StatusCode::NOT_FOUND);
    assert_eq!(answers[0], answers[1]);
}

#[tokio::test]
async fn choice_for_unknown_question_is_not_found() {
    let app = setup_app();
    let (status, _) = send(
        &app,
        "POST",
        "/api/questions/999/choices",
        Some(json!({ "choice_text": "orphan" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let app = setup_app();
    let (status, health) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");

    let (status, doc) = send(&app, "GET", "/api/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/questions"].is_object());
}
