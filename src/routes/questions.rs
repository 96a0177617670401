use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::question_dto::{
        ChoiceResponse, CreateChoicePayload, CreateQuestionPayload, QuestionListResponse,
        QuestionResponse,
    },
    error::Result,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/questions",
    responses(
        (status = 200, description = "Published questions, newest first",
            body = QuestionListResponse)
    )
)]
#[axum::debug_handler]
pub async fn list_questions(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let service = &state.question_service;
    let now = service.now();
    let latest_question_list = service
        .latest()
        .await?
        .into_iter()
        .map(|q| QuestionResponse::at(q, now))
        .collect();
    Ok(Json(QuestionListResponse {
        latest_question_list,
    }))
}

#[utoipa::path(
    post,
    path = "/api/questions",
    request_body = CreateQuestionPayload,
    responses(
        (status = 201, description = "Question created successfully", body = QuestionResponse),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    Json(payload): Json<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let service = &state.question_service;
    let question = service
        .create(&payload.question_text, payload.pub_date)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(QuestionResponse::at(question, service.now())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/questions/{id}",
    params(
        ("id" = i64, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question found", body = QuestionResponse),
        (status = 404, description = "Question not found or not yet published")
    )
)]
#[axum::debug_handler]
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let service = &state.question_service;
    let (question, choices) = service.get_visible_with_choices(id).await?;
    Ok(Json(
        QuestionResponse::at(question, service.now()).with_choices(choices),
    ))
}

#[utoipa::path(
    post,
    path = "/api/questions/{id}/choices",
    params(
        ("id" = i64, Path, description = "Question ID")
    ),
    request_body = CreateChoicePayload,
    responses(
        (status = 201, description = "Choice created successfully", body = ChoiceResponse),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn create_choice(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<CreateChoicePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let choice = state
        .question_service
        .add_choice(id, &payload.choice_text)
        .await?;
    Ok((StatusCode::CREATED, Json(ChoiceResponse::from(choice))))
}
