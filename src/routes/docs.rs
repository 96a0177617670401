use axum::{response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::dto::question_dto::{
    ChoiceResponse, CreateChoicePayload, CreateQuestionPayload, QuestionListResponse,
    QuestionResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::questions::list_questions,
        crate::routes::questions::create_question,
        crate::routes::questions::get_question,
        crate::routes::questions::create_choice,
    ),
    components(schemas(
        QuestionResponse,
        QuestionListResponse,
        ChoiceResponse,
        CreateQuestionPayload,
        CreateChoicePayload,
    )),
    tags((name = "polls", description = "Poll questions and choices"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
