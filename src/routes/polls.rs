use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

use crate::{
    dto::question_dto::VoteForm,
    error::{Error, Result},
    services::question_service::VoteOutcome,
    views::polls::{self as pages, NO_CHOICE_MESSAGE},
    AppState,
};

/// A path segment that is not a question id cannot match any question.
fn question_id(path: std::result::Result<Path<i64>, PathRejection>) -> Result<i64> {
    path.map(|Path(id)| id).map_err(|_| Error::question_not_found())
}

#[axum::debug_handler]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>> {
    let mut latest_question_list = state.question_service.latest().await?;
    latest_question_list.truncate(state.index_page_size);
    Ok(Html(pages::index(&latest_question_list)))
}

#[axum::debug_handler]
pub async fn detail(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Html<String>> {
    let id = question_id(path)?;
    let (question, choices) = state.question_service.get_visible_with_choices(id).await?;
    Ok(Html(pages::detail(&question, &choices, None)))
}

#[axum::debug_handler]
pub async fn results(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Html<String>> {
    let id = question_id(path)?;
    let (question, choices) = state.question_service.get_visible_with_choices(id).await?;
    Ok(Html(pages::results(&question, &choices)))
}

#[axum::debug_handler]
pub async fn vote(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
    Form(form): Form<VoteForm>,
) -> Result<Response> {
    let id = question_id(path)?;
    match state.question_service.vote(id, form.choice_id()).await? {
        VoteOutcome::Recorded(question) => {
            Ok(Redirect::to(&format!("/polls/{}/results/", question.id)).into_response())
        }
        VoteOutcome::NoChoice(question, choices) => {
            Ok(Html(pages::detail(&question, &choices, Some(NO_CHOICE_MESSAGE))).into_response())
        }
    }
}
