use actix_web::web::{block, Data, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use db::{models::Question, repository::LATEST_QUESTION_LIMIT, QuestionRepository};
use errors::Error;

pub const NO_POLLS_MESSAGE: &str = "No polls are available.";

#[derive(Debug, Deserialize, Serialize)]
pub struct IndexResponse {
    pub latest_question_list: Vec<Question>,
    pub message: Option<String>,
}

pub async fn index(repository: Data<dyn QuestionRepository>) -> Result<Json<IndexResponse>, Error> {
    let now = Utc::now();
    let latest_question_list =
        block(move || repository.latest_published(now, LATEST_QUESTION_LIMIT)).await??;

    debug!("Listing {} published questions", latest_question_list.len());

    let message = if latest_question_list.is_empty() {
        Some(NO_POLLS_MESSAGE.to_string())
    } else {
        None
    };

    Ok(Json(IndexResponse {
        latest_question_list,
        message,
    }))
}
