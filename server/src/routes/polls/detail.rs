use actix_web::web::{block, Data, Json, Path};
use chrono::Utc;

use db::{models::Question, QuestionRepository};
use errors::Error;

pub async fn detail(
    question_id: Path<i32>,
    repository: Data<dyn QuestionRepository>,
) -> Result<Json<Question>, Error> {
    let question_id = question_id.into_inner();
    let now = Utc::now();

    let question = block(move || repository.find_published(question_id, now)).await??;

    Ok(Json(question))
}
