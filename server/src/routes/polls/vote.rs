use actix_web::{web::Path, HttpResponse};

pub async fn vote(question_id: Path<i32>) -> HttpResponse {
    let question_id = question_id.into_inner();
    info!("Vote received for question {}", question_id);

    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(format!("Voting question number {}", question_id))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use db::MemoryRepository;

    use crate::tests::helpers::tests::{test_get_text, test_post_text};

    #[actix_rt::test]
    async fn test_vote_acknowledges_question_id() {
        let repository = Arc::new(MemoryRepository::new());

        let res = test_get_text("/5/vote/", repository).await;
        assert_eq!(res.0, 200);

        assert_eq!(res.1, "Voting question number 5");
    }

    #[actix_rt::test]
    async fn test_vote_accepts_post() {
        let repository = Arc::new(MemoryRepository::new());

        let res = test_post_text("/12/vote/", repository).await;
        assert_eq!(res.0, 200);

        assert!(res.1.contains("12"));
    }
}
