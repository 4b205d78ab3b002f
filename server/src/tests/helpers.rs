#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use actix_web::{
        dev::ServiceResponse,
        test,
        web::{self, Data},
        App,
    };
    use chrono::{Duration, Utc};
    use serde::de::DeserializeOwned;

    use db::{
        models::{NewQuestion, Question},
        MemoryRepository, QuestionRepository,
    };

    use crate::routes::{not_found, routes};

    /// Creates a question published `days` from now; negative for the past,
    /// positive for questions that have yet to be published.
    pub fn create_question(repository: &MemoryRepository, question_text: &str, days: i64) -> Question {
        repository
            .create(NewQuestion::new(question_text, Utc::now() + Duration::days(days)))
            .unwrap()
    }

    async fn call(req: test::TestRequest, repository: Arc<dyn QuestionRepository>) -> ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(Data::from(repository))
                .configure(routes)
                .default_service(web::route().to(not_found)),
        )
        .await;

        test::call_service(&app, req.to_request()).await
    }

    async fn read_text(res: ServiceResponse) -> (u16, String) {
        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let text = String::from_utf8(body.to_vec())
            .unwrap_or_else(|_| panic!("response body was not utf-8, status: {}", status));

        (status, text)
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(route: &str, repository: Arc<dyn QuestionRepository>) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let res = call(test::TestRequest::get().uri(route), repository).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Helper for plain text GET responses
    pub async fn test_get_text(route: &str, repository: Arc<dyn QuestionRepository>) -> (u16, String) {
        let res = call(test::TestRequest::get().uri(route), repository).await;
        read_text(res).await
    }

    /// Helper for plain text POST responses
    pub async fn test_post_text(route: &str, repository: Arc<dyn QuestionRepository>) -> (u16, String) {
        let res = call(test::TestRequest::post().uri(route), repository).await;
        read_text(res).await
    }
}
