use actix_web::{web, HttpResponse};

use errors::{Error, ErrorResponse};

pub mod polls;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::PathConfig::default()
            .error_handler(|_, _| Error::NotFound("Not Found".into()).into()),
    )
    .route("/", web::get().to(polls::index))
    .service(
        web::scope("/{question_id}")
            .route("/", web::get().to(polls::detail))
            .route("/results/", web::get().to(polls::results))
            .service(
                web::resource("/vote/")
                    .route(web::get().to(polls::vote))
                    .route(web::post().to(polls::vote)),
            ),
    );
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::from("Not Found"))
}
