#[macro_use]
extern crate log;

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{http, middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

mod config;
mod routes;
mod tests;

use crate::config::{Config, Storage};
use crate::routes::{not_found, routes};
use db::{MemoryRepository, PgRepository, QuestionRepository};

fn build_repository(storage: &Storage) -> io::Result<Arc<dyn QuestionRepository>> {
    match storage {
        Storage::Postgres { database_url } => {
            let pool = db::new_pool(database_url)
                .map_err(|err| io::Error::new(io::ErrorKind::Other, err.to_string()))?;
            info!("Using postgres question storage");
            Ok(Arc::new(PgRepository::new(pool)))
        }
        Storage::Memory => {
            warn!("Using in-memory question storage, questions will not survive a restart");
            Ok(Arc::new(MemoryRepository::new()))
        }
    }
}

fn build_cors(client_host: &Option<String>) -> Cors {
    match client_host {
        Some(host) => Cors::default()
            .allowed_origin(host)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![http::header::ACCEPT, http::header::CONTENT_TYPE])
            .max_age(3600),
        None => Cors::default(),
    }
}

#[actix_rt::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;
    let repository = build_repository(&config.storage)?;

    info!("Starting polls server on {}", config.bind_address);

    let client_host = config.client_host.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&client_host))
            .wrap(Logger::default())
            .wrap(Logger::new("%a %{User-Agent}i"))
            .app_data(web::Data::from(repository.clone()))
            .configure(routes)
            .default_service(web::route().to(not_found))
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
