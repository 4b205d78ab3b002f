#[macro_use]
extern crate log;

use std::env;

use chrono::{Duration, Utc};
use dotenv::dotenv;

use db::{models::NewQuestion, new_pool, PgRepository, QuestionRepository};

// Day offsets are relative to now; positive offsets are not yet published.
const QUESTIONS: &[(&str, i64)] = &[
    ("What's new?", 0),
    ("Who is the best course director?", -3),
    ("What is your favourite programming language?", -10),
    ("Which framework should we cover next?", -19),
    ("Where should the next meetup be held?", 7),
];

fn main() {
    dotenv().ok();
    env_logger::init();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = new_pool(&database_url).expect("failed to create db pool");
    let repository = PgRepository::new(pool);

    let now = Utc::now();
    for (question_text, days) in QUESTIONS {
        let question = repository
            .create(NewQuestion::new(*question_text, now + Duration::days(*days)))
            .unwrap_or_else(|err| panic!("failed to seed {:?} - {}", question_text, err));

        info!("Seeded question {} published at {}", question.id, question.pub_date);
    }
}
