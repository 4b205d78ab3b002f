use chrono::{DateTime, Utc};

use errors::Error;

use crate::models::{NewQuestion, Question};
use crate::repository::QuestionRepository;
use crate::{get_conn, PgPool};

#[derive(Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        PgRepository { pool }
    }
}

impl QuestionRepository for PgRepository {
    fn latest_published(&self, now: DateTime<Utc>, limit: usize) -> Result<Vec<Question>, Error> {
        let connection = get_conn(&self.pool)?;
        Question::get_latest_published(&connection, now, limit as i64)
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Question>, Error> {
        let connection = get_conn(&self.pool)?;
        Question::find_by_id(&connection, id)
    }

    fn create(&self, new_question: NewQuestion) -> Result<Question, Error> {
        let connection = get_conn(&self.pool)?;
        Question::create(&connection, new_question)
    }
}
