use chrono::{DateTime, Utc};

use errors::Error;

use crate::models::{NewQuestion, Question};

mod memory;
mod postgres;

pub use self::memory::MemoryRepository;
pub use self::postgres::PgRepository;

/// Maximum number of questions shown on the index listing.
pub const LATEST_QUESTION_LIMIT: usize = 5;

/// Storage for questions. Implementations are shared across request handlers.
pub trait QuestionRepository: Send + Sync {
    /// Published questions as of `now`, most recently published first.
    fn latest_published(&self, now: DateTime<Utc>, limit: usize) -> Result<Vec<Question>, Error>;

    fn find_by_id(&self, id: i32) -> Result<Option<Question>, Error>;

    fn create(&self, new_question: NewQuestion) -> Result<Question, Error>;

    /// Looks up a question for public display. Questions that are not yet
    /// published are reported as missing, same as ids that never existed.
    fn find_published(&self, id: i32, now: DateTime<Utc>) -> Result<Question, Error> {
        match self.find_by_id(id)? {
            Some(question) if question.is_published(now) => Ok(question),
            _ => Err(Error::NotFound("Question not found".into())),
        }
    }
}
