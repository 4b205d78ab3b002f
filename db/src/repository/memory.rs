use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use errors::Error;

use crate::models::{NewQuestion, Question};
use crate::repository::QuestionRepository;

/// Process-local question store, used when no database is configured.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    questions: RwLock<Vec<Question>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        MemoryRepository::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Question>>, Error> {
        self.questions
            .read()
            .map_err(|_| Error::InternalServerError("Question store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Question>>, Error> {
        self.questions
            .write()
            .map_err(|_| Error::InternalServerError("Question store lock poisoned".into()))
    }
}

impl QuestionRepository for MemoryRepository {
    fn latest_published(&self, now: DateTime<Utc>, limit: usize) -> Result<Vec<Question>, Error> {
        let mut questions: Vec<Question> = self
            .read()?
            .iter()
            .filter(|question| question.is_published(now))
            .cloned()
            .collect();

        questions.sort_by(|a, b| b.pub_date.cmp(&a.pub_date).then(b.id.cmp(&a.id)));
        questions.truncate(limit);

        Ok(questions)
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Question>, Error> {
        let question = self.read()?.iter().find(|question| question.id == id).cloned();
        Ok(question)
    }

    fn create(&self, new_question: NewQuestion) -> Result<Question, Error> {
        let new_question = new_question.validated()?;
        let mut questions = self.write()?;

        let id = questions.iter().map(|question| question.id).max().unwrap_or(0) + 1;
        let question = Question {
            id,
            question_text: new_question.question_text,
            pub_date: new_question.pub_date,
        };
        questions.push(question.clone());

        Ok(question)
    }
}
