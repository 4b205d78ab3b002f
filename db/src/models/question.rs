use std::borrow::Cow;

use chrono::{DateTime, Duration, Utc};
use diesel::{self, ExpressionMethods, OptionalExtension, PgConnection, QueryDsl, RunQueryDsl};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use errors::Error;

use crate::schema::polls_question;
use crate::validate::validate;

#[derive(Clone, Debug, Deserialize, PartialEq, Queryable, Serialize)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

#[derive(Debug, Insertable, Validate)]
#[table_name = "polls_question"]
pub struct NewQuestion {
    #[validate(
        length(max = 200, message = "question_text must be at most 200 characters"),
        custom = "not_blank"
    )]
    pub question_text: String,
    pub pub_date: DateTime<Utc>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::from("question_text must not be blank"));
        return Err(error);
    }

    Ok(())
}

impl NewQuestion {
    pub fn new<S: Into<String>>(question_text: S, pub_date: DateTime<Utc>) -> Self {
        NewQuestion {
            question_text: question_text.into(),
            pub_date,
        }
    }

    pub fn validated(self) -> Result<Self, Error> {
        validate(&self)?;
        Ok(self)
    }
}

impl Question {
    /// A question is visible once its publish date has been reached.
    pub fn is_published(&self, now: DateTime<Utc>) -> bool {
        self.pub_date <= now
    }

    /// True when published within the trailing day ending at `now`, both ends inclusive.
    pub fn was_published_recently(&self, now: DateTime<Utc>) -> bool {
        now - Duration::days(1) <= self.pub_date && self.pub_date <= now
    }

    pub fn create(conn: &PgConnection, new_question: NewQuestion) -> Result<Question, Error> {
        let new_question = new_question.validated()?;

        let question = diesel::insert_into(polls_question::table)
            .values(&new_question)
            .get_result(conn)?;

        Ok(question)
    }

    pub fn find_by_id(conn: &PgConnection, question_id: i32) -> Result<Option<Question>, Error> {
        use crate::schema::polls_question::dsl::polls_question;

        let question = polls_question
            .find(question_id)
            .first::<Question>(conn)
            .optional()?;

        Ok(question)
    }

    pub fn get_latest_published(
        conn: &PgConnection,
        now: DateTime<Utc>,
        limit: i64,
    ) -> Result<Vec<Question>, Error> {
        use crate::schema::polls_question::dsl::{id, polls_question, pub_date};

        let questions = polls_question
            .filter(pub_date.le(now))
            .order((pub_date.desc(), id.desc()))
            .limit(limit)
            .load::<Question>(conn)?;

        Ok(questions)
    }
}
