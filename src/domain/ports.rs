use crate::domain::model::{ChoiceId, NewQuestion, Question, QuestionId};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn create(&self, question: NewQuestion) -> Result<Question>;

    /// Every stored question, in insertion order.
    async fn all(&self) -> Result<Vec<Question>>;

    async fn get(&self, id: QuestionId) -> Result<Option<Question>>;

    /// Increments one choice counter and returns the updated question.
    async fn record_vote(&self, id: QuestionId, choice_id: ChoiceId) -> Result<Question>;

    /// Questions published at or before `now`, most recent first, at most `limit` of them.
    async fn published(&self, now: DateTime<Utc>, limit: Option<usize>) -> Result<Vec<Question>> {
        let mut questions = crate::core::publication::published_questions(self.all().await?, now);
        if let Some(limit) = limit {
            questions.truncate(limit);
        }
        Ok(questions)
    }
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait ConfigProvider: Send + Sync {
    fn data_file(&self) -> &str;
    fn index_limit(&self) -> usize;
}
