use crate::core::{NewQuestion, Question, QuestionStore};
use crate::domain::model::{Choice, ChoiceId, QuestionId};
use crate::utils::error::{PollsError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Store contents shared by the in-memory and file-backed stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreState {
    pub next_question_id: QuestionId,
    pub next_choice_id: ChoiceId,
    pub questions: Vec<Question>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            next_question_id: 1,
            next_choice_id: 1,
            questions: Vec::new(),
        }
    }
}

impl StoreState {
    pub fn insert(&mut self, new: NewQuestion) -> Question {
        let choices = new
            .choices
            .into_iter()
            .map(|text| {
                let id = self.next_choice_id;
                self.next_choice_id += 1;
                Choice { id, text, votes: 0 }
            })
            .collect();

        let question = Question {
            id: self.next_question_id,
            text: new.text,
            publication_time: new.publication_time,
            choices,
        };
        self.next_question_id += 1;
        self.questions.push(question.clone());
        question
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn vote(&mut self, id: QuestionId, choice_id: ChoiceId) -> Result<Question> {
        let question = self
            .questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(PollsError::QuestionNotFound { id })?;

        let choice = question
            .choices
            .iter_mut()
            .find(|c| c.id == choice_id)
            .ok_or(PollsError::ChoiceNotFound {
                question_id: id,
                choice_id,
            })?;
        choice.votes = choice.votes.saturating_add(1);

        Ok(question.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuestionStore for InMemoryStore {
    async fn create(&self, question: NewQuestion) -> Result<Question> {
        let mut state = self.state.write().await;
        Ok(state.insert(question))
    }

    async fn all(&self) -> Result<Vec<Question>> {
        let state = self.state.read().await;
        Ok(state.questions.clone())
    }

    async fn get(&self, id: QuestionId) -> Result<Option<Question>> {
        let state = self.state.read().await;
        Ok(state.get(id).cloned())
    }

    async fn record_vote(&self, id: QuestionId, choice_id: ChoiceId) -> Result<Question> {
        let mut state = self.state.write().await;
        state.vote(id, choice_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    #[tokio::test]
    async fn test_ids_increase_in_creation_order() {
        let store = InMemoryStore::new();
        let now = Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap();

        let first = store
            .create(NewQuestion::new("One?", now).with_choices(["a", "b"]))
            .await
            .unwrap();
        let second = store
            .create(NewQuestion::new("Two?", now).with_choices(["c"]))
            .await
            .unwrap();

        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(
            second.choices.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![3]
        );
    }

    #[tokio::test]
    async fn test_published_read_applies_limit() {
        let store = InMemoryStore::new();
        let now = Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap();
        for days in 1..=4 {
            store
                .create(NewQuestion::new(format!("Q{}", days), now - Duration::days(days)))
                .await
                .unwrap();
        }

        let listed = store.published(now, Some(2)).await.unwrap();
        let texts: Vec<_> = listed.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, vec!["Q1", "Q2"]);
    }

    #[tokio::test]
    async fn test_vote_unknown_choice() {
        let store = InMemoryStore::new();
        let now = Utc::now();
        let q = store
            .create(NewQuestion::new("One?", now).with_choices(["a"]))
            .await
            .unwrap();

        assert!(matches!(
            store.record_vote(q.id, 99).await,
            Err(PollsError::ChoiceNotFound { .. })
        ));
        assert!(matches!(
            store.record_vote(42, 1).await,
            Err(PollsError::QuestionNotFound { id: 42 })
        ));
    }
}
