use crate::core::views::{IndexPage, DEFAULT_INDEX_LIMIT};
use crate::core::{Clock, QuestionStore};
use crate::domain::model::{ChoiceId, NewQuestion, Question, QuestionId};
use crate::utils::error::{PollsError, Result};

/// Entry point for the index, detail, results and vote flows.
pub struct PollsService<S: QuestionStore, C: Clock> {
    store: S,
    clock: C,
    index_limit: usize,
}

impl<S: QuestionStore, C: Clock> PollsService<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            index_limit: DEFAULT_INDEX_LIMIT,
        }
    }

    pub fn with_index_limit(mut self, index_limit: usize) -> Self {
        self.index_limit = index_limit;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn index(&self) -> Result<IndexPage> {
        let now = self.clock.now();
        let latest_question_list = self.store.published(now, Some(self.index_limit)).await?;
        tracing::info!("Index lists {} question(s)", latest_question_list.len());

        Ok(IndexPage {
            latest_question_list,
            generated_at: now,
        })
    }

    pub async fn detail(&self, id: QuestionId) -> Result<Question> {
        self.published_question(id).await
    }

    pub async fn results(&self, id: QuestionId) -> Result<Question> {
        self.published_question(id).await
    }

    pub async fn vote(&self, id: QuestionId, choice_id: Option<ChoiceId>) -> Result<Question> {
        let question = self.published_question(id).await?;
        let choice_id = choice_id.ok_or(PollsError::NoChoiceSelected)?;

        if question.choice(choice_id).is_none() {
            return Err(PollsError::ChoiceNotFound {
                question_id: id,
                choice_id,
            });
        }

        let updated = self.store.record_vote(id, choice_id).await?;
        tracing::info!("Recorded vote for choice {} on question {}", choice_id, id);
        Ok(updated)
    }

    pub async fn create_question(&self, question: NewQuestion) -> Result<Question> {
        question.validate()?;
        let created = self.store.create(question).await?;
        tracing::info!(
            "Created question {} published at {}",
            created.id,
            created.publication_time
        );
        Ok(created)
    }

    // Future questions are hidden the same way missing ones are.
    async fn published_question(&self, id: QuestionId) -> Result<Question> {
        let now = self.clock.now();
        match self.store.get(id).await? {
            Some(question) if question.is_published_at(now) => Ok(question),
            Some(_) => {
                tracing::debug!("Question {} is not yet published", id);
                Err(PollsError::QuestionNotFound { id })
            }
            None => Err(PollsError::QuestionNotFound { id }),
        }
    }
}
