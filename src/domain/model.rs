use crate::utils::error::{PollsError, Result};
use crate::utils::validation::{validate_required_field, validate_text};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub type QuestionId = u64;
pub type ChoiceId = u64;

/// Width of the recency window: a question is "recent" for one day after publication.
pub const RECENCY_WINDOW_SECONDS: i64 = 86_400;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: ChoiceId,
    pub text: String,
    #[serde(default)]
    pub votes: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub publication_time: DateTime<Utc>,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Question {
    /// Visible in listings once `publication_time` is not after `now`.
    pub fn is_published_at(&self, now: DateTime<Utc>) -> bool {
        self.publication_time <= now
    }

    pub fn was_published_recently_at(&self, now: DateTime<Utc>) -> bool {
        was_published_recently(self.publication_time, now)
    }

    pub fn choice(&self, choice_id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|c| c.id == choice_id)
    }

    pub fn total_votes(&self) -> u64 {
        self.choices.iter().map(|c| u64::from(c.votes)).sum()
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// True iff `now - publication_time` lies in `[0, 1 day)`.
pub fn was_published_recently(publication_time: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let age = now.signed_duration_since(publication_time);
    age >= Duration::zero() && age < Duration::seconds(RECENCY_WINDOW_SECONDS)
}

/// Create-with-fields payload handed to a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: String,
    pub publication_time: DateTime<Utc>,
    pub choices: Vec<String>,
}

impl NewQuestion {
    pub fn new(text: impl Into<String>, publication_time: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            publication_time,
            choices: Vec::new(),
        }
    }

    /// Published `days` away from `now`; negative values land in the past.
    pub fn offset_days(text: impl Into<String>, now: DateTime<Utc>, days: i64) -> Result<Self> {
        let publication_time = Duration::try_days(days)
            .and_then(|offset| now.checked_add_signed(offset))
            .ok_or_else(|| PollsError::InvalidTimestamp {
                value: format!("{} {:+} days", now.to_rfc3339(), days),
                reason: "offset is outside the representable date range".to_string(),
            })?;
        Ok(Self::new(text, publication_time))
    }

    pub fn with_choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = choices.into_iter().map(Into::into).collect();
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_text("question text", &self.text)?;
        for choice in &self.choices {
            validate_text("choice text", choice)?;
        }
        Ok(())
    }
}

/// Unvalidated question as it appears in import files.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionRecord {
    pub text: String,
    pub pub_date: Option<String>,
    /// `|`-separated choice labels
    #[serde(default)]
    pub choices: Option<String>,
}

impl TryFrom<QuestionRecord> for NewQuestion {
    type Error = PollsError;

    fn try_from(record: QuestionRecord) -> Result<Self> {
        let raw = validate_required_field("pub_date", &record.pub_date)?;
        let publication_time = parse_publication_time(raw)?;

        let choices = record
            .choices
            .as_deref()
            .map(|s| {
                s.split('|')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let question = NewQuestion {
            text: record.text,
            publication_time,
            choices,
        };
        question.validate()?;
        Ok(question)
    }
}

/// Parses an RFC 3339 timestamp into UTC. Blank input counts as missing.
pub fn parse_publication_time(raw: &str) -> Result<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PollsError::MissingField {
            field: "pub_date".to_string(),
        });
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| PollsError::InvalidTimestamp {
            value: trimmed.to_string(),
            reason: e.to_string(),
        })
}
