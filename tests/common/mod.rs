#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use polls::{FixedClock, InMemoryStore, NewQuestion, PollsService, Question};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap()
}

pub fn service() -> PollsService<InMemoryStore, FixedClock> {
    PollsService::new(InMemoryStore::new(), FixedClock(now()))
}

/// Creates a question published `days` away from `now()` (negative for the past).
pub async fn create_question(
    service: &PollsService<InMemoryStore, FixedClock>,
    text: &str,
    days: i64,
) -> Question {
    service
        .create_question(NewQuestion::offset_days(text, now(), days).unwrap().with_choices(["Yes", "No"]))
        .await
        .unwrap()
}

pub fn texts(questions: &[Question]) -> Vec<&str> {
    questions.iter().map(|q| q.text.as_str()).collect()
}
