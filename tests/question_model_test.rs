mod common;

use chrono::Duration;
use common::now;
use polls::{published_questions, was_published_recently, Question};

fn question(id: u64, text: &str, offset: Duration) -> Question {
    Question {
        id,
        text: text.to_string(),
        publication_time: now() + offset,
        choices: vec![],
    }
}

#[test]
fn test_was_published_recently_with_future_question() {
    let future_question = question(1, "Future.", Duration::days(30));
    assert!(!future_question.was_published_recently_at(now()));
}

#[test]
fn test_was_published_recently_with_old_question() {
    let old_question = question(1, "Old.", -(Duration::days(1) + Duration::seconds(1)));
    assert!(!old_question.was_published_recently_at(now()));
}

#[test]
fn test_was_published_recently_with_recent_question() {
    let recent_question = question(
        1,
        "Recent.",
        -(Duration::hours(23) + Duration::minutes(59) + Duration::seconds(59)),
    );
    assert!(recent_question.was_published_recently_at(now()));
}

#[test]
fn test_future_timestamps_are_never_recent() {
    for seconds in [1, 59, 3_600, 86_399, 86_400, 86_401, 31_536_000] {
        assert!(!was_published_recently(now() + Duration::seconds(seconds), now()));
    }
}

#[test]
fn test_listing_only_future_questions_is_empty() {
    let listed = published_questions(
        vec![
            question(1, "Tomorrow.", Duration::days(1)),
            question(2, "Next month.", Duration::days(30)),
        ],
        now(),
    );
    assert!(listed.is_empty());
}

#[test]
fn test_listing_past_and_future() {
    let listed = published_questions(
        vec![
            question(1, "Q1", Duration::days(-30)),
            question(2, "Q2", Duration::days(30)),
        ],
        now(),
    );
    assert_eq!(listed.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1]);
}

#[test]
fn test_listing_is_most_recent_first() {
    let listed = published_questions(
        vec![
            question(1, "Q1", Duration::days(-30)),
            question(2, "Q2", Duration::days(-5)),
        ],
        now(),
    );
    assert_eq!(listed.iter().map(|q| q.id).collect::<Vec<_>>(), vec![2, 1]);
}

#[test]
fn test_display_is_question_text() {
    assert_eq!(question(1, "What's up?", Duration::zero()).to_string(), "What's up?");
}
