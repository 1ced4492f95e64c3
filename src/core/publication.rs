use crate::domain::model::Question;
use chrono::{DateTime, Utc};

pub use crate::domain::model::was_published_recently;

/// Keeps questions whose publication time is not after `now`, most recent first.
///
/// The sort is stable, so questions sharing a timestamp stay in the order they
/// were given.
pub fn published_questions<I>(questions: I, now: DateTime<Utc>) -> Vec<Question>
where
    I: IntoIterator<Item = Question>,
{
    let mut published: Vec<Question> = questions
        .into_iter()
        .filter(|q| q.is_published_at(now))
        .collect();
    published.sort_by(|a, b| b.publication_time.cmp(&a.publication_time));

    tracing::debug!("{} question(s) published as of {}", published.len(), now);
    published
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap()
    }

    fn question(id: u64, text: &str, days: i64) -> Question {
        Question {
            id,
            text: text.to_string(),
            publication_time: now() + Duration::days(days),
            choices: vec![],
        }
    }

    fn texts(questions: &[Question]) -> Vec<&str> {
        questions.iter().map(|q| q.text.as_str()).collect()
    }

    #[test]
    fn test_empty_listing() {
        assert!(published_questions(Vec::new(), now()).is_empty());
    }

    #[test]
    fn test_future_question_excluded() {
        let listed = published_questions(
            vec![question(1, "Past question.", -30), question(2, "Future question.", 30)],
            now(),
        );
        assert_eq!(texts(&listed), vec!["Past question."]);
    }

    #[test]
    fn test_most_recent_first() {
        let listed = published_questions(
            vec![question(1, "Past question 1.", -30), question(2, "Past question 2.", -5)],
            now(),
        );
        assert_eq!(texts(&listed), vec!["Past question 2.", "Past question 1."]);
    }

    #[test]
    fn test_only_future_questions() {
        let listed = published_questions(
            vec![question(1, "Soon.", 1), question(2, "Later.", 30)],
            now(),
        );
        assert!(listed.is_empty());
    }

    #[test]
    fn test_published_exactly_now_is_listed() {
        let listed = published_questions(vec![question(1, "Right now.", 0)], now());
        assert_eq!(listed.len(), 1);
    }

    #[test]
    fn test_equal_timestamps_keep_insertion_order() {
        let listed = published_questions(
            vec![
                question(1, "First.", -2),
                question(2, "Second.", -2),
                question(3, "Newest.", -1),
            ],
            now(),
        );
        assert_eq!(texts(&listed), vec!["Newest.", "First.", "Second."]);
    }
}
