use crate::domain::model::Question;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const NO_POLLS_MESSAGE: &str = "No polls are available.";
pub const DEFAULT_INDEX_LIMIT: usize = 5;

/// Context of the index page.
#[derive(Debug, Clone, Serialize)]
pub struct IndexPage {
    pub latest_question_list: Vec<Question>,
    pub generated_at: DateTime<Utc>,
}

impl IndexPage {
    pub fn is_empty(&self) -> bool {
        self.latest_question_list.is_empty()
    }

    pub fn render(&self) -> String {
        if self.is_empty() {
            return NO_POLLS_MESSAGE.to_string();
        }

        self.latest_question_list
            .iter()
            .map(|q| {
                let marker = if q.was_published_recently_at(self.generated_at) {
                    " [new]"
                } else {
                    ""
                };
                format!("{}. {}{}", q.id, q.text, marker)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn render_detail(question: &Question) -> String {
    let mut out = question.text.clone();
    for choice in &question.choices {
        out.push_str(&format!("\n  ({}) {}", choice.id, choice.text));
    }
    out
}

pub fn render_results(question: &Question) -> String {
    let mut out = question.text.clone();
    for choice in &question.choices {
        let unit = if choice.votes == 1 { "vote" } else { "votes" };
        out.push_str(&format!("\n  {} -- {} {}", choice.text, choice.votes, unit));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Choice;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap()
    }

    fn sample() -> Question {
        Question {
            id: 3,
            text: "What's up?".to_string(),
            publication_time: now() - Duration::hours(2),
            choices: vec![
                Choice { id: 1, text: "Not much".to_string(), votes: 1 },
                Choice { id: 2, text: "The sky".to_string(), votes: 4 },
            ],
        }
    }

    #[test]
    fn test_empty_index_renders_fallback() {
        let page = IndexPage {
            latest_question_list: vec![],
            generated_at: now(),
        };
        assert_eq!(page.render(), NO_POLLS_MESSAGE);
    }

    #[test]
    fn test_index_marks_recent_questions() {
        let mut old = sample();
        old.id = 1;
        old.text = "Old news?".to_string();
        old.publication_time = now() - Duration::days(3);

        let page = IndexPage {
            latest_question_list: vec![sample(), old],
            generated_at: now(),
        };
        assert_eq!(page.render(), "3. What's up? [new]\n1. Old news?");
    }

    #[test]
    fn test_render_results_pluralizes() {
        assert_eq!(
            render_results(&sample()),
            "What's up?\n  Not much -- 1 vote\n  The sky -- 4 votes"
        );
    }

    #[test]
    fn test_render_detail_lists_choices() {
        assert_eq!(
            render_detail(&sample()),
            "What's up?\n  (1) Not much\n  (2) The sky"
        );
    }
}
