pub mod publication;
pub mod service;
pub mod views;

pub use crate::domain::model::{Choice, NewQuestion, Question, QuestionRecord};
pub use crate::domain::ports::{Clock, ConfigProvider, QuestionStore};
pub use crate::utils::error::Result;
