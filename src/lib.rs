pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliConfig, Command};
pub use crate::config::Settings;

pub use crate::adapters::{FileStore, FixedClock, InMemoryStore, SystemClock};
pub use crate::core::publication::{published_questions, was_published_recently};
pub use crate::core::service::PollsService;
pub use crate::core::views::{IndexPage, NO_POLLS_MESSAGE};
pub use crate::domain::model::{Choice, NewQuestion, Question};
pub use crate::utils::error::{PollsError, Result};
