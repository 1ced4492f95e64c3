use thiserror::Error;

#[derive(Error, Debug)]
pub enum PollsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Question {id} not found")]
    QuestionNotFound { id: u64 },

    #[error("Choice {choice_id} does not belong to question {question_id}")]
    ChoiceNotFound { question_id: u64, choice_id: u64 },

    #[error("You didn't select a choice.")]
    NoChoiceSelected,

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Input,
    NotFound,
    Storage,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PollsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PollsError::ConfigValidationError { .. }
            | PollsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PollsError::MissingField { .. }
            | PollsError::InvalidTimestamp { .. }
            | PollsError::NoChoiceSelected
            | PollsError::ValidationError { .. } => ErrorCategory::Input,
            PollsError::QuestionNotFound { .. } | PollsError::ChoiceNotFound { .. } => {
                ErrorCategory::NotFound
            }
            PollsError::IoError(_) | PollsError::SerializationError(_) | PollsError::CsvError(_) => {
                ErrorCategory::Storage
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::NotFound => ErrorSeverity::Medium,
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            PollsError::QuestionNotFound { id } => format!("No poll with id {} is available.", id),
            PollsError::NoChoiceSelected => "You didn't select a choice.".to_string(),
            PollsError::IoError(e) => format!("Could not access the poll data file: {}", e),
            PollsError::SerializationError(_) => {
                "The poll data file is corrupted or not valid JSON.".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Configuration => "Check the command line flags and the TOML config file",
            ErrorCategory::Input => {
                "Use RFC 3339 timestamps (e.g. 2024-01-01T09:00:00Z) and non-empty text"
            }
            ErrorCategory::NotFound => "Run `polls index` to list the published polls",
            ErrorCategory::Storage => "Check that the data file exists and is writable",
        }
    }
}

pub type Result<T> = std::result::Result<T, PollsError>;
