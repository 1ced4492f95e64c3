use crate::config::toml_config::PollsConfig;
use crate::config::Settings;
use crate::domain::model::parse_publication_time;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "polls")]
#[command(about = "Publish polls and list the ones that are live")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// JSON file holding the questions
    #[arg(long, global = true)]
    pub data_file: Option<String>,

    /// Maximum number of questions on the index page
    #[arg(long, global = true)]
    pub index_limit: Option<usize>,

    /// Pretend the current time is this RFC 3339 instant
    #[arg(long, global = true)]
    pub now: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the latest published questions
    Index,
    /// Show a published question and its choices
    Detail { id: u64 },
    /// Show vote counts for a published question
    Results { id: u64 },
    /// Vote for one choice of a published question
    Vote {
        id: u64,
        #[arg(long)]
        choice: Option<u64>,
    },
    /// Create a question
    Add {
        text: String,
        /// Publish this many days from now (negative for the past)
        #[arg(long, allow_hyphen_values = true, conflicts_with = "pub_date")]
        days: Option<i64>,
        /// Exact RFC 3339 publication time
        #[arg(long)]
        pub_date: Option<String>,
        #[arg(long = "choice")]
        choices: Vec<String>,
    },
    /// Import questions from a CSV file with a `text,pub_date,choices` header
    Import { path: String },
}

impl CliConfig {
    /// 合併 TOML 設定與命令列參數，命令列優先
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            let file = PollsConfig::from_file(path)?;
            file.validate()?;
            settings = settings.with_file_config(&file);
        }

        if let Some(data_file) = &self.data_file {
            settings.data_file = data_file.clone();
        }
        if let Some(limit) = self.index_limit {
            settings.index_limit = limit;
        }
        if let Some(now) = &self.now {
            settings.now = Some(parse_publication_time(now)?);
        }
        settings.verbose = self.verbose;
        settings.log_json |= self.log_json;

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use crate::utils::error::PollsError;

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig::parse_from([
            "polls",
            "--data-file",
            "mine.json",
            "--index-limit",
            "2",
            "index",
        ]);
        let settings = cli.settings().unwrap();

        assert_eq!(settings.data_file(), "mine.json");
        assert_eq!(settings.index_limit(), 2);
        assert!(matches!(cli.command, Command::Index));
    }

    #[test]
    fn test_add_accepts_negative_days() {
        let cli = CliConfig::parse_from(["polls", "add", "Past question.", "--days", "-30"]);
        match cli.command {
            Command::Add { text, days, .. } => {
                assert_eq!(text, "Past question.");
                assert_eq!(days, Some(-30));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_bad_now_is_rejected() {
        let cli = CliConfig::parse_from(["polls", "--now", "noon", "index"]);
        assert!(matches!(
            cli.settings(),
            Err(PollsError::InvalidTimestamp { .. })
        ));
    }
}
