use clap::Parser;
use polls::adapters::csv_import;
use polls::core::views::{render_detail, render_results};
use polls::core::{Clock, ConfigProvider};
use polls::domain::model::parse_publication_time;
use polls::utils::error::ErrorSeverity;
use polls::utils::validation::{validate_file_extension, Validate};
use polls::utils::logger;
use polls::{CliConfig, Command, FileStore, FixedClock, NewQuestion, PollsError, PollsService, SystemClock};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    let settings = match cli.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if settings.log_json {
        logger::init_json_logger(settings.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
    }
    tracing::debug!("Settings: {:?}", settings);

    let store = FileStore::new(settings.data_file());
    let result = match settings.now {
        Some(now) => {
            tracing::info!("Using pinned time {}", now);
            run(cli.command, store, FixedClock(now), settings.index_limit()).await
        }
        None => run(cli.command, store, SystemClock, settings.index_limit()).await,
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}

async fn run<C: Clock>(
    command: Command,
    store: FileStore,
    clock: C,
    index_limit: usize,
) -> Result<String, PollsError> {
    let now = clock.now();
    let service = PollsService::new(store, clock).with_index_limit(index_limit);

    match command {
        Command::Index => Ok(service.index().await?.render()),
        Command::Detail { id } => Ok(render_detail(&service.detail(id).await?)),
        Command::Results { id } => Ok(render_results(&service.results(id).await?)),
        Command::Vote { id, choice } => {
            let question = service.vote(id, choice).await?;
            Ok(render_results(&question))
        }
        Command::Add {
            text,
            days,
            pub_date,
            choices,
        } => {
            let new = match (days, pub_date) {
                (_, Some(raw)) => NewQuestion::new(text, parse_publication_time(&raw)?),
                (Some(days), None) => NewQuestion::offset_days(text, now, days)?,
                (None, None) => NewQuestion::new(text, now),
            }
            .with_choices(choices);

            let created = service.create_question(new).await?;
            Ok(format!(
                "✅ Created question {} (published {})",
                created.id, created.publication_time
            ))
        }
        Command::Import { path } => {
            validate_file_extension("path", &path, &["csv"])?;
            let questions = csv_import::read_questions_from_file(&path)?;
            tracing::info!("📁 Importing {} question(s) from {}", questions.len(), path);

            let mut created = 0;
            for question in questions {
                service.create_question(question).await?;
                created += 1;
            }
            Ok(format!(
                "✅ Imported {} question(s) into {}",
                created,
                service.store().path().display()
            ))
        }
    }
}
