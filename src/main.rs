use clap::Parser;
use sentiment_trend::core::pipeline::render_report;
use sentiment_trend::utils::error::ErrorSeverity;
use sentiment_trend::utils::{logger, validation::Validate};
use sentiment_trend::{
    CliConfig, LexiconScorer, LocalStorage, RunOutcome, SentimentPipeline, TrendConfig,
    TrendEngine, TrendError, TwitterClient,
};
use std::path::Path;

fn exit_code(e: &TrendError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(stage: &str, e: TrendError) -> ! {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

async fn render_existing_report(path: &str, config: &TrendConfig) -> Result<(), TrendError> {
    config.validate_output()?;
    tracing::info!("📂 Rendering charts from {}", path);

    let path = Path::new(path);
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| TrendError::InvalidConfigValueError {
            field: "from_report".to_string(),
            value: path.display().to_string(),
            reason: "Path does not name a file".to_string(),
        })?;
    let storage = LocalStorage::new(
        path.parent()
            .map(|dir| dir.to_string_lossy().into_owned())
            .unwrap_or_default(),
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let rows = render_report(&storage, file_name, &config.charts, &mut out).await?;
    tracing::debug!("Rendered {} rows", rows);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting sentiment-trend");

    let config = cli
        .resolve()
        .unwrap_or_else(|e| fail("Configuration loading", e));
    tracing::debug!("Resolved config: {:?}", config);

    if let Some(path) = &cli.from_report {
        if let Err(e) = render_existing_report(path, &config).await {
            fail("Report rendering", e);
        }
        return Ok(());
    }

    if let Err(e) = config.validate() {
        fail("Configuration validation", e);
    }

    let client = config
        .credential()
        .and_then(|token| TwitterClient::new(&config.api_base_url, token, config.request_timeout))
        .unwrap_or_else(|e| fail("Client setup", e));

    let storage = LocalStorage::new(config.output_directory.clone());
    let pipeline = SentimentPipeline::new(client, storage, LexiconScorer::new(), config);
    let engine = TrendEngine::new(pipeline);

    match engine.run().await {
        Ok(RunOutcome::Completed { report_path, .. }) => {
            println!("Saved tweets to {}", report_path);
            println!("Sentiment analysis and trend detection completed!");
        }
        Ok(RunOutcome::NoPosts) => {
            println!("No tweets fetched. Exiting.");
        }
        Err(e) => fail("Trend run", e),
    }

    Ok(())
}
