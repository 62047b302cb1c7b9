use anyhow::Result;
use httpmock::prelude::*;
use sentiment_trend::config::RateLimitPolicy;
use sentiment_trend::core::report::read_report;
use sentiment_trend::domain::model::SentimentCategory;
use sentiment_trend::{
    LexiconScorer, LocalStorage, RunOutcome, SentimentPipeline, TrendConfig, TrendEngine,
    TwitterClient,
};
use std::time::Duration;
use tempfile::TempDir;

const SEARCH_PATH: &str = "/2/tweets/search/recent";

fn config_for(server: &MockServer, output_dir: &str, max_results: usize) -> TrendConfig {
    let mut config = TrendConfig {
        credential: Some("e2e-token".to_string()),
        query: "storm OR flood -is:retweet lang:en".to_string(),
        max_results,
        output_directory: output_dir.to_string(),
        api_base_url: server.base_url(),
        rate_limit: RateLimitPolicy {
            cooldown: Duration::from_millis(10),
            max_retries: Some(2),
        },
        ..TrendConfig::default()
    };
    config.charts.enabled = false;
    config
}

fn engine_for(
    config: TrendConfig,
) -> Result<TrendEngine<SentimentPipeline<TwitterClient, LocalStorage, LexiconScorer>>> {
    let client = TwitterClient::new(
        &config.api_base_url,
        config.credential()?,
        Duration::from_secs(5),
    )?;
    let storage = LocalStorage::new(config.output_directory.clone());
    Ok(TrendEngine::new(SentimentPipeline::new(
        client,
        storage,
        LexiconScorer::new(),
        config,
    )))
}

#[tokio::test]
async fn test_end_to_end_two_pages_to_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_dir = temp_dir.path().join("data");
    let server = MockServer::start();

    let first_page = server.mock(|when, then| {
        when.method(GET)
            .path(SEARCH_PATH)
            .header("Authorization", "Bearer e2e-token")
            .query_param("max_results", "100");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "data": [
                    {"id": "3", "text": "Great #Storm coming! http://x.co @user", "created_at": "2024-05-01T12:00:03.000Z"},
                    {"id": "2", "text": "Terrible #flood damage, stay safe\nfolks", "created_at": "2024-05-01T12:00:02.000Z"}
                ],
                "meta": {"result_count": 2, "next_token": "page-2"}
            }));
    });

    let second_page = server.mock(|when, then| {
        when.method(GET)
            .path(SEARCH_PATH)
            .query_param("next_token", "page-2")
            .query_param("max_results", "98");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "data": [
                    {"id": "1", "text": "Rainfall totals tomorrow #Storm", "created_at": "2024-05-01T12:00:01.000Z"}
                ],
                "meta": {"result_count": 1}
            }));
    });

    let engine = engine_for(config_for(&server, output_dir.to_str().unwrap(), 100))?;
    let outcome = engine.run().await?;

    first_page.assert();
    second_page.assert();

    let (report_path, results) = match outcome {
        RunOutcome::Completed {
            report_path,
            results,
        } => (report_path, results),
        RunOutcome::NoPosts => panic!("expected posts"),
    };

    assert_eq!(results.len(), 3);
    assert!(report_path.contains("tweets_data_"));
    assert!(std::path::Path::new(&report_path).exists());

    let raw = std::fs::read_to_string(&report_path)?;
    assert!(raw.starts_with("tweet,created_at,cleaned_tweet,sentiment_score,sentiment_category"));

    let report_name = std::path::Path::new(&report_path)
        .file_name()
        .and_then(|name| name.to_str())
        .expect("report file name");
    let storage = LocalStorage::new(output_dir.to_str().unwrap().to_string());
    let loaded = read_report(&storage, report_name).await?;
    assert_eq!(loaded.len(), 3);
    assert_eq!(loaded.posts()[0].cleaned_text, "Great Storm coming");
    assert_eq!(loaded.posts()[1].text, "Terrible #flood damage, stay safe\nfolks");
    assert_eq!(loaded.posts()[1].cleaned_text, "Terrible flood damage stay safe folks");
    for category in SentimentCategory::ALL {
        assert_eq!(
            loaded.count_category(category),
            results.count_category(category)
        );
    }
    assert_eq!(
        loaded.posts()[0].sentiment_category,
        SentimentCategory::Positive
    );
    assert_eq!(
        loaded.posts()[2].sentiment_category,
        SentimentCategory::Neutral
    );

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_empty_result_writes_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_dir = temp_dir.path().join("data");
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"meta": {"result_count": 0}}));
    });

    let engine = engine_for(config_for(&server, output_dir.to_str().unwrap(), 200))?;
    let outcome = engine.run().await?;

    api_mock.assert();
    assert!(matches!(outcome, RunOutcome::NoPosts));
    assert!(!output_dir.exists());

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_upstream_failure_is_not_fatal() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_dir = temp_dir.path().join("data");
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(401).body("Unauthorized");
    });

    let engine = engine_for(config_for(&server, output_dir.to_str().unwrap(), 200))?;
    let outcome = engine.run().await?;

    api_mock.assert();
    assert!(matches!(outcome, RunOutcome::NoPosts));

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_rate_limit_ceiling_keeps_nothing_and_halts() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_dir = temp_dir.path().join("data");
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(GET).path(SEARCH_PATH);
        then.status(429).body("Too Many Requests");
    });

    let engine = engine_for(config_for(&server, output_dir.to_str().unwrap(), 200))?;
    let outcome = engine.run().await?;

    // One attempt plus two retries.
    api_mock.assert_hits(3);
    assert!(matches!(outcome, RunOutcome::NoPosts));

    Ok(())
}
