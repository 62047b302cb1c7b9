use crate::app::visualizer::TerminalVisualizer;
use crate::config::{ChartSettings, TrendConfig};
use crate::core::fetch::PostFetcher;
use crate::core::report::{read_report, ReportWriter};
use crate::domain::model::{Post, ResultSet};
use crate::domain::ports::{Pipeline, PolarityScorer, SearchApi, Storage};
use crate::domain::services::enrich;
use crate::utils::error::Result;
use chrono::Local;
use std::io::Write;

/// Fetch, score, persist and chart posts for one query.
pub struct SentimentPipeline<A: SearchApi, S: Storage, P: PolarityScorer> {
    api: A,
    writer: ReportWriter<S>,
    scorer: P,
    visualizer: TerminalVisualizer,
    config: TrendConfig,
}

impl<A: SearchApi, S: Storage, P: PolarityScorer> SentimentPipeline<A, S, P> {
    pub fn new(api: A, storage: S, scorer: P, config: TrendConfig) -> Self {
        Self {
            api,
            writer: ReportWriter::new(storage),
            scorer,
            visualizer: TerminalVisualizer::from_settings(&config.charts),
            config,
        }
    }

    fn render_to_stdout(&self, results: &ResultSet) -> std::io::Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.visualizer.render_all(results, &mut out)
    }
}

#[async_trait::async_trait]
impl<A: SearchApi, S: Storage, P: PolarityScorer> Pipeline for SentimentPipeline<A, S, P> {
    async fn extract(&self) -> Result<Vec<Post>> {
        tracing::debug!("Search query: {}", self.config.query);
        let report = PostFetcher::new(&self.api, self.config.rate_limit.clone())
            .with_dedupe(self.config.dedupe)
            .fetch(&self.config.query, self.config.max_results)
            .await;
        Ok(report.posts)
    }

    async fn transform(&self, posts: Vec<Post>) -> Result<ResultSet> {
        let results: ResultSet = posts
            .into_iter()
            .map(|post| enrich(post, &self.scorer))
            .collect();
        tracing::debug!("Scored {} posts", results.len());
        Ok(results)
    }

    async fn load(&self, results: &ResultSet) -> Result<String> {
        self.writer.write(results, Local::now()).await
    }

    async fn render(&self, results: &ResultSet) -> Result<()> {
        if !self.config.charts.enabled {
            tracing::debug!("Chart rendering disabled");
            return Ok(());
        }
        self.render_to_stdout(results)?;
        Ok(())
    }
}

/// Re-renders a persisted report without fetching. Returns the number of rows read.
pub async fn render_report<S: Storage, W: Write>(
    storage: &S,
    path: &str,
    charts: &ChartSettings,
    out: &mut W,
) -> Result<usize> {
    let results = read_report(storage, path).await?;
    if results.is_empty() {
        writeln!(out, "Report {} has no rows.", path)?;
        return Ok(0);
    }
    if !charts.enabled {
        tracing::info!("Chart rendering disabled, read {} rows from {}", results.len(), path);
        return Ok(results.len());
    }
    TerminalVisualizer::from_settings(charts).render_all(&results, out)?;
    Ok(results.len())
}
