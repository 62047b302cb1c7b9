use crate::domain::model::ResultSet;
use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

#[derive(Debug)]
pub enum RunOutcome {
    Completed {
        report_path: String,
        results: ResultSet,
    },
    /// The fetch produced nothing; no report was written and nothing rendered.
    NoPosts,
}

pub struct TrendEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TrendEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<RunOutcome> {
        tracing::info!("🚀 Starting sentiment trend run");

        tracing::info!("Fetching posts...");
        let posts = self.pipeline.extract().await?;
        if posts.is_empty() {
            tracing::warn!("No posts fetched, skipping report and charts");
            return Ok(RunOutcome::NoPosts);
        }
        tracing::info!("Extracted {} posts", posts.len());

        tracing::info!("Cleaning and scoring posts...");
        let results = self.pipeline.transform(posts).await?;

        let report_path = self.pipeline.load(&results).await?;
        tracing::info!("💾 Saved {} posts to {}", results.len(), report_path);

        self.pipeline.render(&results).await?;

        Ok(RunOutcome::Completed {
            report_path,
            results,
        })
    }
}
