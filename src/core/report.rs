use crate::domain::model::{EnrichedPost, ResultSet};
use crate::domain::ports::Storage;
use crate::utils::error::{Result, TrendError};
use chrono::{DateTime, Local};

pub const REPORT_HEADERS: [&str; 5] = [
    "tweet",
    "created_at",
    "cleaned_tweet",
    "sentiment_score",
    "sentiment_category",
];

/// `tweets_data_<YYYYMMDD_HHMMSS>.csv`. Two runs in the same second collide.
pub fn report_filename(captured_at: DateTime<Local>) -> String {
    format!("tweets_data_{}.csv", captured_at.format("%Y%m%d_%H%M%S"))
}

pub fn to_csv_bytes(results: &ResultSet) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(REPORT_HEADERS)?;
    for post in results {
        writer.serialize(post)?;
    }

    writer
        .into_inner()
        .map_err(|e| TrendError::IoError(e.into_error()))
}

/// Parses report bytes written by [`to_csv_bytes`]. Post ids are not persisted.
pub fn parse_report(data: &[u8]) -> Result<ResultSet> {
    let mut reader = csv::Reader::from_reader(data);
    let posts = reader
        .deserialize::<EnrichedPost>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(ResultSet::new(posts))
}

/// Reads a persisted report through `storage`.
pub async fn read_report<S: Storage>(storage: &S, path: &str) -> Result<ResultSet> {
    let data = storage.read_file(path).await?;
    let results = parse_report(&data)?;
    tracing::debug!("Read {} rows from {}", results.len(), path);
    Ok(results)
}

pub struct ReportWriter<S: Storage> {
    storage: S,
}

impl<S: Storage> ReportWriter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Writes the report and returns its path.
    pub async fn write(&self, results: &ResultSet, captured_at: DateTime<Local>) -> Result<String> {
        let filename = report_filename(captured_at);
        let data = to_csv_bytes(results)?;
        tracing::debug!("Writing {} rows ({} bytes) to {}", results.len(), data.len(), filename);
        self.storage.write_file(&filename, &data).await
    }
}
