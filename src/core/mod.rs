pub mod etl;
pub mod fetch;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{EnrichedPost, Post, ResultSet};
pub use crate::domain::ports::{Pipeline, PolarityScorer, SearchApi, Storage};
pub use crate::utils::error::Result;
