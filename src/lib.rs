pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::TrendConfig;

pub use adapters::{LocalStorage, TwitterClient};
pub use app::visualizer::TerminalVisualizer;
pub use core::{
    etl::{RunOutcome, TrendEngine},
    pipeline::SentimentPipeline,
};
pub use domain::services::lexicon::LexiconScorer;
pub use utils::error::{Result, TrendError};
