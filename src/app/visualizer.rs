//! Terminal rendering of the trend charts.

use crate::app::charts::{self, CategoryShare, WeightedWord, WordTier};
use crate::config::ChartSettings;
use crate::domain::model::{ResultSet, SentimentCategory};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

const BLOCK: &str = "█";

pub struct TerminalVisualizer {
    width: usize,
    top_hashtags: usize,
    max_words: usize,
}

impl Default for TerminalVisualizer {
    fn default() -> Self {
        Self::from_settings(&ChartSettings::default())
    }
}

fn paint(category: SentimentCategory, text: &str) -> ColoredString {
    match category {
        SentimentCategory::Positive => text.green(),
        SentimentCategory::Negative => text.red(),
        SentimentCategory::Neutral => text.cyan(),
    }
}

fn write_title<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", title.bold())?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))
}

/// Splits `width` cells between shares by largest remainder so the
/// segments always fill the bar exactly.
fn segment_lengths(shares: &[CategoryShare], width: usize) -> Vec<usize> {
    let exact: Vec<f64> = shares
        .iter()
        .map(|s| s.percent / 100.0 * width as f64)
        .collect();
    let mut lengths: Vec<usize> = exact.iter().map(|e| e.floor() as usize).collect();

    let mut order: Vec<usize> = (0..shares.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = exact[a] - exact[a].floor();
        let rb = exact[b] - exact[b].floor();
        rb.total_cmp(&ra)
    });

    let assigned: usize = lengths.iter().sum();
    for &i in order.iter().take(width.saturating_sub(assigned)) {
        lengths[i] += 1;
    }
    lengths
}

impl TerminalVisualizer {
    pub fn new(width: usize, top_hashtags: usize, max_words: usize) -> Self {
        Self {
            width,
            top_hashtags,
            max_words,
        }
    }

    pub fn from_settings(settings: &ChartSettings) -> Self {
        Self::new(settings.width, settings.top_hashtags, settings.max_words)
    }

    pub fn render_all<W: Write>(&self, results: &ResultSet, out: &mut W) -> io::Result<()> {
        self.render_sentiment_pie(&charts::sentiment_distribution(results), out)?;
        self.render_word_cloud(&charts::word_cloud(results, self.max_words), out)?;
        self.render_top_hashtags(&charts::top_hashtags(results, self.top_hashtags), out)?;
        out.flush()
    }

    /// The pie is drawn as one proportional bar plus a legend.
    pub fn render_sentiment_pie<W: Write>(
        &self,
        shares: &[CategoryShare],
        out: &mut W,
    ) -> io::Result<()> {
        write_title(out, "Sentiment Distribution")?;

        if shares.is_empty() {
            return writeln!(out, "No posts to chart.");
        }

        let lengths = segment_lengths(shares, self.width);
        let bar: String = shares
            .iter()
            .zip(&lengths)
            .map(|(share, &len)| paint(share.category, &BLOCK.repeat(len)).to_string())
            .collect();
        writeln!(out, "{}", bar)?;

        for share in shares {
            writeln!(
                out,
                "{} {:<8} {:>5} {:>6.1}%",
                paint(share.category, &BLOCK.repeat(2)),
                share.category.as_str(),
                share.count,
                share.percent
            )?;
        }
        Ok(())
    }

    pub fn render_word_cloud<W: Write>(&self, words: &[WeightedWord], out: &mut W) -> io::Result<()> {
        write_title(out, "Trending Words WordCloud")?;

        if words.is_empty() {
            return writeln!(out, "No words to display.");
        }

        let mut line: Vec<String> = Vec::new();
        let mut line_width = 0usize;

        for entry in words {
            let shown = match entry.tier {
                WordTier::Huge => entry.word.to_uppercase(),
                _ => entry.word.clone(),
            };
            let cells = shown.chars().count();

            if line_width > 0 && line_width + 1 + cells > self.width {
                writeln!(out, "{}", line.join(" "))?;
                line.clear();
                line_width = 0;
            }

            let styled = match entry.tier {
                WordTier::Huge => shown.bold().yellow(),
                WordTier::Large => shown.bold().blue(),
                WordTier::Medium => shown.normal(),
                WordTier::Small => shown.dimmed(),
            };
            line_width += if line_width > 0 { cells + 1 } else { cells };
            line.push(styled.to_string());
        }

        if !line.is_empty() {
            writeln!(out, "{}", line.join(" "))?;
        }
        Ok(())
    }

    /// Prints a notice instead of a chart when there are no hashtags.
    pub fn render_top_hashtags<W: Write>(
        &self,
        tags: &[(String, usize)],
        out: &mut W,
    ) -> io::Result<()> {
        if tags.is_empty() {
            tracing::info!("No hashtags found in tweets.");
            return writeln!(out, "\nNo hashtags found in tweets.");
        }

        write_title(out, &format!("Top {} Trending Hashtags", self.top_hashtags))?;

        let label_width = tags
            .iter()
            .map(|(tag, _)| tag.chars().count() + 1)
            .max()
            .unwrap_or(0);
        let max_count = tags.iter().map(|(_, count)| *count).max().unwrap_or(1).max(1);
        let bar_width = self
            .width
            .saturating_sub(label_width + 10)
            .max(10);

        for (tag, count) in tags {
            let len = ((*count as f64 / max_count as f64) * bar_width as f64).round() as usize;
            writeln!(
                out,
                "{:>label$} | {} {}",
                format!("#{}", tag),
                BLOCK.repeat(len.max(1)).cyan(),
                count,
                label = label_width
            )?;
        }
        Ok(())
    }
}
