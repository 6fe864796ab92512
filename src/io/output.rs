use crate::core::metrics::{max_count, total_occurrences};
use crate::core::{AnalysisReport, FrequencyEntry, Polarity, ReadingLevel};
use colored::*;
use serde_json;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name the export surface writes, matching what downstream
/// tooling expects to pick up.
pub const EXPORT_FILE_NAME: &str = "text_analysis_export.json";

#[derive(Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        self.writer.write_all(json.as_bytes())?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        self.write_header()?;
        self.write_sentiment(report)?;
        self.write_linguistics(report)?;
        self.write_frequency(report)?;
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self) -> anyhow::Result<()> {
        writeln!(self.writer, "# Text Analysis Report")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_sentiment(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let sentiment = &report.sentiment;

        writeln!(self.writer, "## Sentiment")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_row("Classification", &sentiment.classification.to_string())?;
        self.write_row("Score", &format!("{:.4}", sentiment.score))?;
        self.write_row("Words", &sentiment.word_count.to_string())?;
        self.write_row("Joy", &format!("{:.2}", sentiment.emotions.joy))?;
        self.write_row("Sadness", &format!("{:.2}", sentiment.emotions.sadness))?;
        self.write_row("Neutral", &format!("{:.2}", sentiment.emotions.neutral))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_linguistics(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        let features = &report.linguistic;

        writeln!(self.writer, "## Linguistic Features")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        self.write_row("Reading Level", &features.reading_level.to_string())?;
        self.write_row(
            "Average Word Length",
            &format!("{:.2}", features.average_word_length),
        )?;
        self.write_row("Word Diversity", &format!("{:.2}", features.word_diversity))?;
        self.write_row(
            "Punctuation Density",
            &format!("{:.4}", features.punctuation_density),
        )?;
        self.write_row("Unique Words", &features.unique_word_count.to_string())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_frequency(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        if report.word_frequency.is_empty() {
            return Ok(());
        }

        let entries: Vec<FrequencyEntry> = report.word_frequency.iter().cloned().collect();

        writeln!(self.writer, "## Word Frequency")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "{} occurrences across {} ranked words (peak {})",
            total_occurrences(&entries),
            entries.len(),
            max_count(&entries)
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Word | Count |")?;
        writeln!(self.writer, "|------|-------|")?;
        for entry in &entries {
            writeln!(self.writer, "| {} | {} |", entry.word, entry.count)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_row(&mut self, metric: &str, value: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "| {metric} | {value} |")?;
        Ok(())
    }
}

pub struct TerminalWriter;

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_report(&mut self, report: &AnalysisReport) -> anyhow::Result<()> {
        print_header();
        print_sentiment(report);
        print_linguistics(report);
        print_frequency(report);
        Ok(())
    }
}

fn print_header() {
    println!("{}", "Text Analysis Report".bold().blue());
    println!("{}", "====================".blue());
    println!();
}

fn print_sentiment(report: &AnalysisReport) {
    let sentiment = &report.sentiment;

    println!("{} Sentiment:", "📊".bold());
    println!(
        "  Classification: {}",
        polarity_display(sentiment.classification)
    );
    println!("  Score: {:.4}", sentiment.score);
    println!("  Words: {}", sentiment.word_count);
    println!(
        "  Markers: {} positive, {} negative, {} neutral",
        sentiment.word_analysis.positive.to_string().green(),
        sentiment.word_analysis.negative.to_string().red(),
        sentiment.word_analysis.neutral
    );
    println!();
}

fn print_linguistics(report: &AnalysisReport) {
    let features = &report.linguistic;

    println!("{} Linguistic Features:", "📖".bold());
    println!(
        "  Reading level: {}",
        reading_level_display(features.reading_level)
    );
    println!(
        "  Average word length: {:.2}",
        features.average_word_length
    );
    println!("  Word diversity: {:.2}", features.word_diversity);
    println!(
        "  Punctuation density: {:.4}",
        features.punctuation_density
    );
    println!("  Unique words: {}", features.unique_word_count);
    println!();
}

fn print_frequency(report: &AnalysisReport) {
    if report.word_frequency.is_empty() {
        return;
    }

    println!("{} Top Words:", "🔝".bold());
    report
        .word_frequency
        .iter()
        .enumerate()
        .for_each(|(at, entry)| {
            println!("  {}. {} ({})", at + 1, entry.word.yellow(), entry.count);
        });
    println!();
}

fn polarity_display(polarity: Polarity) -> ColoredString {
    match polarity {
        Polarity::Positive => polarity.to_string().green(),
        Polarity::Negative => polarity.to_string().red(),
        Polarity::Neutral => polarity.to_string().normal(),
    }
}

fn reading_level_display(level: ReadingLevel) -> ColoredString {
    match level {
        ReadingLevel::Advanced => level.to_string().red(),
        ReadingLevel::Intermediate => level.to_string().yellow(),
        ReadingLevel::Basic => level.to_string().green(),
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new()),
    }
}

/// Serialize a report to `text_analysis_export.json` inside `dir` and
/// return the written path.
pub fn export_json(report: &AnalysisReport, dir: &Path) -> anyhow::Result<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, json)?;
    Ok(path)
}
