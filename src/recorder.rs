use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;

/// The only durable output of a run.
pub const ANSWER_LOG: &str = "output.txt";

/// Append-only answer log. One line per real selection, never deduplicated,
/// never rewritten.
#[derive(Debug)]
pub struct AnswerLog {
    file: File,
}

impl AnswerLog {
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening answer log {}", path.display()))?;
        Ok(Self { file })
    }

    /// `question_number` is 1-based; `answer` is the full selected option
    /// text, already rendered as `label: text`.
    pub fn record(&mut self, file_name: &str, question_number: usize, answer: &str) -> Result<()> {
        writeln!(
            self.file,
            "File: {}, Question: {}, Answer: {}",
            file_name, question_number, answer
        )
        .context("appending to answer log")
    }
}
