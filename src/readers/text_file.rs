//! src/readers/text_file.rs
use crate::functions::{Reader, Record};
use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::iter::Enumerate;
use std::path::{Path, PathBuf};

type NumberLine = fn((usize, std::io::Result<String>)) -> anyhow::Result<Record<u64, String>>;

pub type TextLines = std::iter::Map<Enumerate<Lines<BufReader<File>>>, NumberLine>;

/// Reads a text file lazily, one record per line keyed by its 1-based line
/// number. The file is reopened on every `read`.
#[derive(Debug, Clone)]
pub struct TextFileReader {
    path: PathBuf,
}

impl TextFileReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        TextFileReader {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn number_line(
    (index, line): (usize, std::io::Result<String>),
) -> anyhow::Result<Record<u64, String>> {
    let number = index as u64 + 1;
    let line = line.with_context(|| format!("Failed to read line {number}"))?;
    Ok(Record::new(number, line))
}

impl Reader for TextFileReader {
    type Key = u64;
    type Value = String;
    type Records = TextLines;

    #[tracing::instrument(
        name = "Open text input",
        skip(self),
        fields(path = %self.path.display())
    )]
    fn read(&mut self) -> anyhow::Result<TextLines> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open input file: {}", self.path.display()))?;
        let number: NumberLine = number_line;
        Ok(BufReader::new(file).lines().enumerate().map(number))
    }
}
