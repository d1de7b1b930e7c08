//! src/mappers/word_counter.rs
use crate::functions::{Mapper, Record};

/// Emits `(word, 1)` for every whitespace-separated word, lowercased.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordCounter;

impl<K> Mapper<K, String> for WordCounter {
    type Key = String;
    type Value = u64;

    fn map(&mut self, _key: K, value: String) -> anyhow::Result<Vec<Record<String, u64>>> {
        Ok(value
            .split_whitespace()
            .map(|word| Record::new(word.to_lowercase(), 1))
            .collect())
    }
}
