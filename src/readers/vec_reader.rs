//! src/readers/vec_reader.rs
use crate::functions::{Reader, Record};

type Infallible<K, V> = fn(Record<K, V>) -> anyhow::Result<Record<K, V>>;

/// Serves a fixed set of records. Every call to `read` starts from the first
/// record again, so a job built on it can be executed more than once.
#[derive(Debug, Clone)]
pub struct VecReader<K, V> {
    records: Vec<Record<K, V>>,
}

impl<K, V> VecReader<K, V> {
    pub fn new(pairs: Vec<(K, V)>) -> Self {
        Self::from_records(
            pairs
                .into_iter()
                .map(|(key, value)| Record::new(key, value))
                .collect(),
        )
    }

    pub fn from_records(records: Vec<Record<K, V>>) -> Self {
        VecReader { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<K, V> Default for VecReader<K, V> {
    fn default() -> Self {
        Self::from_records(vec![])
    }
}

impl<K: Clone, V: Clone> Reader for VecReader<K, V> {
    type Key = K;
    type Value = V;
    type Records = std::iter::Map<std::vec::IntoIter<Record<K, V>>, Infallible<K, V>>;

    fn read(&mut self) -> anyhow::Result<Self::Records> {
        let ok: Infallible<K, V> = Ok;
        Ok(self.records.clone().into_iter().map(ok))
    }
}
