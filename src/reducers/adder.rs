//! src/reducers/adder.rs
use crate::functions::{Record, Reducer};

/// Sums the values of each group.
#[derive(Debug, Default, Clone, Copy)]
pub struct Adder;

impl<K> Reducer<K, u64> for Adder {
    type Key = K;
    type Value = u64;

    fn reduce(&mut self, key: K, values: Vec<u64>) -> anyhow::Result<Vec<Record<K, u64>>> {
        let total = values
            .into_iter()
            .try_fold(0u64, |acc, value| acc.checked_add(value))
            .ok_or_else(|| anyhow::anyhow!("Sum overflowed u64"))?;
        Ok(vec![Record::new(key, total)])
    }
}
