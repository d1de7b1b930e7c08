//! src/functions.rs
//!
//! The three extension points of a job. Plain functions and closures with the
//! right shape implement the traits directly, so a job can be wired either from
//! `fn` items or from dedicated types such as [`crate::mappers::WordCounter`].

/// A single `(key, value)` pair flowing through the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<K, V> {
    key: K,
    value: V,
}

impl<K, V> Record<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Record { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Record<K, V> {
    fn from((key, value): (K, V)) -> Self {
        Record::new(key, value)
    }
}

/// All values sharing a key after the shuffle, in the order they were emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<K, V> {
    key: K,
    values: Vec<V>,
}

impl<K, V> Group<K, V> {
    pub fn new(key: K, values: Vec<V>) -> Self {
        Group { key, values }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn push(&mut self, value: V) {
        self.values.push(value);
    }

    pub fn into_parts(self) -> (K, Vec<V>) {
        (self.key, self.values)
    }
}

/// Produces the input records of a job. Called once per execution.
pub trait Reader {
    type Key;
    type Value;
    type Records: Iterator<Item = anyhow::Result<Record<Self::Key, Self::Value>>>;

    fn read(&mut self) -> anyhow::Result<Self::Records>;
}

pub trait Mapper<K, V> {
    type Key;
    type Value;

    fn map(&mut self, key: K, value: V) -> anyhow::Result<Vec<Record<Self::Key, Self::Value>>>;
}

pub trait Reducer<K, V> {
    type Key;
    type Value;

    fn reduce(
        &mut self,
        key: K,
        values: Vec<V>,
    ) -> anyhow::Result<Vec<Record<Self::Key, Self::Value>>>;
}

impl<F, I, K, V> Reader for F
where
    F: FnMut() -> anyhow::Result<I>,
    I: IntoIterator<Item = anyhow::Result<Record<K, V>>>,
{
    type Key = K;
    type Value = V;
    type Records = I::IntoIter;

    fn read(&mut self) -> anyhow::Result<Self::Records> {
        Ok(self()?.into_iter())
    }
}

impl<F, K, V, KOut, VOut> Mapper<K, V> for F
where
    F: FnMut(K, V) -> anyhow::Result<Vec<Record<KOut, VOut>>>,
{
    type Key = KOut;
    type Value = VOut;

    fn map(&mut self, key: K, value: V) -> anyhow::Result<Vec<Record<KOut, VOut>>> {
        self(key, value)
    }
}

impl<F, K, V, KOut, VOut> Reducer<K, V> for F
where
    F: FnMut(K, Vec<V>) -> anyhow::Result<Vec<Record<KOut, VOut>>>,
{
    type Key = KOut;
    type Value = VOut;

    fn reduce(&mut self, key: K, values: Vec<V>) -> anyhow::Result<Vec<Record<KOut, VOut>>> {
        self(key, values)
    }
}
