//! tests/api/helpers.rs
use mapreduce_sim::Record;
use mapreduce_sim::telemetry::init_tracing;
use std::path::PathBuf;
use std::sync::LazyLock;

static TRACING: LazyLock<()> = LazyLock::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        init_tracing("debug").expect("Failed to setup tracing");
    }
});

pub fn setup_tracing() {
    LazyLock::force(&TRACING);
}

pub fn test_data_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path
}

pub fn word_count_map(_key: u64, value: String) -> anyhow::Result<Vec<Record<String, u64>>> {
    Ok(value
        .split_whitespace()
        .map(|word| Record::new(word.to_lowercase(), 1))
        .collect())
}

pub fn word_count_reduce(
    key: String,
    values: Vec<u64>,
) -> anyhow::Result<Vec<Record<String, u64>>> {
    Ok(vec![Record::new(key, values.into_iter().sum())])
}
