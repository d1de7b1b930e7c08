//! src/test_utils.rs
use crate::functions::Record;
use crate::readers::VecReader;
use std::path::PathBuf;

pub fn test_data_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("data");
    path
}

pub fn records<K: Copy, V: Copy>(pairs: &[(K, V)]) -> Vec<Record<K, V>> {
    pairs
        .iter()
        .map(|&(key, value)| Record::new(key, value))
        .collect()
}

pub fn sample_reader() -> VecReader<u64, String> {
    VecReader::new(vec![(1, "2".to_string()), (1, "3".to_string())])
}
