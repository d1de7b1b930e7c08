//! tests/api/mapreduce.rs
use crate::helpers::{setup_tracing, test_data_dir, word_count_map, word_count_reduce};
use claims::{assert_err, assert_matches, assert_ok};
use mapreduce_sim::emitter::{CollectingEmitter, Phase};
use mapreduce_sim::mappers::WordCounter;
use mapreduce_sim::readers::{TextFileReader, VecReader};
use mapreduce_sim::reducers::Adder;
use mapreduce_sim::{MapReduce, MapReduceError, Record, execute};
use std::cell::Cell;

#[test]
fn word_count_over_two_single_word_rows() {
    setup_tracing();
    let reader = VecReader::new(vec![(1u64, "2".to_string()), (1, "3".to_string())]);

    let results = assert_ok!(execute(reader, word_count_map, word_count_reduce, true));

    assert_eq!(
        results,
        vec![
            Record::new("2".to_string(), 1),
            Record::new("3".to_string(), 1)
        ]
    );
}

#[test]
fn word_count_over_a_text_file() {
    setup_tracing();
    let mut path = test_data_dir();
    path.push("small_test.txt");

    let results = assert_ok!(execute(TextFileReader::new(&path), WordCounter, Adder, false));

    let the = results
        .iter()
        .find(|r| r.key() == "the")
        .expect("'the' should be counted");
    assert_eq!(*the.value(), 3);
    let keys: Vec<&String> = results.iter().map(|r| r.key()).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

#[test]
fn single_record_maps_once_and_reduces_once_per_group() {
    setup_tracing();
    let map_calls = Cell::new(0);
    let reduce_calls = Cell::new(0);
    let mapper = |key: u64, value: String| -> anyhow::Result<Vec<Record<String, u64>>> {
        map_calls.set(map_calls.get() + 1);
        word_count_map(key, value)
    };
    let reducer = |key: String, values: Vec<u64>| -> anyhow::Result<Vec<Record<String, u64>>> {
        reduce_calls.set(reduce_calls.get() + 1);
        word_count_reduce(key, values)
    };
    let reader = VecReader::new(vec![(10u64, "hello hello".to_string())]);

    let results = assert_ok!(execute(reader, mapper, reducer, false));

    assert_eq!(results, vec![Record::new("hello".to_string(), 2)]);
    assert_eq!(map_calls.get(), 1);
    assert_eq!(reduce_calls.get(), 1);
}

#[test]
fn verbose_and_quiet_runs_agree() {
    setup_tracing();
    let mut path = test_data_dir();
    path.push("small_test.txt");

    let quiet = assert_ok!(execute(TextFileReader::new(&path), WordCounter, Adder, false));
    let loud = assert_ok!(execute(TextFileReader::new(&path), WordCounter, Adder, true));
    assert_eq!(quiet, loud);
}

#[test]
fn emitter_output_is_kept_for_phases_that_completed_before_a_failure() {
    setup_tracing();
    let reducer = |_key: String, _values: Vec<u64>| -> anyhow::Result<Vec<Record<String, u64>>> {
        anyhow::bail!("reducer exploded")
    };
    let reader = VecReader::new(vec![(1u64, "a b".to_string())]);
    let mut emitter = CollectingEmitter::new();

    let outcome = MapReduce::new(reader, WordCounter, reducer).execute_with(&mut emitter);

    assert_matches!(outcome, Err(MapReduceError::Reduce { index: 0, .. }));
    assert!(emitter.lines(Phase::Map).is_some());
    assert!(emitter.lines(Phase::Shuffle).is_some());
    assert!(emitter.lines(Phase::Reduce).is_none());
}

#[test]
fn missing_input_file_is_a_reader_failure() {
    setup_tracing();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let reader = TextFileReader::new(dir.path().join("nope.txt"));

    let outcome = execute(reader, WordCounter, Adder, false);

    let error = assert_err!(outcome);
    assert!(format!("{error:?}").contains("Failed to open input file"));
    assert_matches!(error, MapReduceError::Read(_));
}
