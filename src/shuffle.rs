//! src/shuffle.rs
//!
//! Sort and group the intermediate records between the map and reduce phases.
use crate::error::MapReduceError;
use crate::functions::{Group, Record};
use std::cmp::Ordering;
use std::fmt::Debug;

/// Stable sort by key. Records with equal keys keep their emission order.
///
/// Keys only need `PartialOrd`. The first pair of keys the sort cannot order
/// (a `NaN` float, or two incomparable keys of a partial order) aborts it with
/// [`MapReduceError::Ordering`].
pub fn sort_by_key<K, V>(records: Vec<Record<K, V>>) -> Result<Vec<Record<K, V>>, MapReduceError>
where
    K: PartialOrd + Debug,
{
    // A key that is not equal to itself can never be grouped.
    if let Some(record) = records
        .iter()
        .find(|record| record.key().partial_cmp(record.key()) != Some(Ordering::Equal))
    {
        return Err(ordering_violation(record.key(), record.key()));
    }
    merge_sort(records)
}

fn ordering_violation<K: Debug>(left: &K, right: &K) -> MapReduceError {
    MapReduceError::Ordering {
        left: format!("{left:?}"),
        right: format!("{right:?}"),
    }
}

// Top-down merge sort. Never hands a non-total comparator to `slice::sort_by`,
// which may panic on one; stops at the first pair of keys with no ordering.
fn merge_sort<K, V>(mut records: Vec<Record<K, V>>) -> Result<Vec<Record<K, V>>, MapReduceError>
where
    K: PartialOrd + Debug,
{
    if records.len() <= 1 {
        return Ok(records);
    }
    let right = records.split_off(records.len() / 2);
    merge(merge_sort(records)?, merge_sort(right)?)
}

fn merge<K, V>(
    left: Vec<Record<K, V>>,
    right: Vec<Record<K, V>>,
) -> Result<Vec<Record<K, V>>, MapReduceError>
where
    K: PartialOrd + Debug,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        // Ties take from the left run to keep the sort stable.
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => match l.key().partial_cmp(r.key()) {
                Some(Ordering::Greater) => true,
                Some(_) => false,
                None => return Err(ordering_violation(l.key(), r.key())),
            },
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}

/// Merge contiguous runs of equal keys into groups.
///
/// The input must already be sorted by key; an unsorted input yields one group
/// per run rather than one group per key.
pub fn group<K, V>(sorted: Vec<Record<K, V>>) -> Vec<Group<K, V>>
where
    K: PartialEq,
{
    let mut groups: Vec<Group<K, V>> = Vec::new();
    for record in sorted {
        let (key, value) = record.into_parts();
        if let Some(current) = groups.last_mut() {
            if *current.key() == key {
                current.push(value);
                continue;
            }
        }
        groups.push(Group::new(key, vec![value]));
    }
    groups
}

/// Sort then group.
pub fn shuffle<K, V>(records: Vec<Record<K, V>>) -> Result<Vec<Group<K, V>>, MapReduceError>
where
    K: PartialOrd + Debug,
{
    Ok(group(sort_by_key(records)?))
}
