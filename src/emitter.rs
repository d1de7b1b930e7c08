//! src/emitter.rs
//!
//! Display-only side channel for verbose executions. After each phase the
//! orchestrator renders the collection it holds and hands the lines to a
//! [`PhaseEmitter`]. Nothing an emitter does can reach back into the pipeline.
use crate::functions::{Group, Record};
use std::fmt::{self, Debug, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Map,
    Shuffle,
    Reduce,
}

impl Phase {
    pub fn heading(&self) -> &'static str {
        match self {
            Phase::Map => "After MAP step:",
            Phase::Shuffle => "After SHUFFLE step:",
            Phase::Reduce => "After REDUCE step:",
        }
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Map => write!(f, "map"),
            Phase::Shuffle => write!(f, "shuffle"),
            Phase::Reduce => write!(f, "reduce"),
        }
    }
}

pub trait PhaseEmitter {
    fn emit(&mut self, phase: Phase, lines: &[String]);
}

/// Logs every rendered line as an `info` event.
#[derive(Debug, Default)]
pub struct TracingEmitter;

impl PhaseEmitter for TracingEmitter {
    fn emit(&mut self, phase: Phase, lines: &[String]) {
        tracing::info!(%phase, "{}", phase.heading());
        for line in lines {
            tracing::info!(%phase, "{line}");
        }
    }
}

/// Keeps every snapshot in memory, in phase order.
#[derive(Debug, Default)]
pub struct CollectingEmitter {
    snapshots: Vec<(Phase, Vec<String>)>,
}

impl CollectingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> &[(Phase, Vec<String>)] {
        &self.snapshots
    }

    pub fn lines(&self, phase: Phase) -> Option<&[String]> {
        self.snapshots
            .iter()
            .find(|(p, _)| *p == phase)
            .map(|(_, lines)| lines.as_slice())
    }
}

impl PhaseEmitter for CollectingEmitter {
    fn emit(&mut self, phase: Phase, lines: &[String]) {
        self.snapshots.push((phase, lines.to_vec()));
    }
}

impl<E: PhaseEmitter + ?Sized> PhaseEmitter for &mut E {
    fn emit(&mut self, phase: Phase, lines: &[String]) {
        (**self).emit(phase, lines);
    }
}

pub fn render_records<K: Debug, V: Debug>(records: &[Record<K, V>]) -> Vec<String> {
    records
        .iter()
        .map(|record| format!("{:?} {:?}", record.key(), record.value()))
        .collect()
}

pub fn render_groups<K: Debug, V: Debug>(groups: &[Group<K, V>]) -> Vec<String> {
    groups
        .iter()
        .map(|group| format!("{:?} {:?}", group.key(), group.values()))
        .collect()
}
