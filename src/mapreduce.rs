//! src/mapreduce.rs
//!
//! The orchestrator. A job runs map, shuffle and reduce one after another on the
//! calling thread, with every intermediate collection held in memory. There is no
//! spilling, so the map output of a job must fit in RAM.
use crate::emitter::{Phase, PhaseEmitter, TracingEmitter, render_groups, render_records};
use crate::error::MapReduceError;
use crate::functions::{Group, Mapper, Reader, Record, Reducer};
use crate::shuffle::shuffle;
use std::fmt::Debug;
use uuid::Uuid;

pub struct MapReduce<R, M, D> {
    reader: R,
    mapper: M,
    reducer: D,
}

impl<R, M, D> MapReduce<R, M, D>
where
    R: Reader,
    M: Mapper<R::Key, R::Value>,
    M::Key: PartialOrd + Debug,
    M::Value: Debug,
    D: Reducer<M::Key, M::Value>,
    D::Key: Debug,
    D::Value: Debug,
{
    pub fn new(reader: R, mapper: M, reducer: D) -> Self {
        MapReduce {
            reader,
            mapper,
            reducer,
        }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Run the job. With `verbose` set, each phase's collection is logged
    /// through [`TracingEmitter`].
    pub fn execute(
        &mut self,
        verbose: bool,
    ) -> Result<Vec<Record<D::Key, D::Value>>, MapReduceError> {
        if verbose {
            let mut emitter = TracingEmitter;
            self.run(Some(&mut emitter as &mut dyn PhaseEmitter))
        } else {
            self.run(None)
        }
    }

    /// Run the job, rendering each phase's collection to `emitter`.
    pub fn execute_with<E: PhaseEmitter>(
        &mut self,
        emitter: &mut E,
    ) -> Result<Vec<Record<D::Key, D::Value>>, MapReduceError> {
        self.run(Some(emitter as &mut dyn PhaseEmitter))
    }

    #[tracing::instrument(
        name = "Execute MapReduce job",
        skip_all,
        fields(job_id = %Uuid::new_v4())
    )]
    fn run(
        &mut self,
        mut emitter: Option<&mut dyn PhaseEmitter>,
    ) -> Result<Vec<Record<D::Key, D::Value>>, MapReduceError> {
        let mapped = map_phase(&mut self.reader, &mut self.mapper)?;
        if let Some(emitter) = emitter.as_mut() {
            emitter.emit(Phase::Map, &render_records(&mapped));
        }

        let grouped = shuffle_phase(mapped)?;
        if let Some(emitter) = emitter.as_mut() {
            emitter.emit(Phase::Shuffle, &render_groups(&grouped));
        }

        let reduced = reduce_phase(grouped, &mut self.reducer)?;
        if let Some(emitter) = emitter.as_mut() {
            emitter.emit(Phase::Reduce, &render_records(&reduced));
        }

        tracing::info!(results = reduced.len(), "MapReduce job finished");
        Ok(reduced)
    }
}

/// Build and run a job in one call.
pub fn execute<R, M, D>(
    reader: R,
    mapper: M,
    reducer: D,
    verbose: bool,
) -> Result<Vec<Record<D::Key, D::Value>>, MapReduceError>
where
    R: Reader,
    M: Mapper<R::Key, R::Value>,
    M::Key: PartialOrd + Debug,
    M::Value: Debug,
    D: Reducer<M::Key, M::Value>,
    D::Key: Debug,
    D::Value: Debug,
{
    MapReduce::new(reader, mapper, reducer).execute(verbose)
}

#[tracing::instrument(name = "Map phase", skip_all)]
fn map_phase<R, M>(
    reader: &mut R,
    mapper: &mut M,
) -> Result<Vec<Record<M::Key, M::Value>>, MapReduceError>
where
    R: Reader,
    M: Mapper<R::Key, R::Value>,
{
    let mut mapped = Vec::new();
    for (index, record) in reader.read().map_err(MapReduceError::Read)?.enumerate() {
        let (key, value) = record.map_err(MapReduceError::Read)?.into_parts();
        let emitted = mapper
            .map(key, value)
            .map_err(|source| MapReduceError::Map { index, source })?;
        mapped.extend(emitted);
    }
    tracing::debug!(records = mapped.len(), "Map phase complete");
    Ok(mapped)
}

#[tracing::instrument(name = "Shuffle phase", skip_all)]
fn shuffle_phase<K, V>(mapped: Vec<Record<K, V>>) -> Result<Vec<Group<K, V>>, MapReduceError>
where
    K: PartialOrd + Debug,
{
    let grouped = shuffle(mapped)?;
    tracing::debug!(groups = grouped.len(), "Shuffle phase complete");
    Ok(grouped)
}

#[tracing::instrument(name = "Reduce phase", skip_all)]
fn reduce_phase<K, V, D>(
    grouped: Vec<Group<K, V>>,
    reducer: &mut D,
) -> Result<Vec<Record<D::Key, D::Value>>, MapReduceError>
where
    D: Reducer<K, V>,
{
    let mut reduced = Vec::new();
    for (index, group) in grouped.into_iter().enumerate() {
        let (key, values) = group.into_parts();
        let emitted = reducer
            .reduce(key, values)
            .map_err(|source| MapReduceError::Reduce { index, source })?;
        reduced.extend(emitted);
    }
    tracing::debug!(records = reduced.len(), "Reduce phase complete");
    Ok(reduced)
}
