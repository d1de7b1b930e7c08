//! src/lib.rs
pub mod configuration;
pub mod emitter;
pub mod error;
pub mod functions;
pub mod mappers;
pub mod mapreduce;
pub mod readers;
pub mod reducers;
pub mod shuffle;
pub mod telemetry;
#[cfg(test)]
mod test_utils;

pub use error::MapReduceError;
pub use functions::{Group, Mapper, Reader, Record, Reducer};
pub use mapreduce::{MapReduce, execute};
