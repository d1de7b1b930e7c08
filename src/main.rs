//! src/main.rs
use anyhow::Context;
use mapreduce_sim::configuration::get_configuration;
use mapreduce_sim::mappers::WordCounter;
use mapreduce_sim::readers::{TextFileReader, VecReader};
use mapreduce_sim::reducers::Adder;
use mapreduce_sim::telemetry::init_tracing;

fn main() -> anyhow::Result<()> {
    let configuration = get_configuration().context("Failed to read configuration.")?;
    init_tracing(&configuration.telemetry.log_filter).context("Failed to setup tracing.")?;

    let verbose = configuration.job.verbose;
    let word_counts = match &configuration.job.input {
        Some(path) => {
            mapreduce_sim::execute(TextFileReader::new(path), WordCounter, Adder, verbose)?
        }
        None => {
            let sample = VecReader::new(vec![(1u64, "2".to_string()), (1, "3".to_string())]);
            mapreduce_sim::execute(sample, WordCounter, Adder, verbose)?
        }
    };

    for record in word_counts {
        println!("{} {}", record.key(), record.value());
    }
    Ok(())
}
