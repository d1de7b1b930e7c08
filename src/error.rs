//! src/error.rs

#[derive(thiserror::Error)]
pub enum MapReduceError {
    #[error("Reader failed to produce input records")]
    Read(#[source] anyhow::Error),
    #[error("Mapper failed on input record {index}")]
    Map {
        index: usize,
        #[source]
        source: anyhow::Error,
    },
    #[error("Reducer failed on group {index}")]
    Reduce {
        index: usize,
        #[source]
        source: anyhow::Error,
    },
    #[error("Keys {left} and {right} have no defined ordering")]
    Ordering { left: String, right: String },
}

impl std::fmt::Debug for MapReduceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(f, self)
    }
}

pub fn error_chain_fmt(
    f: &mut std::fmt::Formatter<'_>,
    e: &impl std::error::Error,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
