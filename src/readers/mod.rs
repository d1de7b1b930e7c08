//! src/readers/mod.rs
mod text_file;
mod vec_reader;

pub use text_file::{TextFileReader, TextLines};
pub use vec_reader::VecReader;
