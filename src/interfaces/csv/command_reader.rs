use crate::domain::command::Command;
use crate::error::{Result, SimulationError};
use std::io::Read;

/// Reads batch commands from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over
/// `Result<Command>`. Whitespace is trimmed and record lengths are
/// flexible, so operations may leave unused trailing columns empty.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Creates a new `CommandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes commands.
    ///
    /// This allows processing large batches in a streaming fashion
    /// without loading the entire file into memory.
    pub fn commands(self) -> impl Iterator<Item = Result<Command>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(SimulationError::from))
    }
}
