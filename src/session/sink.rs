//! Session sinks.

use std::io::Write;

use im::Vector;

use super::record::{SessionError, SessionRecord};
use crate::core::GameState;

/// Destination for session records.
///
/// Implementations may fail; the game logs the error and carries on.
pub trait SessionSink {
    fn append(&mut self, record: &SessionRecord) -> Result<(), SessionError>;
}

/// Discards every record.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl SessionSink for NullSink {
    fn append(&mut self, _record: &SessionRecord) -> Result<(), SessionError> {
        Ok(())
    }
}

/// Keeps every record in memory.
///
/// Backed by `im::Vector`, so `snapshot()` is O(1).
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    records: Vector<SessionRecord>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All records so far, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &SessionRecord> {
        self.records.iter()
    }

    /// Cheap copy of the log at this moment.
    #[must_use]
    pub fn snapshot(&self) -> Vector<SessionRecord> {
        self.records.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// State after the most recent recorded action.
    #[must_use]
    pub fn latest_state(&self) -> Option<&GameState> {
        self.records.last().map(|r| &r.state)
    }
}

impl SessionSink for MemorySink {
    fn append(&mut self, record: &SessionRecord) -> Result<(), SessionError> {
        self.records.push_back(record.clone());
        Ok(())
    }
}

/// Writes one JSON record per line.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> SessionSink for JsonLinesSink<W> {
    fn append(&mut self, record: &SessionRecord) -> Result<(), SessionError> {
        let line = record.to_json()?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}
