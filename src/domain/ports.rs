use crate::domain::model::{IngestSummary, MalformedPolicy, OutputFormat, StandingRow};
use crate::utils::error::Result;

/// Produces a finite sequence of raw result lines, one at a time.
/// `Ok(None)` marks end of input and is the normal termination.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Option<String>>;
}

impl<S: LineSource + ?Sized> LineSource for Box<S> {
    fn next_line(&mut self) -> Result<Option<String>> {
        (**self).next_line()
    }
}

/// Consumes the ranked rows, one at a time, in order. `finish` runs once
/// after the last row.
pub trait ResultSink {
    fn write_row(&mut self, row: &StandingRow) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<K: ResultSink + ?Sized> ResultSink for Box<K> {
    fn write_row(&mut self, row: &StandingRow) -> Result<()> {
        (**self).write_row(row)
    }

    fn finish(&mut self) -> Result<()> {
        (**self).finish()
    }
}

pub trait ConfigProvider {
    fn input_path(&self) -> Option<&str>;
    fn malformed_policy(&self) -> MalformedPolicy;
    fn output_format(&self) -> OutputFormat;
}

pub trait Pipeline {
    /// Read, parse and fold result lines until the source is exhausted.
    fn ingest(&mut self) -> Result<IngestSummary>;

    /// Rank the current standings snapshot. Read-only and repeatable,
    /// including mid-stream.
    fn rank(&self) -> Result<Vec<StandingRow>>;

    /// Hand the ranked rows to the sink; returns the number published.
    fn publish(&mut self, rows: &[StandingRow]) -> Result<usize>;
}
