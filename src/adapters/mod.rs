// Adapters layer: concrete implementations of the ports for the
// outside world (file/stdin line sources, stdout sinks per format).

pub mod sink;
pub mod source;

pub use sink::{format_row, CsvSink, JsonSink, TextSink};
pub use source::{FileSource, StdinSource};
