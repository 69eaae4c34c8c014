use crate::domain::model::StandingRow;
use crate::domain::ports::ResultSink;
use crate::utils::error::Result;
use std::io::Write;

/// Canonical report rendering: `"<rank>. <team>, <points> pts"`, with
/// the singular `pt` exactly when points == 1.
pub fn format_row(row: &StandingRow) -> String {
    let unit = if row.points == 1 { "pt" } else { "pts" };
    format!("{}. {}, {} {}", row.rank, row.team, row.points, unit)
}

pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ResultSink for TextSink<W> {
    fn write_row(&mut self, row: &StandingRow) -> Result<()> {
        writeln!(self.writer, "{}", format_row(row))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }
}

impl CsvSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ResultSink for CsvSink<W> {
    fn write_row(&mut self, row: &StandingRow) -> Result<()> {
        self.writer.serialize(row)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

pub struct JsonSink<W: Write> {
    writer: W,
    rows: Vec<StandingRow>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            rows: Vec::new(),
        }
    }
}

impl JsonSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ResultSink for JsonSink<W> {
    fn write_row(&mut self, row: &StandingRow) -> Result<()> {
        self.rows.push(row.clone());
        Ok(())
    }

    // The array is only well-formed once every row is in, so it is
    // written in one piece at the end.
    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.rows)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
