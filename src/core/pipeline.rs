use crate::core::parser::ResultParser;
use crate::core::ranking;
use crate::core::standings::StandingsAggregator;
use crate::core::{ConfigProvider, LineSource, Pipeline, ResultSink};
use crate::domain::model::{IngestSummary, MalformedPolicy, StandingRow};
use crate::utils::error::Result;

pub struct StandingsPipeline<S: LineSource, K: ResultSink, C: ConfigProvider> {
    source: S,
    sink: K,
    config: C,
    aggregator: StandingsAggregator,
}

impl<S: LineSource, K: ResultSink, C: ConfigProvider> StandingsPipeline<S, K, C> {
    pub fn new(source: S, sink: K, config: C) -> Self {
        Self {
            source,
            sink,
            config,
            aggregator: StandingsAggregator::new(),
        }
    }

    pub fn aggregator(&self) -> &StandingsAggregator {
        &self.aggregator
    }
}

impl<S: LineSource, K: ResultSink, C: ConfigProvider> Pipeline for StandingsPipeline<S, K, C> {
    fn ingest(&mut self) -> Result<IngestSummary> {
        let mut summary = IngestSummary::default();

        // Strictly sequential fold: each line is fully parsed and
        // folded before the next one is read.
        while let Some(line) = self.source.next_line()? {
            summary.lines_read += 1;

            match ResultParser::parse(&line) {
                Ok(result) => {
                    tracing::debug!("folding result: {:?}", result);
                    self.aggregator.add_result(result);
                    summary.results_folded += 1;
                }
                Err(e) => match self.config.malformed_policy() {
                    MalformedPolicy::Abort => return Err(e.at_line(summary.lines_read)),
                    MalformedPolicy::Skip => {
                        tracing::warn!("Skipping line {}: {}", summary.lines_read, e);
                        summary.skipped += 1;
                    }
                },
            }
        }

        Ok(summary)
    }

    fn rank(&self) -> Result<Vec<StandingRow>> {
        Ok(ranking::rank(self.aggregator.standings()))
    }

    fn publish(&mut self, rows: &[StandingRow]) -> Result<usize> {
        for row in rows {
            self.sink.write_row(row)?;
        }
        self.sink.finish()?;

        Ok(rows.len())
    }
}
