use crate::core::Pipeline;
use crate::domain::model::RunSummary;
use crate::utils::error::Result;

pub struct LeagueEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> LeagueEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        // Ingest
        tracing::info!("Ingesting match results...");
        let ingest = self.pipeline.ingest()?;
        tracing::info!(
            "Read {} lines ({} folded, {} skipped)",
            ingest.lines_read,
            ingest.results_folded,
            ingest.skipped
        );

        // Rank
        tracing::info!("Computing ranking...");
        let rows = self.pipeline.rank()?;
        tracing::info!("Ranked {} teams", rows.len());

        // Publish
        tracing::info!("Publishing table...");
        let teams_ranked = self.pipeline.publish(&rows)?;

        Ok(RunSummary {
            ingest,
            teams_ranked,
        })
    }
}
