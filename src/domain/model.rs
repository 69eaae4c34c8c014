use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Result of comparing the two scores of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Tie,
    Team1Win,
    Team2Win,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub team1: String,
    pub score1: u32,
    pub team2: String,
    pub score2: u32,
}

impl MatchResult {
    /// The outcome is a pure function of the scores. It is computed on
    /// demand rather than stored, so it can never fall out of sync with
    /// them.
    pub fn outcome(&self) -> Outcome {
        match self.score1.cmp(&self.score2) {
            Ordering::Equal => Outcome::Tie,
            Ordering::Greater => Outcome::Team1Win,
            Ordering::Less => Outcome::Team2Win,
        }
    }
}

/// Per-team accumulator. `Default` is the zero state a team starts from
/// on first reference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub matches_played: u32,
    pub points: u32,
}

/// One row of the ranked table, computed fresh on every ranking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub rank: usize,
    pub team: String,
    pub points: u32,
    pub matches_played: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Fail the run on the first line that does not parse
    Abort,
    /// Warn, drop the line, keep going
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One "<rank>. <team>, <points> pts" line per team
    Text,
    /// CSV with a header row
    Csv,
    /// A JSON array of standing rows
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestSummary {
    pub lines_read: usize,
    pub results_folded: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ingest: IngestSummary,
    pub teams_ranked: usize,
}
