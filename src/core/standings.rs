use crate::domain::model::{MatchResult, Outcome, TeamStanding};
use std::collections::HashMap;

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

/// Accumulates points and matches played per team. The table is the
/// only mutable state in the pipeline and the only mutation path is
/// `add_result`; there is no removal or undo.
#[derive(Debug, Default)]
pub struct StandingsAggregator {
    table: HashMap<String, TeamStanding>,
    history: Vec<MatchResult>,
}

impl StandingsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one structured result into the table. Any structurally
    /// valid result is accepted, including a team facing itself (both
    /// updates then land on the same accumulator).
    pub fn add_result(&mut self, result: MatchResult) {
        self.played(&result.team1);
        self.played(&result.team2);

        match result.outcome() {
            Outcome::Tie => {
                self.award(&result.team1, POINTS_FOR_DRAW);
                self.award(&result.team2, POINTS_FOR_DRAW);
            }
            Outcome::Team1Win => self.award(&result.team1, POINTS_FOR_WIN),
            Outcome::Team2Win => self.award(&result.team2, POINTS_FOR_WIN),
        }

        self.history.push(result);
    }

    // Insert with zero, then increment; no implicit default on read.
    fn played(&mut self, team: &str) {
        self.table.entry(team.to_string()).or_default().matches_played += 1;
    }

    fn award(&mut self, team: &str, points: u32) {
        self.table.entry(team.to_string()).or_default().points += points;
    }

    pub fn standings(&self) -> &HashMap<String, TeamStanding> {
        &self.table
    }

    pub fn history(&self) -> &[MatchResult] {
        &self.history
    }

    pub fn team_count(&self) -> usize {
        self.table.len()
    }
}
