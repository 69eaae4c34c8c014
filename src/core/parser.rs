use crate::domain::model::MatchResult;
use crate::utils::error::{LeagueError, Result};
use regex::Regex;
use std::sync::LazyLock;

// Non-greedy team captures so a name carrying digits does not swallow
// the score. Anchored at both ends: trailing garbage makes the line
// malformed instead of being silently truncated, and surrounding
// whitespace is absorbed by the pattern itself rather than a separate
// trim step.
static RESULT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<team1>.+?) (?P<score1>[0-9]+), (?P<team2>.+?) (?P<score2>[0-9]+)\s*$")
        .unwrap()
});

pub struct ResultParser;

impl ResultParser {
    /// Parse one raw line into a structured match result.
    pub fn parse(raw: &str) -> Result<MatchResult> {
        let caps = RESULT_LINE
            .captures(raw)
            .ok_or_else(|| LeagueError::MalformedLineError {
                line: raw.to_string(),
            })?;

        Ok(MatchResult {
            team1: caps["team1"].to_string(),
            score1: parse_score(&caps["score1"])?,
            team2: caps["team2"].to_string(),
            score2: parse_score(&caps["score2"])?,
        })
    }
}

// The pattern already guarantees digits, so the only way this fails is
// a run of digits too large for u32.
fn parse_score(token: &str) -> Result<u32> {
    token
        .parse::<u32>()
        .map_err(|_| LeagueError::IntegerOverflowError {
            token: token.to_string(),
        })
}
