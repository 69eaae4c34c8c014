use crate::domain::model::{StandingRow, TeamStanding};
use std::collections::HashMap;

/// Rank a standings snapshot with standard competition ranking.
///
/// Display order is points descending, team name ascending. Rank
/// numbers are shared by tied points; the next distinct score lands at
/// its 1-based position, producing the 1,2,3,3,5 pattern.
pub fn rank(standings: &HashMap<String, TeamStanding>) -> Vec<StandingRow> {
    let mut entries: Vec<(&String, &TeamStanding)> = standings.iter().collect();
    entries.sort_by(|(team_a, standing_a), (team_b, standing_b)| {
        standing_b
            .points
            .cmp(&standing_a.points)
            .then_with(|| team_a.cmp(team_b))
    });

    let mut rows = Vec::with_capacity(entries.len());
    let mut previous_points = None;
    let mut previous_rank = 0;

    for (position, (team, standing)) in entries.into_iter().enumerate() {
        let rank = if previous_points == Some(standing.points) {
            previous_rank
        } else {
            position + 1
        };
        previous_points = Some(standing.points);
        previous_rank = rank;

        rows.push(StandingRow {
            rank,
            team: team.clone(),
            points: standing.points,
            matches_played: standing.matches_played,
        });
    }

    rows
}
