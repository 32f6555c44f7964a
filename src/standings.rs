use std::cmp::Ordering;
use std::fmt;

use crate::team::Team;

/// One line of the league table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StandingsRow {
    /// 1-based position
    pub rank: usize,
    pub name: String,
    pub points: u32,
    pub goal_difference: i64,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl StandingsRow {
    fn from_team(rank: usize, team: &Team) -> Self {
        StandingsRow {
            rank,
            name: team.name.clone(),
            points: team.points(),
            goal_difference: team.goal_difference(),
            wins: team.wins,
            draws: team.draws,
            losses: team.losses,
            goals_for: team.goals_for,
            goals_against: team.goals_against,
        }
    }
}

impl fmt::Display for StandingsRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} - Points: {}, Goal Difference: {}",
            self.rank, self.name, self.points, self.goal_difference
        )
    }
}

/// Table order: points descending, then goal difference descending.
///
/// Teams level on both are ordered by name so the table is reproducible.
pub fn compare(a: &Team, b: &Team) -> Ordering {
    b.points()
        .cmp(&a.points())
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Rank `teams` without touching their records.
pub fn rank(teams: &[Team]) -> Vec<StandingsRow> {
    let mut ordered: Vec<&Team> = teams.iter().collect();
    ordered.sort_by(|a, b| compare(a, b));

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, team)| StandingsRow::from_team(i + 1, team))
        .collect()
}
