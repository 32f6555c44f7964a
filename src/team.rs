use std::fmt;

use crate::constants::{DRAW_POINTS, LOSS_POINTS, WIN_POINTS};
use crate::error::{LeagueError, Result};

/// A registered team and its cumulative league record.
///
/// Only the raw counters are stored; points and goal difference are derived on demand.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Team {
            name: name.into(),
            ..Default::default()
        }
    }

    /// League points: 3 per win, 1 per draw.
    pub fn points(&self) -> u32 {
        self.wins * WIN_POINTS + self.draws * DRAW_POINTS + self.losses * LOSS_POINTS
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }

    /// Number of resolved fixtures this team took part in.
    pub fn played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    /// Record one match from this team's point of view.
    ///
    /// Fails with `InvalidScore` if any counter would overflow; the record is then unchanged.
    pub fn record_match(&mut self, scored: u32, conceded: u32) -> Result<()> {
        *self = self.with_match(scored, conceded)?;
        Ok(())
    }

    /// The record this team would have after one more match.
    pub fn with_match(&self, scored: u32, conceded: u32) -> Result<Team> {
        let overflow = |what: &str| {
            LeagueError::InvalidScore(format!("{} for '{}' would overflow", what, self.name))
        };

        let mut next = self.clone();
        next.goals_for = self.goals_for.checked_add(scored).ok_or_else(|| overflow("goals for"))?;
        next.goals_against = self
            .goals_against
            .checked_add(conceded)
            .ok_or_else(|| overflow("goals against"))?;

        let counter = if scored > conceded {
            &mut next.wins
        } else if scored < conceded {
            &mut next.losses
        } else {
            &mut next.draws
        };
        *counter = counter.checked_add(1).ok_or_else(|| overflow("match count"))?;

        Ok(next)
    }

    /// Clear the record, keeping the name.
    pub fn reset(&mut self) {
        *self = Team::new(std::mem::take(&mut self.name));
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Points: {}, Goal Difference: {}",
            self.name,
            self.points(),
            self.goal_difference()
        )
    }
}
