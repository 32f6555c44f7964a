use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{LeagueError, Result};
use crate::fixture::MatchResult;
use crate::league::League;

/// One played match as read from a results sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultLine {
    pub home: String,
    pub away: String,
    pub result: MatchResult,
}

/// Parse a goal count typed by a user or read from a sheet.
///
/// Only non-negative whole numbers are accepted.
pub fn parse_goals(input: &str) -> Result<u32> {
    let input = input.trim();
    if input.is_empty() {
        return Err(LeagueError::InvalidScore("missing goal count".to_string()));
    }

    match input.parse::<i64>() {
        Ok(goals) if goals < 0 => Err(LeagueError::InvalidScore(format!(
            "goal count cannot be negative: {}",
            goals
        ))),
        Ok(goals) => u32::try_from(goals)
            .map_err(|_| LeagueError::InvalidScore(format!("goal count too large: {}", goals))),
        Err(_) => Err(LeagueError::InvalidScore(format!(
            "not a whole number: '{}'",
            input
        ))),
    }
}

/// Parse a score written as `home-away`, e.g. `3-1`.
pub fn parse_score(input: &str) -> Result<MatchResult> {
    let (home, away) = input
        .split_once('-')
        .ok_or_else(|| LeagueError::InvalidScore(format!("expected 'home-away', got '{}'", input)))?;
    Ok(MatchResult::new(parse_goals(home)?, parse_goals(away)?))
}

/// Read results from `reader`.
/// Format: home,away,home_goals,away_goals
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_results<R: BufRead>(reader: R) -> Result<Vec<ResultLine>> {
    let mut lines = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(LeagueError::InvalidScore(format!(
                "expected 4 fields, got {}: '{}'",
                parts.len(),
                line
            )));
        }

        lines.push(ResultLine {
            home: parts[0].to_string(),
            away: parts[1].to_string(),
            result: MatchResult::new(parse_goals(parts[2])?, parse_goals(parts[3])?),
        });
    }

    Ok(lines)
}

pub fn read_results(path: impl AsRef<Path>) -> Result<Vec<ResultLine>> {
    let file = File::open(path)?;
    parse_results(BufReader::new(file))
}

impl League {
    /// Apply a batch of results.
    ///
    /// Every line is matched to a fixture before any record changes, so a bad line
    /// leaves the league untouched. Returns the number of results applied.
    pub fn apply_results(&mut self, lines: &[ResultLine]) -> Result<usize> {
        let indices = lines
            .iter()
            .map(|line| self.fixture_between(&line.home, &line.away))
            .collect::<Result<Vec<usize>>>()?;

        for (index, line) in indices.into_iter().zip(lines) {
            self.record_result(index, line.result.home_goals, line.result.away_goals)?;
        }

        debug!("applied {} results", lines.len());
        Ok(lines.len())
    }

    pub fn apply_results_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let lines = read_results(path)?;
        self.apply_results(&lines)
    }
}
