use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{fixture_count, MIN_TEAMS};
use crate::error::{LeagueError, Result};
use crate::fixture::{round_robin, Fixture, MatchResult, Outcome};
use crate::simulation::{make_rng, ScoreModel};
use crate::standings::{rank, StandingsRow};
use crate::team::Team;

/// A single round-robin league: roster, schedule and running records.
///
/// Teams live in an index arena owned by the league; fixtures refer to them by index.
#[derive(Clone, Debug)]
pub struct League {
    capacity: usize,
    teams: Vec<Team>,
    fixtures: Vec<Fixture>,
    generated: bool,
}

impl League {
    /// Create an empty league that will hold exactly `team_count` teams.
    pub fn new(team_count: usize) -> Result<Self> {
        if team_count < MIN_TEAMS {
            return Err(LeagueError::InvalidConfiguration(format!(
                "a league needs at least {} teams, got {}",
                MIN_TEAMS, team_count
            )));
        }

        Ok(League {
            capacity: team_count,
            teams: Vec::with_capacity(team_count),
            fixtures: Vec::new(),
            generated: false,
        })
    }

    /// Register a team and return its roster index.
    ///
    /// Surrounding whitespace is stripped, so `"A "` and `"A"` are the same team.
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<usize> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(LeagueError::InvalidConfiguration(
                "team name cannot be empty".to_string(),
            ));
        }
        if self.team_index(&name).is_some() {
            return Err(LeagueError::DuplicateTeam(name));
        }
        if self.is_full() {
            return Err(LeagueError::LeagueFull {
                capacity: self.capacity,
            });
        }

        self.teams.push(Team::new(name));
        if self.is_full() {
            info!("roster complete with {} teams", self.capacity);
        }
        Ok(self.teams.len() - 1)
    }

    /// Build the home-and-away schedule once the roster is complete.
    ///
    /// The pairing order is scrambled with `rng`; the set of fixtures is always every
    /// ordered pair of distinct teams.
    pub fn generate_fixtures<R: Rng>(&mut self, rng: &mut R) -> Result<&[Fixture]> {
        if self.teams.len() != self.capacity {
            return Err(LeagueError::IncompleteRoster {
                expected: self.capacity,
                registered: self.teams.len(),
            });
        }
        if self.generated {
            return Err(LeagueError::FixturesAlreadyGenerated);
        }

        let mut order: Vec<usize> = (0..self.teams.len()).collect();
        order.shuffle(rng);

        self.fixtures = round_robin(&order);
        self.generated = true;
        debug_assert_eq!(self.fixtures.len(), fixture_count(self.capacity));

        debug!(
            "generated {} fixtures for {} teams",
            self.fixtures.len(),
            self.capacity
        );
        Ok(&self.fixtures)
    }

    /// Generate fixtures from a seed, or from system entropy when `seed` is `None`.
    pub fn generate_fixtures_seeded(&mut self, seed: Option<u64>) -> Result<&[Fixture]> {
        let mut rng = make_rng(seed);
        self.generate_fixtures(&mut rng)
    }

    /// Apply a final score to both teams of `fixture`.
    ///
    /// Callers must apply each fixture at most once: a repeated call counts the match again.
    /// Goal totals that would overflow are rejected with `InvalidScore` and neither team changes.
    pub fn apply_result(&mut self, fixture: &Fixture, result: MatchResult) -> Result<Outcome> {
        let n = self.teams.len();
        if fixture.home >= n || fixture.away >= n || fixture.home == fixture.away {
            return Err(LeagueError::ForeignFixture {
                home: fixture.home,
                away: fixture.away,
            });
        }

        let home = self.teams[fixture.home].with_match(result.home_goals, result.away_goals)?;
        let away = self.teams[fixture.away].with_match(result.away_goals, result.home_goals)?;
        self.teams[fixture.home] = home;
        self.teams[fixture.away] = away;

        debug!(
            "{} {}-{} {}",
            self.teams[fixture.home].name,
            result.home_goals,
            result.away_goals,
            self.teams[fixture.away].name
        );
        Ok(result.outcome())
    }

    /// Apply a final score to the fixture at `index` in the schedule.
    pub fn record_result(&mut self, index: usize, home_goals: u32, away_goals: u32) -> Result<Outcome> {
        let fixture = *self
            .fixtures
            .get(index)
            .ok_or(LeagueError::UnknownFixture(index))?;
        self.apply_result(&fixture, MatchResult::new(home_goals, away_goals))
    }

    /// Play every scheduled fixture once with scores drawn from `model`.
    pub fn simulate_season<R: Rng>(
        &mut self,
        model: &ScoreModel,
        rng: &mut R,
    ) -> Result<Vec<MatchResult>> {
        if !self.generated {
            return Err(LeagueError::FixturesNotGenerated);
        }

        let fixtures = self.fixtures.clone();
        let mut results = Vec::with_capacity(fixtures.len());
        for fixture in &fixtures {
            let result = model.sample(rng);
            self.apply_result(fixture, result)?;
            results.push(result);
        }

        info!("simulated {} fixtures", results.len());
        Ok(results)
    }

    /// Current table, best team first.
    pub fn standings(&self) -> Vec<StandingsRow> {
        rank(&self.teams)
    }

    /// Clear every team's record; roster and schedule are kept.
    pub fn reset_stats(&mut self) {
        for team in &mut self.teams {
            team.reset();
        }
    }

    /// Roster index of `name`, ignoring surrounding whitespace.
    pub fn team_index(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.teams.iter().position(|t| t.name == name)
    }

    /// Schedule index of the fixture with `home` hosting `away`.
    pub fn fixture_between(&self, home: &str, away: &str) -> Result<usize> {
        let not_found = || LeagueError::UnknownPairing {
            home: home.to_string(),
            away: away.to_string(),
        };
        let home_idx = self.team_index(home).ok_or_else(not_found)?;
        let away_idx = self.team_index(away).ok_or_else(not_found)?;

        self.fixtures
            .iter()
            .position(|f| f.home == home_idx && f.away == away_idx)
            .ok_or_else(not_found)
    }

    pub fn team(&self, index: usize) -> Option<&Team> {
        self.teams.get(index)
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn fixtures(&self) -> &[Fixture] {
        &self.fixtures
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.teams.len() >= self.capacity
    }

    /// Team names of a fixture as `(home, away)`.
    pub fn fixture_names(&self, fixture: &Fixture) -> Option<(&str, &str)> {
        let home = self.teams.get(fixture.home)?;
        let away = self.teams.get(fixture.away)?;
        Some((home.name.as_str(), away.name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn make_league(names: &[&str]) -> League {
        let mut league = League::new(names.len()).unwrap();
        for name in names {
            league.add_team(*name).unwrap();
        }
        league
    }

    fn name_pairs(league: &League) -> HashSet<(String, String)> {
        league
            .fixtures()
            .iter()
            .map(|f| {
                let (home, away) = league.fixture_names(f).unwrap();
                (home.to_string(), away.to_string())
            })
            .collect()
    }

    #[test]
    fn test_new_rejects_small_leagues() {
        assert!(matches!(League::new(0), Err(LeagueError::InvalidConfiguration(_))));
        assert!(matches!(League::new(1), Err(LeagueError::InvalidConfiguration(_))));
        assert!(League::new(2).is_ok());
    }

    #[test]
    fn test_roster_errors() {
        let mut league = League::new(2).unwrap();
        assert_eq!(league.add_team("A"), Ok(0));
        assert_eq!(
            league.add_team("A"),
            Err(LeagueError::DuplicateTeam("A".to_string()))
        );
        assert_eq!(league.add_team("B"), Ok(1));
        assert_eq!(league.add_team("C"), Err(LeagueError::LeagueFull { capacity: 2 }));
        assert_eq!(league.teams().len(), 2);
    }

    #[test]
    fn test_team_names_are_trimmed() {
        let mut league = League::new(3).unwrap();
        assert_eq!(league.add_team(" A "), Ok(0));
        assert_eq!(
            league.add_team("A"),
            Err(LeagueError::DuplicateTeam("A".to_string()))
        );
        assert!(matches!(
            league.add_team("   "),
            Err(LeagueError::InvalidConfiguration(_))
        ));
        assert_eq!(league.team(0).unwrap().name, "A");
        assert_eq!(league.team_index("A  "), Some(0));
    }

    #[test]
    fn test_generate_requires_full_roster() {
        let mut league = League::new(3).unwrap();
        league.add_team("A").unwrap();

        assert_eq!(
            league.generate_fixtures_seeded(Some(1)).map(|f| f.len()),
            Err(LeagueError::IncompleteRoster {
                expected: 3,
                registered: 1
            })
        );
        assert!(league.fixtures().is_empty());
    }

    #[test]
    fn test_generate_only_once() {
        let mut league = make_league(&["A", "B"]);
        league.generate_fixtures_seeded(Some(1)).unwrap();
        assert_eq!(
            league.generate_fixtures_seeded(Some(2)).map(|f| f.len()),
            Err(LeagueError::FixturesAlreadyGenerated)
        );
        assert_eq!(league.fixtures().len(), 2);
    }

    #[test]
    fn test_four_teams_every_pair_once() {
        let mut league = make_league(&["A", "B", "C", "D"]);
        let count = league.generate_fixtures_seeded(Some(42)).unwrap().len();
        assert_eq!(count, 12);

        let pairs = name_pairs(&league);
        assert_eq!(pairs.len(), 12);
        for home in ["A", "B", "C", "D"] {
            for away in ["A", "B", "C", "D"] {
                if home != away {
                    assert!(pairs.contains(&(home.to_string(), away.to_string())));
                }
            }
        }
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut league1 = make_league(&["A", "B", "C", "D", "E"]);
        let mut league2 = make_league(&["A", "B", "C", "D", "E"]);

        let fixtures1 = league1.generate_fixtures_seeded(Some(9)).unwrap().to_vec();
        let fixtures2 = league2.generate_fixtures_seeded(Some(9)).unwrap().to_vec();
        assert_eq!(fixtures1, fixtures2);
    }

    #[test]
    fn test_home_win() {
        let mut league = make_league(&["A", "B"]);
        league.generate_fixtures_seeded(Some(1)).unwrap();
        let index = league.fixture_between("A", "B").unwrap();

        assert_eq!(league.record_result(index, 3, 1), Ok(Outcome::HomeWin));

        let a = league.team(league.team_index("A").unwrap()).unwrap();
        let b = league.team(league.team_index("B").unwrap()).unwrap();
        assert_eq!((a.wins, a.draws, a.losses), (1, 0, 0));
        assert_eq!((a.points(), a.goal_difference()), (3, 2));
        assert_eq!((b.wins, b.draws, b.losses), (0, 0, 1));
        assert_eq!((b.points(), b.goal_difference()), (0, -2));

        let names: Vec<String> = league.standings().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_draw() {
        let mut league = make_league(&["A", "B"]);
        league.generate_fixtures_seeded(Some(1)).unwrap();
        let index = league.fixture_between("A", "B").unwrap();

        assert_eq!(league.record_result(index, 2, 2), Ok(Outcome::Draw));

        let table = league.standings();
        assert_eq!(table.len(), 2);
        for row in &table {
            assert_eq!(row.draws, 1);
            assert_eq!(row.points, 1);
            assert_eq!(row.goal_difference, 0);
        }
    }

    #[test]
    fn test_away_win() {
        let mut league = make_league(&["A", "B"]);
        league.generate_fixtures_seeded(Some(1)).unwrap();
        let index = league.fixture_between("A", "B").unwrap();

        assert_eq!(league.record_result(index, 0, 1), Ok(Outcome::AwayWin));
        assert_eq!(league.standings()[0].name, "B");
    }

    #[test]
    fn test_applying_twice_double_counts() {
        // At-most-once application is the caller's responsibility.
        let mut league = make_league(&["A", "B"]);
        league.generate_fixtures_seeded(Some(1)).unwrap();
        let index = league.fixture_between("A", "B").unwrap();

        league.record_result(index, 1, 0).unwrap();
        league.record_result(index, 1, 0).unwrap();

        let a = league.team(league.team_index("A").unwrap()).unwrap();
        assert_eq!(a.wins, 2);
        assert_eq!(a.played(), 2);
        let involving_a = league.fixtures().iter().filter(|f| f.involves(0)).count();
        assert_eq!(involving_a, 2);
    }

    #[test]
    fn test_goal_overflow_leaves_league_unchanged() {
        let mut league = make_league(&["A", "B", "C"]);
        league.generate_fixtures_seeded(Some(3)).unwrap();
        let huge = crate::results::parse_goals("3000000000").unwrap();

        let first = league.fixture_between("A", "B").unwrap();
        assert_eq!(league.record_result(first, huge, 0), Ok(Outcome::HomeWin));

        let before = league.teams().to_vec();
        let second = league.fixture_between("A", "C").unwrap();
        assert!(matches!(
            league.record_result(second, huge, 0),
            Err(LeagueError::InvalidScore(_))
        ));
        assert_eq!(league.teams(), &before[..]);

        let a = league.team(league.team_index("A").unwrap()).unwrap();
        assert_eq!(a.goals_for, 3_000_000_000);
        assert_eq!(a.played(), 1);
    }

    #[test]
    fn test_overflow_on_away_side_leaves_home_unchanged() {
        let mut league = make_league(&["A", "B", "C"]);
        league.generate_fixtures_seeded(Some(3)).unwrap();
        let c_hosts_b = league.fixture_between("C", "B").unwrap();
        league.record_result(c_hosts_b, 0, u32::MAX).unwrap();

        // A's side of the score is fine; B's goals for would overflow.
        let before = league.teams().to_vec();
        let a_hosts_b = league.fixture_between("A", "B").unwrap();
        assert!(matches!(
            league.record_result(a_hosts_b, 0, 1),
            Err(LeagueError::InvalidScore(_))
        ));
        assert_eq!(league.teams(), &before[..]);
    }

    #[test]
    fn test_record_unknown_fixture() {
        let mut league = make_league(&["A", "B"]);
        assert_eq!(league.record_result(0, 1, 0), Err(LeagueError::UnknownFixture(0)));

        league.generate_fixtures_seeded(Some(1)).unwrap();
        assert_eq!(league.record_result(2, 1, 0), Err(LeagueError::UnknownFixture(2)));
    }

    #[test]
    fn test_apply_foreign_fixture() {
        let mut league = make_league(&["A", "B"]);
        let result = league.apply_result(&Fixture { home: 0, away: 5 }, MatchResult::new(1, 0));
        assert_eq!(result, Err(LeagueError::ForeignFixture { home: 0, away: 5 }));
        assert!(league.teams().iter().all(|t| t.played() == 0));
    }

    #[test]
    fn test_fixture_between_unknown() {
        let mut league = make_league(&["A", "B"]);
        league.generate_fixtures_seeded(Some(1)).unwrap();
        assert!(matches!(
            league.fixture_between("A", "Z"),
            Err(LeagueError::UnknownPairing { .. })
        ));
        assert!(matches!(
            league.fixture_between("A", "A"),
            Err(LeagueError::UnknownPairing { .. })
        ));
    }

    #[test]
    fn test_simulate_requires_fixtures() {
        let mut league = make_league(&["A", "B"]);
        let mut rng = make_rng(Some(1));
        assert_eq!(
            league.simulate_season(&ScoreModel::default(), &mut rng),
            Err(LeagueError::FixturesNotGenerated)
        );
    }

    #[test]
    fn test_reset_stats() {
        let mut league = make_league(&["A", "B", "C"]);
        league.generate_fixtures_seeded(Some(5)).unwrap();
        let mut rng = make_rng(Some(5));
        league.simulate_season(&ScoreModel::default(), &mut rng).unwrap();

        league.reset_stats();
        assert!(league.teams().iter().all(|t| t.played() == 0 && t.points() == 0));
        assert_eq!(league.fixtures().len(), 6);
        assert_eq!(league.team_index("C"), Some(2));
    }

    #[test]
    fn test_running_table_after_each_fixture() {
        let mut league = make_league(&["A", "B", "C"]);
        league.generate_fixtures_seeded(Some(11)).unwrap();

        for index in 0..league.fixtures().len() {
            league.record_result(index, 1, 0).unwrap();
            let table = league.standings();
            let played: u32 = table.iter().map(|r| r.wins + r.draws + r.losses).sum();
            assert_eq!(played as usize, 2 * (index + 1));
        }
    }

    proptest! {
        #[test]
        fn prop_schedule_covers_all_ordered_pairs(n in 2usize..16, seed in any::<u64>()) {
            let names: Vec<String> = (0..n).map(|i| format!("Team{}", i)).collect();
            let mut league = League::new(n).unwrap();
            for name in &names {
                league.add_team(name.clone()).unwrap();
            }

            let count = league.generate_fixtures_seeded(Some(seed)).unwrap().len();
            prop_assert_eq!(count, n * (n - 1));
            prop_assert_eq!(name_pairs(&league).len(), n * (n - 1));
        }

        #[test]
        fn prop_full_season_ledger_is_consistent(n in 2usize..10, seed in any::<u64>()) {
            let mut league = League::new(n).unwrap();
            for i in 0..n {
                league.add_team(format!("Team{}", i)).unwrap();
            }
            league.generate_fixtures_seeded(Some(seed)).unwrap();

            let mut rng = make_rng(Some(seed));
            let results = league.simulate_season(&ScoreModel::default(), &mut rng).unwrap();
            prop_assert_eq!(results.len(), n * (n - 1));

            for (index, team) in league.teams().iter().enumerate() {
                let involved = league.fixtures().iter().filter(|f| f.involves(index)).count();
                prop_assert_eq!(team.played() as usize, involved);
                prop_assert_eq!(team.points(), 3 * team.wins + team.draws);
            }

            let total_for: u32 = league.teams().iter().map(|t| t.goals_for).sum();
            let total_against: u32 = league.teams().iter().map(|t| t.goals_against).sum();
            prop_assert_eq!(total_for, total_against);
        }
    }
}
