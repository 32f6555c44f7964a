use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::constants::{DEFAULT_AWAY_GOAL_RATE, DEFAULT_HOME_GOAL_RATE, DEFAULT_MAX_GOALS};
use crate::error::LeagueError;
use crate::league::League;
use crate::simulation::{make_rng, ScoreModel};
use crate::standings::StandingsRow;

impl From<LeagueError> for PyErr {
    fn from(e: LeagueError) -> Self {
        match e {
            LeagueError::Io(_) => PyIOError::new_err(e.to_string()),
            _ => PyValueError::new_err(e.to_string()),
        }
    }
}

/// One line of the league table.
#[pyclass(name = "StandingsRow")]
#[derive(Clone, Debug)]
pub struct PyStandingsRow {
    #[pyo3(get)]
    pub rank: usize,
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub points: u32,
    #[pyo3(get)]
    pub goal_difference: i64,
    #[pyo3(get)]
    pub wins: u32,
    #[pyo3(get)]
    pub draws: u32,
    #[pyo3(get)]
    pub losses: u32,
    #[pyo3(get)]
    pub goals_for: u32,
    #[pyo3(get)]
    pub goals_against: u32,
}

impl From<StandingsRow> for PyStandingsRow {
    fn from(row: StandingsRow) -> Self {
        PyStandingsRow {
            rank: row.rank,
            name: row.name,
            points: row.points,
            goal_difference: row.goal_difference,
            wins: row.wins,
            draws: row.draws,
            losses: row.losses,
            goals_for: row.goals_for,
            goals_against: row.goals_against,
        }
    }
}

#[pymethods]
impl PyStandingsRow {
    fn __repr__(&self) -> String {
        format!(
            "StandingsRow({}, {:?}, points={}, goal_difference={})",
            self.rank, self.name, self.points, self.goal_difference
        )
    }
}

/// Round-robin league exposed to Python.
#[pyclass(name = "League")]
pub struct PyLeague {
    inner: League,
}

#[pymethods]
impl PyLeague {
    #[new]
    fn new(team_count: usize) -> PyResult<Self> {
        Ok(PyLeague {
            inner: League::new(team_count)?,
        })
    }

    /// Register a team and return its roster index.
    fn add_team(&mut self, name: String) -> PyResult<usize> {
        Ok(self.inner.add_team(name)?)
    }

    /// Generate the schedule; returns (home, away) name pairs in playing order.
    #[pyo3(signature = (seed = None))]
    fn generate_fixtures(&mut self, seed: Option<u64>) -> PyResult<Vec<(String, String)>> {
        self.inner.generate_fixtures_seeded(seed)?;
        Ok(self.fixtures())
    }

    fn fixtures(&self) -> Vec<(String, String)> {
        self.inner
            .fixtures()
            .iter()
            .filter_map(|f| self.inner.fixture_names(f))
            .map(|(home, away)| (home.to_string(), away.to_string()))
            .collect()
    }

    fn record_result(&mut self, fixture: usize, home_goals: u32, away_goals: u32) -> PyResult<()> {
        self.inner.record_result(fixture, home_goals, away_goals)?;
        Ok(())
    }

    /// Apply a results file (home,away,home_goals,away_goals per line).
    fn apply_results_file(&mut self, path: &str) -> PyResult<usize> {
        Ok(self.inner.apply_results_file(path)?)
    }

    /// Play every fixture with random scores.
    ///
    /// With `poisson` the home and away rates are used; otherwise goals are uniform
    /// in `0..=max_goals`.
    #[pyo3(signature = (
        seed = None,
        max_goals = DEFAULT_MAX_GOALS,
        poisson = false,
        home_rate = DEFAULT_HOME_GOAL_RATE,
        away_rate = DEFAULT_AWAY_GOAL_RATE
    ))]
    fn simulate_season(
        &mut self,
        seed: Option<u64>,
        max_goals: u32,
        poisson: bool,
        home_rate: f64,
        away_rate: f64,
    ) -> PyResult<Vec<(u32, u32)>> {
        let model = if poisson {
            ScoreModel::poisson(home_rate, away_rate)?
        } else {
            ScoreModel::uniform(max_goals)
        };

        let mut rng = make_rng(seed);
        let results = self.inner.simulate_season(&model, &mut rng)?;
        Ok(results
            .into_iter()
            .map(|r| (r.home_goals, r.away_goals))
            .collect())
    }

    fn standings(&self) -> Vec<PyStandingsRow> {
        self.inner
            .standings()
            .into_iter()
            .map(PyStandingsRow::from)
            .collect()
    }

    fn reset_stats(&mut self) {
        self.inner.reset_stats();
    }

    fn __len__(&self) -> usize {
        self.inner.teams().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "League({} of {} teams, {} fixtures)",
            self.inner.teams().len(),
            self.inner.capacity(),
            self.inner.fixtures().len()
        )
    }
}

/// Python module definition
#[pymodule]
fn league_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyLeague>()?;
    m.add_class::<PyStandingsRow>()?;

    m.add("WIN_POINTS", crate::constants::WIN_POINTS)?;
    m.add("DRAW_POINTS", crate::constants::DRAW_POINTS)?;
    m.add("MIN_TEAMS", crate::constants::MIN_TEAMS)?;

    Ok(())
}
