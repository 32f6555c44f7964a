use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use statrs::distribution::Poisson;

use crate::constants::{DEFAULT_AWAY_GOAL_RATE, DEFAULT_HOME_GOAL_RATE, DEFAULT_MAX_GOALS};
use crate::error::{LeagueError, Result};
use crate::fixture::MatchResult;

/// How placeholder scores are drawn when a season is simulated.
#[derive(Clone, Debug)]
pub enum ScoreModel {
    /// Each side scores uniformly in `0..=max_goals`.
    Uniform { max_goals: u32 },

    /// Each side scores according to its own Poisson distribution.
    Poisson { home: Poisson, away: Poisson },
}

impl Default for ScoreModel {
    fn default() -> Self {
        ScoreModel::Uniform {
            max_goals: DEFAULT_MAX_GOALS,
        }
    }
}

impl ScoreModel {
    pub fn uniform(max_goals: u32) -> Self {
        ScoreModel::Uniform { max_goals }
    }

    /// Poisson model with the given mean goals per side.
    ///
    /// Rates must be finite and strictly positive.
    pub fn poisson(home_rate: f64, away_rate: f64) -> Result<Self> {
        let home = Poisson::new(home_rate).map_err(|e| {
            LeagueError::InvalidConfiguration(format!("home goal rate {}: {}", home_rate, e))
        })?;
        let away = Poisson::new(away_rate).map_err(|e| {
            LeagueError::InvalidConfiguration(format!("away goal rate {}: {}", away_rate, e))
        })?;
        Ok(ScoreModel::Poisson { home, away })
    }

    /// Poisson model with the default home and away rates.
    pub fn default_poisson() -> Result<Self> {
        ScoreModel::poisson(DEFAULT_HOME_GOAL_RATE, DEFAULT_AWAY_GOAL_RATE)
    }

    /// Draw one final score.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> MatchResult {
        match self {
            ScoreModel::Uniform { max_goals } => MatchResult::new(
                rng.gen_range(0..=*max_goals),
                rng.gen_range(0..=*max_goals),
            ),
            ScoreModel::Poisson { home, away } => {
                let home_goals: f64 = home.sample(rng);
                let away_goals: f64 = away.sample(rng);
                MatchResult::new(home_goals as u32, away_goals as u32)
            }
        }
    }
}

/// Random stream for schedule shuffling and score simulation.
///
/// A fixed seed reproduces the same stream; `None` seeds from system entropy.
pub fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}
