//! League Core - round-robin league scheduling and standings.
//!
//! Teams are registered into a [`League`], which generates a home-and-away fixture
//! list, applies match results to each team's record and ranks the table by points
//! and goal difference. Optional Python bindings are built with the `python` feature.

pub mod constants;
pub mod error;
pub mod fixture;
pub mod league;
pub mod results;
pub mod simulation;
pub mod standings;
pub mod team;

#[cfg(feature = "python")]
mod python;

pub use constants::{fixture_count, DRAW_POINTS, LOSS_POINTS, MIN_TEAMS, WIN_POINTS};
pub use error::{LeagueError, Result};
pub use fixture::{round_robin, Fixture, MatchResult, Outcome};
pub use league::League;
pub use results::{parse_goals, parse_results, parse_score, read_results, ResultLine};
pub use simulation::{make_rng, ScoreModel};
pub use standings::{rank, StandingsRow};
pub use team::Team;
