/// League points awarded for a win
pub const WIN_POINTS: u32 = 3;

/// League points awarded for a draw
pub const DRAW_POINTS: u32 = 1;

/// League points awarded for a loss
pub const LOSS_POINTS: u32 = 0;

/// Smallest roster that can produce a schedule
pub const MIN_TEAMS: usize = 2;

/// Upper bound (inclusive) for uniformly simulated goals per side
pub const DEFAULT_MAX_GOALS: u32 = 4;

/// Mean goals per match for the home side in the Poisson score model
pub const DEFAULT_HOME_GOAL_RATE: f64 = 1.5;

/// Mean goals per match for the away side in the Poisson score model
pub const DEFAULT_AWAY_GOAL_RATE: f64 = 1.2;

/// Number of fixtures a complete round-robin produces for `team_count` teams
pub fn fixture_count(team_count: usize) -> usize {
    team_count * team_count.saturating_sub(1)
}
