/// A scheduled match between two teams of the same league.
///
/// Teams are referenced by their index in the league's roster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fixture {
    pub home: usize,
    pub away: usize,
}

impl Fixture {
    /// Fixture with `home` hosting `away`; the two must differ.
    pub fn new(home: usize, away: usize) -> Self {
        debug_assert_ne!(home, away);
        Fixture { home, away }
    }

    /// Whether `team` plays in this fixture, home or away.
    pub fn involves(&self, team: usize) -> bool {
        self.home == team || self.away == team
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

/// Final score of a fixture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub home_goals: u32,
    pub away_goals: u32,
}

impl MatchResult {
    pub fn new(home_goals: u32, away_goals: u32) -> Self {
        MatchResult {
            home_goals,
            away_goals,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self.home_goals.cmp(&self.away_goals) {
            std::cmp::Ordering::Greater => Outcome::HomeWin,
            std::cmp::Ordering::Less => Outcome::AwayWin,
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

/// Build the full home-and-away schedule for teams in `order`.
///
/// Each team in turn anchors a cycle at home against the `n - 1` teams that follow it
/// (wrapping around), so every ordered pair appears exactly once.
/// Fewer than two teams produce no fixtures.
pub fn round_robin(order: &[usize]) -> Vec<Fixture> {
    let n = order.len();
    if n < 2 {
        return Vec::new();
    }

    let mut fixtures = Vec::with_capacity(n * (n - 1));
    for i in 0..n {
        for j in 0..n - 1 {
            let away_index = (i + j + 1) % n;
            fixtures.push(Fixture::new(order[i], order[away_index]));
        }
    }

    fixtures
}
