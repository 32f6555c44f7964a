use thiserror::Error;

pub type Result<T> = std::result::Result<T, LeagueError>;

/// Everything the league refuses to do.
///
/// All variants are recoverable: the league is left unchanged when one is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeagueError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("team '{0}' is already registered")]
    DuplicateTeam(String),

    #[error("league is full ({capacity} teams)")]
    LeagueFull { capacity: usize },

    #[error("roster incomplete: {registered} of {expected} teams registered")]
    IncompleteRoster { expected: usize, registered: usize },

    #[error("fixtures have already been generated")]
    FixturesAlreadyGenerated,

    #[error("fixtures have not been generated yet")]
    FixturesNotGenerated,

    #[error("invalid score: {0}")]
    InvalidScore(String),

    #[error("no fixture at index {0}")]
    UnknownFixture(usize),

    #[error("fixture {home} vs {away} does not belong to this league")]
    ForeignFixture { home: usize, away: usize },

    #[error("no fixture {home} vs {away}")]
    UnknownPairing { home: String, away: String },

    #[error("io error: {0}")]
    Io(String),
}

impl From<std::io::Error> for LeagueError {
    fn from(e: std::io::Error) -> Self {
        LeagueError::Io(e.to_string())
    }
}
