use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Roster data errors
    #[error("Invalid height '{value}' for player '{player}': expected a leading integer like '42 inches'")]
    HeightParse { player: String, value: String },

    #[error(
        "Experienced and inexperienced player counts are not equal: {experienced} experienced, {inexperienced} inexperienced. Check the roster data and try again."
    )]
    Imbalance {
        experienced: usize,
        inexperienced: usize,
    },

    #[error("Duplicate team name: '{name}'")]
    DuplicateTeam { name: String },

    #[error("No team names supplied")]
    NoTeams,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a height parse error naming the offending player and value
    pub fn height_parse_error(player: impl Into<String>, value: impl Into<String>) -> Self {
        Self::HeightParse {
            player: player.into(),
            value: value.into(),
        }
    }

    /// Create an imbalance error with both partition sizes
    pub fn imbalance_error(experienced: usize, inexperienced: usize) -> Self {
        Self::Imbalance {
            experienced,
            inexperienced,
        }
    }

    /// Create a duplicate team error
    pub fn duplicate_team_error(name: impl Into<String>) -> Self {
        Self::DuplicateTeam { name: name.into() }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// True for errors caused by the roster data itself rather than the
    /// environment (I/O, config). These are reported on a stats page and
    /// abort the run.
    pub fn is_roster_error(&self) -> bool {
        matches!(
            self,
            AppError::HeightParse { .. }
                | AppError::Imbalance { .. }
                | AppError::DuplicateTeam { .. }
                | AppError::NoTeams
        )
    }
}
