use thiserror::Error;

/// Errors surfaced at the API boundary
///
/// The physics core itself never fails: degenerate numeric input is handled
/// by policy (zero-length vectors normalize to zero, parallel sweeps are
/// skipped).
#[derive(Debug, Error)]
pub enum GameError {
    /// Brick layout is empty, ragged, or uses a hit-point value with no colour
    #[error("invalid brick layout: {0}")]
    InvalidLayout(String),

    /// Out-of-range index, unknown move intent, or unusable scalar
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A tuning value that cannot produce a playable game
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration JSON could not be parsed
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Configuration file could not be read
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
