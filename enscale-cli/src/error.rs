use enscale_units::error::RangeError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown unit: {0}")]
    UnknownUnit(String),

    #[error("unknown prefix: {0}")]
    UnknownPrefix(String),

    #[error("{value} has no value in {unit}")]
    UndefinedConversion { unit: String, value: f64 },

    #[error(transparent)]
    Range(#[from] RangeError),
}
