#[derive(thiserror::Error, Debug)]
pub enum TrackerError {
    #[error("API key is missing or blank")]
    MissingCredential,
    #[error("Invalid player identity: {0}")]
    InvalidPlayer(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("API error {status}")]
    ApiStatus { status: u16 },
    #[error("Statistic \"{key}\" is not numeric: {value:?}")]
    StatNotNumeric { key: String, value: String },
}
