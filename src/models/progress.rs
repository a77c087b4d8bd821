use serde::{Deserialize, Serialize};

/// One win-rate sample for the progress chart. History is assembled by the
/// caller; nothing in this crate records it.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProgressPoint {
    #[serde(rename = "dateCollected")]
    pub date: String,
    #[serde(rename = "winRate")]
    pub win_rate: f64,
}

impl ProgressPoint {
    pub fn new(date: impl Into<String>, win_rate: f64) -> Self {
        Self {
            date: date.into(),
            win_rate,
        }
    }
}
