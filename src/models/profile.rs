use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Profile payload returned by the Tracker Network endpoint.
///
/// Only the lifetime stats array is addressed by key; everything else the API
/// sends is kept in `extra` so callers can still reach fields we don't model.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(rename = "epicUserHandle")]
    pub epic_user_handle: Option<String>,
    #[serde(rename = "platformNameLong")]
    pub platform_name_long: Option<String>,
    #[serde(rename = "lifeTimeStats")]
    pub life_time_stats: Vec<LifetimeStat>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// One named lifetime statistic. Values are strings on the wire even when
/// numeric ("Wins" → "120", "Win%" → "9.2%").
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LifetimeStat {
    pub key: String,
    pub value: String,
}
