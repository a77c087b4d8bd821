use std::collections::HashMap;
use std::fmt;

use tracing::warn;

use crate::client::ProfileApi;
use crate::error::TrackerError;
use crate::models::profile::LifetimeStat;

/// Identity a repository is fetched for. Both parts are checked non-empty at
/// construction so the client never builds a URL with a blank segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerId {
    platform: String,
    username: String,
}

impl PlayerId {
    pub fn new(
        platform: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self, TrackerError> {
        let platform = platform.into();
        let username = username.into();
        if platform.trim().is_empty() {
            return Err(TrackerError::InvalidPlayer("platform is empty".into()));
        }
        if username.trim().is_empty() {
            return Err(TrackerError::InvalidPlayer("username is empty".into()));
        }
        Ok(Self { platform, username })
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.platform, self.username)
    }
}

/// One named lifetime statistic, as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatEntry {
    pub key: String,
    pub value: String,
}

#[derive(Debug)]
struct Snapshot {
    entries: Vec<StatEntry>,
    index: HashMap<String, String>,
}

impl Snapshot {
    fn from_stats(stats: Vec<LifetimeStat>) -> Self {
        let entries: Vec<StatEntry> = stats
            .into_iter()
            .map(|s| StatEntry {
                key: s.key,
                value: s.value,
            })
            .collect();

        // Fold in order; a duplicate key keeps the most recently seen value.
        let mut index = HashMap::with_capacity(entries.len());
        for entry in &entries {
            index.insert(entry.key.clone(), entry.value.clone());
        }

        Self { entries, index }
    }
}

/// Holds the lifetime stats fetched for one player.
///
/// Fetching happens exactly once, at construction. A transport failure or a
/// non-success response leaves the repository empty instead of erroring;
/// every query on an empty repository reports the absent outcome.
pub struct StatsRepository {
    player: PlayerId,
    snapshot: Option<Snapshot>,
}

impl StatsRepository {
    pub async fn fetch(api: &dyn ProfileApi, player: PlayerId) -> Self {
        let snapshot = match api.fetch_profile(&player).await {
            Ok(profile) => Some(Snapshot::from_stats(profile.life_time_stats)),
            Err(err) => {
                warn!(player = %player, %err, "profile fetch failed, repository is empty");
                None
            }
        };
        Self { player, snapshot }
    }

    pub fn player(&self) -> &PlayerId {
        &self.player
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_none()
    }

    /// Full stats list in the order the API returned them.
    pub fn snapshot(&self) -> Option<&[StatEntry]> {
        self.snapshot.as_ref().map(|s| s.entries.as_slice())
    }

    /// Key→value view of the snapshot.
    pub fn index(&self) -> Option<&HashMap<String, String>> {
        self.snapshot.as_ref().map(|s| &s.index)
    }

    /// Look up a single stat. `None` when the repository is empty or the key
    /// is not present; a stat whose value is the empty string is `Some("")`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.snapshot
            .as_ref()
            .and_then(|s| s.index.get(key))
            .map(String::as_str)
    }

    /// Pair each requested key with its value, preserving caller order and
    /// duplicates. `None` only when the repository is empty.
    pub fn values_table(&self, keys: &[&str]) -> Option<Vec<(String, Option<String>)>> {
        let snapshot = self.snapshot.as_ref()?;
        Some(
            keys.iter()
                .map(|&key| (key.to_string(), snapshot.index.get(key).cloned()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(key: &str, value: &str) -> LifetimeStat {
        LifetimeStat {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn player_id_rejects_blank_parts() {
        assert!(matches!(
            PlayerId::new("", "ninja"),
            Err(TrackerError::InvalidPlayer(_))
        ));
        assert!(matches!(
            PlayerId::new("pc", "  "),
            Err(TrackerError::InvalidPlayer(_))
        ));
        assert!(PlayerId::new("pc", "ninja").is_ok());
    }

    #[test]
    fn snapshot_keeps_order_and_folds_duplicates_last_wins() {
        let snap = Snapshot::from_stats(vec![
            stat("Wins", "10"),
            stat("Kills", "500"),
            stat("Wins", "12"),
        ]);

        let keys: Vec<&str> = snap.entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["Wins", "Kills", "Wins"]);
        assert_eq!(snap.index.len(), 2);
        assert_eq!(snap.index.get("Wins").map(String::as_str), Some("12"));
    }

    #[test]
    fn empty_string_value_is_still_present() {
        let repo = StatsRepository {
            player: PlayerId::new("pc", "ninja").unwrap(),
            snapshot: Some(Snapshot::from_stats(vec![stat("Score", "")])),
        };
        assert_eq!(repo.value("Score"), Some(""));
        assert_eq!(repo.value("Missing"), None);
    }
}
