use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::TrackerError;
use crate::models::profile::ProfileResponse;
use crate::repository::PlayerId;

const DEFAULT_BASE_URL: &str = "https://api.fortnitetracker.com/v1/profile";

/// Source of profile data. The repository only ever sees this trait, so tests
/// can swap the HTTP client for a canned response.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn fetch_profile(&self, player: &PlayerId) -> Result<ProfileResponse, TrackerError>;
}

pub struct TrackerClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl TrackerClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, TrackerError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TrackerError::MissingCredential);
        }
        Ok(Self {
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        })
    }

    /// Point the client at a different profile endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn profile_url(&self, player: &PlayerId) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            player.platform(),
            player.username()
        )
    }
}

#[async_trait]
impl ProfileApi for TrackerClient {
    async fn fetch_profile(&self, player: &PlayerId) -> Result<ProfileResponse, TrackerError> {
        let url = self.profile_url(player);
        debug!(%url, "fetching profile");

        let resp = self
            .http
            .get(&url)
            .header("TRN-Api-Key", &self.api_key)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TrackerError::ApiStatus {
                status: status.as_u16(),
            });
        }
        Ok(resp.json().await?)
    }
}
