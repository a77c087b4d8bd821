// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use fortnite_stats::{
    BarChartSpec, ChartRenderer, LineChartSpec, PlayerId, ProfileApi, ProfileResponse,
    StatsRepository, TrackerError,
};

/// ProfileApi double that answers with a canned outcome instead of hitting
/// the network.
pub enum CannedProfile {
    Json(serde_json::Value),
    Status(u16),
}

impl CannedProfile {
    /// Success response whose lifeTimeStats array holds the given pairs.
    pub fn stats(entries: &[(&str, &str)]) -> Self {
        let stats: Vec<serde_json::Value> = entries
            .iter()
            .map(|(key, value)| json!({ "key": key, "value": value }))
            .collect();
        CannedProfile::Json(json!({ "lifeTimeStats": stats }))
    }
}

#[async_trait]
impl ProfileApi for CannedProfile {
    async fn fetch_profile(&self, _player: &PlayerId) -> Result<ProfileResponse, TrackerError> {
        match self {
            CannedProfile::Json(value) => Ok(serde_json::from_value(value.clone())?),
            CannedProfile::Status(status) => Err(TrackerError::ApiStatus { status: *status }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartCall {
    Bar(BarChartSpec),
    Line(LineChartSpec),
}

/// ChartRenderer double that records every invocation and draws nothing.
#[derive(Default)]
pub struct RecordingChart {
    calls: Mutex<Vec<ChartCall>>,
}

impl RecordingChart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ChartCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ChartRenderer for RecordingChart {
    fn bar_chart(&self, spec: &BarChartSpec) -> Result<(), TrackerError> {
        self.calls.lock().unwrap().push(ChartCall::Bar(spec.clone()));
        Ok(())
    }

    fn line_chart(&self, spec: &LineChartSpec) -> Result<(), TrackerError> {
        self.calls.lock().unwrap().push(ChartCall::Line(spec.clone()));
        Ok(())
    }
}

pub fn player() -> PlayerId {
    PlayerId::new("pc", "ninja").expect("test identity should be valid")
}

pub async fn repo_with(entries: &[(&str, &str)]) -> StatsRepository {
    let api = CannedProfile::stats(entries);
    StatsRepository::fetch(&api, player()).await
}

pub async fn empty_repo() -> StatsRepository {
    let api = CannedProfile::Status(404);
    StatsRepository::fetch(&api, player()).await
}
