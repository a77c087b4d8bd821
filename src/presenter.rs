use crate::error::TrackerError;
use crate::models::progress::ProgressPoint;
use crate::render::chart::{BarChartSpec, ChartRenderer, LineChartSpec};
use crate::render::table;
use crate::repository::StatsRepository;

pub const NO_STATS_MESSAGE: &str = "No stats found for the user.";

/// What a chart call did. `message()` is the user-facing text for the
/// outcomes that draw nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartOutcome {
    Drawn,
    NoStats,
    MissingStat(String),
    MissingStats(Vec<String>),
}

impl ChartOutcome {
    pub fn message(&self) -> Option<String> {
        match self {
            ChartOutcome::Drawn => None,
            ChartOutcome::NoStats => Some(NO_STATS_MESSAGE.to_string()),
            ChartOutcome::MissingStat(key) => Some(format!("Statistic \"{}\" not found.", key)),
            ChartOutcome::MissingStats(_) => Some("One or more statistics not found.".to_string()),
        }
    }
}

/// Renders repository data as text tables and charts. Stateless; every call
/// reads the repository's already-resolved snapshot.
pub struct StatsPresenter<'a> {
    chart: &'a dyn ChartRenderer,
}

impl<'a> StatsPresenter<'a> {
    pub fn new(chart: &'a dyn ChartRenderer) -> Self {
        Self { chart }
    }

    /// Table of the requested stats, in caller order. Missing stats show "-";
    /// an empty repository yields the no-stats message instead of a table.
    pub fn render_table(&self, repo: &StatsRepository, keys: &[&str]) -> String {
        match repo.values_table(keys) {
            Some(rows) => table::stats_table(&rows).to_string(),
            None => NO_STATS_MESSAGE.to_string(),
        }
    }

    /// Table of every lifetime stat, in the order the API returned them.
    pub fn render_full_table(&self, repo: &StatsRepository) -> String {
        match repo.snapshot() {
            Some(entries) => {
                let rows: Vec<(String, Option<String>)> = entries
                    .iter()
                    .map(|e| (e.key.clone(), Some(e.value.clone())))
                    .collect();
                table::stats_table(&rows).to_string()
            }
            None => NO_STATS_MESSAGE.to_string(),
        }
    }

    /// One labeled bar for a single stat. The stat's value must parse as an
    /// integer; a non-numeric value is an error, not a zero-height bar.
    pub fn render_single_chart(
        &self,
        repo: &StatsRepository,
        key: &str,
    ) -> Result<ChartOutcome, TrackerError> {
        if repo.is_empty() {
            return Ok(ChartOutcome::NoStats);
        }
        let value = match repo.value(key) {
            Some(value) => value,
            None => return Ok(ChartOutcome::MissingStat(key.to_string())),
        };
        let parsed = parse_stat(key, value)?;

        self.chart.bar_chart(&BarChartSpec {
            title: format!("{} for {}", key, repo.player().username()),
            x_label: key.to_string(),
            y_label: "Value".to_string(),
            bars: vec![(key.to_string(), parsed)],
        })?;
        Ok(ChartOutcome::Drawn)
    }

    /// Grouped bar chart over several stats, all-or-nothing: if any key is
    /// absent nothing is drawn and every missing key is reported at once.
    pub fn render_multi_chart(
        &self,
        repo: &StatsRepository,
        keys: &[&str],
    ) -> Result<ChartOutcome, TrackerError> {
        let rows = match repo.values_table(keys) {
            Some(rows) => rows,
            None => return Ok(ChartOutcome::NoStats),
        };

        let missing: Vec<String> = rows
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(key, _)| key.clone())
            .collect();
        if !missing.is_empty() {
            return Ok(ChartOutcome::MissingStats(missing));
        }

        let bars = rows
            .iter()
            .map(|(key, value)| {
                let value = value.as_deref().unwrap_or("");
                parse_stat(key, value).map(|parsed| (key.clone(), parsed))
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.chart.bar_chart(&BarChartSpec {
            title: format!("Statistics for {}", repo.player().username()),
            x_label: "Statistic".to_string(),
            y_label: "Value".to_string(),
            bars,
        })?;
        Ok(ChartOutcome::Drawn)
    }

    /// Win-rate over time as a line chart. The history is assembled by the
    /// caller; this does not read the repository.
    pub fn render_time_series(
        &self,
        points: &[ProgressPoint],
    ) -> Result<ChartOutcome, TrackerError> {
        if points.is_empty() {
            return Ok(ChartOutcome::NoStats);
        }
        self.chart.line_chart(&LineChartSpec {
            title: "Win Rate Over Time".to_string(),
            x_label: "Date".to_string(),
            y_label: "Win Rate".to_string(),
            points: points.iter().map(|p| (p.date.clone(), p.win_rate)).collect(),
        })?;
        Ok(ChartOutcome::Drawn)
    }
}

fn parse_stat(key: &str, value: &str) -> Result<i64, TrackerError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| TrackerError::StatNotNumeric {
            key: key.to_string(),
            value: value.to_string(),
        })
}
