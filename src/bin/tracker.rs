use std::env;
use std::fs;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fortnite_stats::{
    ChartOutcome, PlayerId, ProgressPoint, StatsPresenter, StatsRepository, TermChart,
    TrackerClient, TrackerError,
};

const DEFAULT_TABLE_STATS: &[&str] = &["Wins", "K/d", "Kills", "Matches Played", "Top 10", "Win%"];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fortnite_stats=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenv::dotenv().ok();
    let api_key = env::var("TRN_API_KEY").context("TRN_API_KEY must be set")?;

    let args: Vec<String> = env::args().collect();
    let username = args
        .get(1)
        .context("usage: tracker <username> [platform] [stat,stat,...] [history.json]")?;
    let platform = args.get(2).map(String::as_str).unwrap_or("pc");
    let selected: Vec<&str> = match args.get(3) {
        Some(list) => list.split(',').map(|s| s.trim()).collect(),
        None => DEFAULT_TABLE_STATS.to_vec(),
    };

    let client = TrackerClient::new(api_key)?;
    let player = PlayerId::new(platform, username.as_str())?;
    info!(player = %player, "fetching lifetime stats");
    let repo = StatsRepository::fetch(&client, player).await;

    let chart = TermChart::default();
    let presenter = StatsPresenter::new(&chart);

    println!("{}", presenter.render_full_table(&repo));
    println!("{}", presenter.render_table(&repo, &selected));

    report(presenter.render_single_chart(&repo, "Wins"));
    report(presenter.render_multi_chart(&repo, &["Wins", "Kills", "K/d"]));

    if let Some(path) = args.get(4) {
        let history = load_history(path)?;
        report(presenter.render_time_series(&history));
    }

    Ok(())
}

fn load_history(path: &str) -> anyhow::Result<Vec<ProgressPoint>> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path))
}

fn report(result: Result<ChartOutcome, TrackerError>) {
    match result {
        Ok(outcome) => {
            if let Some(message) = outcome.message() {
                println!("{}", message);
            }
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}
