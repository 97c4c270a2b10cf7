use std::{path::PathBuf, sync::Arc};

use anyhow::{bail, Context};
use clap::Parser;

use dispatch_board_core::{telemetry, BoardSync, DashboardConfig, InMemoryStore};

#[derive(Parser, Debug)]
#[command(name = "dispatch-board")]
#[command(version)]
#[command(about = "Load the delivery job board and print its snapshot")]
struct Args {
    /// JSON configuration file (defaults are used when omitted)
    config: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Skip the simulated store latency
    #[arg(long)]
    instant: bool,

    /// Print one line per board instead of the full JSON snapshot
    #[arg(long)]
    summary: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    telemetry::init_tracing(&args.log_level)?;

    let mut config = match &args.config {
        Some(path) => DashboardConfig::load(path)
            .await
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => DashboardConfig::default(),
    };
    if args.instant {
        config.store = dispatch_board_core::StoreConfig::instant();
    }

    tracing::info!(
        boards = config.layout.columns.len(),
        seeded = config.seed_demo_data,
        "starting dispatch board"
    );

    let store = Arc::new(InMemoryStore::new(config.build_boards(), config.store.clone()));
    let sync = BoardSync::connect(store, config.catalog.clone()).await;

    if let Some(message) = sync.error() {
        bail!("{}", message);
    }

    if args.summary {
        for board in sync.boards() {
            println!("{:>3}  {:<12} {} job(s)", board.id, board.title, board.len());
        }
    } else {
        println!("{}", serde_json::to_string_pretty(sync.boards())?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_is_positional() {
        let args = Args::try_parse_from(["dispatch-board", "board.json", "--summary"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("board.json")));
        assert!(args.summary);

        let args = Args::try_parse_from(["dispatch-board"]).unwrap();
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "info");

        assert!(Args::try_parse_from(["dispatch-board", "--config", "board.json"]).is_err());
    }
}
