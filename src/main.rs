use anyhow::{Context, Result};
use clap::Parser;
use heart_snake::game::{GameConfig, GameEngine, TICK_INTERVAL_MS};
use heart_snake::modes::PlayMode;
use heart_snake::score::FileScoreStore;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "heart-snake")]
#[command(version, about = "Eat hearts. Don't crash.")]
struct Cli {
    /// Milliseconds between snake moves
    #[arg(long, default_value_t = TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Where the best score is kept (defaults to the user data directory)
    #[arg(long)]
    score_file: Option<PathBuf>,

    /// Write logs here; the terminal itself is taken by the game
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let config = GameConfig {
        tick_interval_ms: cli.tick_ms,
        seed: cli.seed,
        ..Default::default()
    };
    config.validate().context("Invalid game configuration")?;

    let score_path = match cli.score_file {
        Some(path) => path,
        None => FileScoreStore::default_path()?,
    };
    info!(score_file = %score_path.display(), tick_ms = cli.tick_ms, "starting heart snake");

    let engine = GameEngine::new(config, FileScoreStore::new(score_path));
    let mut play_mode = PlayMode::new(engine);
    play_mode.run().await?;

    Ok(())
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .compact()
        .init();
    Ok(())
}
