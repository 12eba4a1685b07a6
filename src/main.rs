use anyhow::{Context, Result};
use clap::Parser;
use glitch_snake::game::GameConfig;
use glitch_snake::modes::HumanMode;
use glitch_snake::persistence::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "glitch_snake")]
#[command(version, about = "Snake with sticky and tron modes and glitching walls")]
struct Cli {
    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board width
    #[arg(long)]
    width: Option<usize>,

    /// Board height
    #[arg(long)]
    height: Option<usize>,

    /// File the high score is kept in
    #[arg(long, default_value = ".glitch_snake_hiscore")]
    hiscore_file: PathBuf,

    /// Keep the high score in memory only
    #[arg(long)]
    no_save: bool,

    /// Seed for reproducible food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Log file (the terminal is busy drawing the game)
    #[arg(long, default_value = "glitch_snake.log")]
    log_file: PathBuf,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {:?}", path))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse config {:?}", path))?
        }
        None => GameConfig::default(),
    };

    if let Some(width) = cli.width {
        config.board_width = width;
    }
    if let Some(height) = cli.height {
        config.board_height = height;
    }

    config.validate().context("Invalid game configuration")?;
    Ok(config)
}

async fn play<S: HighScoreStore>(config: GameConfig, store: S, seed: Option<u64>) -> Result<()> {
    let mut human_mode = HumanMode::new(config, store, seed)?;
    human_mode.run().await
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = load_config(&cli)?;
    info!(
        width = config.board_width,
        height = config.board_height,
        "starting glitch_snake"
    );

    if cli.no_save {
        play(config, MemoryHighScoreStore::default(), cli.seed).await
    } else {
        let store = FileHighScoreStore::new(&cli.hiscore_file);
        info!(path = ?store.path(), "high score file");
        play(config, store, cli.seed).await
    }
}
