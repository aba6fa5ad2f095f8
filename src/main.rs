use anyhow::{Context, Result};
use clap::Parser;
use snake_arcade::game::GameConfig;
use snake_arcade::modes::PlayMode;
use snake_arcade::score::FileScoreStore;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "snake_arcade")]
#[command(version, about = "Grid snake for the terminal with themes and local high scores")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "30")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "20")]
    height: usize,

    /// Base speed in ticks per second
    #[arg(long, default_value = "8")]
    speed: u32,

    /// Directory holding the high-score files
    #[arg(long, default_value = ".")]
    score_dir: PathBuf,

    /// File logs are appended to when RUST_LOG is set
    #[arg(long, default_value = "snake_arcade.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log_file)?;

    let config = GameConfig::new(cli.width, cli.height, cli.speed);
    let store = FileScoreStore::new(&cli.score_dir);

    let mut play_mode = PlayMode::new(config, store);
    play_mode.run().await?;

    Ok(())
}

/// Route log output to a file: the TUI owns the terminal, so logging to
/// stderr would corrupt the alternate screen. Off unless RUST_LOG is set.
fn init_logging(path: &Path) -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}
