use anyhow::Context;
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use textquest::input::readline::RustylineSource;
use textquest::output::OutFrame;
use textquest::services::Namespace;
use textquest::{Registry, Session, config::Config, run_loop};

#[derive(Debug, Parser)]
#[command(name = "textquest", version, about = "Play a text adventure")]
struct Args {
    /// TOML config file (if omitted, use .env / TEXTQUEST_* variables)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding game_files/ and save_files/
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Game template to start from (eg: "TUTORIAL_GAME")
    #[arg(long)]
    game: Option<String>,

    /// Also write logs to this file (eg: "logs/text_quest.log")
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter directive (eg: "info", "textquest=debug")
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };
    if let Some(dir) = args.base_dir {
        cfg.base_dir = dir;
    }
    if let Some(file) = args.log_file {
        cfg.log_file = Some(file);
    }
    if let Some(level) = args.log_level {
        cfg.log_level = level;
    }

    init_tracing(&cfg)?;

    let cfg = Arc::new(cfg);
    let registry = Arc::new(Registry::from_config(cfg.clone()));

    let game = args.game.unwrap_or_else(|| cfg.tutorial_game.clone());
    let mut sess = Session::start_with(registry, Namespace::GameFiles, &game)
        .with_context(|| format!("failed to start game '{game}' from {}", cfg.base_dir.display()))?;

    let ansi = std::io::stdout().is_terminal();
    let view = sess.world().current_room_view()?;
    let intro = OutFrame::RoomView {
        name: view.name,
        description: view.description,
    };
    println!("{}", intro.render(ansi));

    let mut input = RustylineSource::new()?;
    run_loop(&mut sess, &mut input, |frame| println!("{}", frame.render(ansi)))?;

    Ok(())
}

fn init_tracing(cfg: &Config) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, prelude::*};

    color_eyre::install().map_err(|e| anyhow::anyhow!("{e}"))?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(f) => f,
        Err(_) => EnvFilter::try_new(&cfg.log_level).with_context(|| format!("bad log level '{}'", cfg.log_level))?,
    };

    // Game text owns stdout
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let file_layer = match &cfg.log_file {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(file)),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();

    Ok(())
}
