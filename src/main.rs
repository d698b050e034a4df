//! Connect Four GUI
//!
//! A graphical interface for playing Connect Four against another player or
//! the alpha-beta AI.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use connect4::config::{parse_mark, GameConfig, GameMode};
use connect4::error::ConfigError;
use connect4::ui::ConnectFourApp;

/// Play Connect Four against a friend or the computer.
#[derive(Parser)]
#[command(name = "connect4", about = "Connect Four with an alpha-beta AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Override search depth in plies
    #[arg(long)]
    depth: Option<u32>,

    /// Mark the AI plays: red or yellow
    #[arg(long)]
    ai_mark: Option<String>,

    /// Skip the mode selection screen: pvp or pvai
    #[arg(long)]
    mode: Option<String>,

    /// Override the pause before each AI move
    #[arg(long)]
    ai_delay_ms: Option<u64>,
}

/// Load the config file and apply command-line overrides
fn load_config(cli: &Cli) -> Result<GameConfig, ConfigError> {
    let mut config = GameConfig::load_or_default(&cli.config)?;

    if let Some(depth) = cli.depth {
        config.search_depth = depth;
    }
    if let Some(mark) = &cli.ai_mark {
        config.ai_mark = parse_mark(mark)?;
    }
    if let Some(mode) = &cli.mode {
        config.mode = Some(mode.parse::<GameMode>()?);
    }
    if let Some(delay) = cli.ai_delay_ms {
        config.ai_move_delay_ms = delay;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            process::exit(2);
        }
    };
    log::debug!("{:?}", config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([640.0, 520.0])
            .with_title("Connect Four"),
        ..Default::default()
    };

    eframe::run_native(
        "Connect Four",
        options,
        Box::new(|cc| Ok(Box::new(ConnectFourApp::new(cc, config)))),
    )
}
