//! # Tilecast Main Entry Point
//!
//! Loads a level, sets up macroquad rendering, and runs one tick per frame.

use clap::Parser;
use macroquad::prelude::*;
use std::path::PathBuf;
use tilecast::game::levels;
use tilecast::{
    config, GameConfig, GameState, InputHandler, LevelData, MacroquadDisplay, TilecastResult,
};

#[cfg(feature = "dev-tools")]
use tracing::{error, info};

#[cfg(not(feature = "dev-tools"))]
use log::{error, info};

/// Command line arguments for Tilecast.
#[derive(Parser, Debug)]
#[command(name = "tilecast")]
#[command(about = "Grid-based first-person movement and camera-plane prototype")]
#[command(version)]
struct Args {
    /// JSON map file; the built-in demo map is used when omitted
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the player's per-tick speed
    #[arg(long)]
    speed: Option<f32>,

    /// Override the on-screen size of one grid cell in pixels
    #[arg(long)]
    tile_size: Option<f32>,

    /// Scale movement by frame time instead of a fixed step
    #[arg(long)]
    delta_time: bool,

    /// Enable development mode with the debug overlay
    #[arg(long)]
    dev_mode: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: "Tilecast".to_owned(),
        window_width: config::DEFAULT_WINDOW_WIDTH as i32,
        window_height: config::DEFAULT_WINDOW_HEIGHT as i32,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() -> TilecastResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level)?;

    info!("Starting Tilecast v{}", tilecast::VERSION);

    if let Err(e) = run(&args).await {
        error!("Tilecast stopped: {}", e);
        return Err(e);
    }
    Ok(())
}

/// Initializes the logging system based on the specified log level.
fn initialize_logging(log_level: &str) -> TilecastResult<()> {
    let level = parse_log_level(log_level)?;

    #[cfg(feature = "dev-tools")]
    {
        use tracing_subscriber::filter::LevelFilter;

        let level = match level {
            log::LevelFilter::Off => LevelFilter::OFF,
            log::LevelFilter::Error => LevelFilter::ERROR,
            log::LevelFilter::Warn => LevelFilter::WARN,
            log::LevelFilter::Info => LevelFilter::INFO,
            log::LevelFilter::Debug => LevelFilter::DEBUG,
            log::LevelFilter::Trace => LevelFilter::TRACE,
        };

        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_target(false)
            .init();
    }

    #[cfg(not(feature = "dev-tools"))]
    {
        env_logger::Builder::new().filter_level(level).init();
    }

    Ok(())
}

/// Parses a `--log-level` value; unknown names are a configuration error.
fn parse_log_level(log_level: &str) -> TilecastResult<log::LevelFilter> {
    log_level.parse().map_err(|_| {
        tilecast::TilecastError::InvalidConfig(format!("unknown log level '{}'", log_level))
    })
}

/// Resolves the configuration from file and command line overrides.
fn load_config(args: &Args) -> TilecastResult<GameConfig> {
    let mut game_config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(speed) = args.speed {
        game_config.player_speed = speed;
    }
    if let Some(tile_size) = args.tile_size {
        game_config.tile_size = tile_size;
    }
    if args.delta_time {
        game_config.scale_by_delta_time = true;
    }
    if args.dev_mode {
        game_config.show_debug_overlay = true;
    }

    game_config.validate()?;
    Ok(game_config)
}

/// Loads the level and runs the frame loop until Escape is pressed.
async fn run(args: &Args) -> TilecastResult<()> {
    let game_config = load_config(args)?;

    let level_data = match &args.map {
        Some(path) => {
            info!("Loading map from {}", path.display());
            LevelData::load(path)?
        }
        None => {
            info!("Using built-in demo map");
            levels::demo()?
        }
    };

    let mut game_state = GameState::from_level_data(level_data, game_config)?;
    info!(
        "Player placed at ({}, {})",
        game_state.player.position().x,
        game_state.player.position().y
    );

    let input_handler = InputHandler::new();
    let mut display = MacroquadDisplay::new(game_state.config.tile_size);
    display.show_overlay = game_state.config.show_debug_overlay;

    loop {
        if input_handler.quit_requested() {
            info!("Quit requested");
            break;
        }
        if input_handler.overlay_toggled() {
            display.show_overlay = !display.show_overlay;
        }

        let intent = input_handler.poll();
        game_state.tick(&intent, get_frame_time());

        display.center_on_screen(
            game_state.level.width(),
            game_state.level.height(),
            vec2(screen_width(), screen_height()),
        );
        display.render_game(&game_state)?;

        next_frame().await;
    }

    info!("Frame loop ended after {} ticks", game_state.tick_count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug").unwrap(), log::LevelFilter::Debug);
        assert_eq!(parse_log_level("WARN").unwrap(), log::LevelFilter::Warn);
        assert_eq!(parse_log_level("off").unwrap(), log::LevelFilter::Off);
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let result = parse_log_level("loud");
        assert!(matches!(
            result,
            Err(tilecast::TilecastError::InvalidConfig(_))
        ));
    }
}
