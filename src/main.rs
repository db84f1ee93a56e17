use std::cmp::max;

use anyhow::{Context, Result};
use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

use elimination_chess::console::console_top::run_stdio_loop;
use elimination_chess::game_state::game_state::GameState;
use elimination_chess::utils::render_game_state::RenderStyle;

/// Play elimination chess in the terminal: capture every enemy piece of one kind to win.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Start from this position (FEN placement and side to move) instead of the standard setup.
    #[arg(long)]
    fen: Option<String>,

    /// Draw the board with ASCII letters instead of Unicode chess glyphs.
    #[arg(long, default_value_t = false)]
    ascii: bool,

    /// Enable debug logging of every applied move and capture.
    #[arg(long, default_value_t = false)]
    debug: bool,

    /// Minimum log level written to stderr.
    #[arg(long, default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Disable colored log output.
    #[arg(long, default_value_t = false)]
    no_colors: bool,
}

fn init_logging(cli: &Cli) -> Result<()> {
    let log_level = if cli.debug {
        max(LevelFilter::Debug, cli.log_level)
    } else {
        cli.log_level
    };

    let mut config_builder = ConfigBuilder::new();
    config_builder.set_time_level(LevelFilter::Off);
    config_builder.set_thread_level(LevelFilter::Off);
    config_builder.set_target_level(LevelFilter::Off);
    config_builder.set_location_level(LevelFilter::Off);

    let color_choice = if cli.no_colors {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    TermLogger::init(
        log_level,
        config_builder.build(),
        TerminalMode::Stderr,
        color_choice,
    )
    .context("failed to initialize logging")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;
    log::debug!("Parsed arguments: {cli:?}");

    let game_state = match cli.fen.as_deref() {
        Some(fen) => GameState::from_fen(fen).with_context(|| format!("invalid --fen `{fen}`"))?,
        None => GameState::new_game(),
    };
    let style = if cli.ascii {
        RenderStyle::Ascii
    } else {
        RenderStyle::Unicode
    };

    run_stdio_loop(game_state, style).context("console I/O failed")
}
