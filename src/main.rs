use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};
use neon_snake::config::{Settings, default_config_path, load_settings};
use neon_snake::error::AppError;
use neon_snake::game::GameState;
use neon_snake::input::{GameInput, InputHandler};
use neon_snake::renderer::{self, FrameLayout};
use neon_snake::starfield::Starfield;
use neon_snake::terminal_runtime::{TerminalSession, install_panic_hook};
use neon_snake::theme::Skin;
use neon_snake::tick::TickClock;
use rand::SeedableRng;
use rand::rngs::StdRng;
use simplelog::{Config, WriteLogger};

/// Upper bound on how long one input poll may block between redraws.
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(name = "neon-snake", version, about = "Neon Snake in your terminal")]
struct Cli {
    /// Board width in cells.
    #[arg(long)]
    width: Option<u16>,

    /// Board height in cells.
    #[arg(long)]
    height: Option<u16>,

    /// Milliseconds between game ticks.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Seed for food placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Settings file (JSON). Defaults to the per-user config directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Use plain ASCII glyphs.
    #[arg(long)]
    ascii: bool,

    /// Write logs to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log verbosity when --log-file is set.
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("neon-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: Cli) -> Result<(), AppError> {
    if let Some(path) = &cli.log_file {
        WriteLogger::init(cli.log_level.into(), Config::default(), File::create(path)?)?;
    }

    // Settings errors surface here, before the terminal enters raw mode.
    let settings = resolve_settings(&cli)?;
    info!(
        "starting: grid {}x{}, tick {} ms, seed {:?}",
        settings.grid_width, settings.grid_height, settings.tick_interval_ms, cli.seed
    );

    install_panic_hook();
    let mut session = TerminalSession::enter()?;
    run(&mut session, &settings, cli.seed)?;
    drop(session);

    info!("exiting");
    Ok(())
}

fn resolve_settings(cli: &Cli) -> Result<Settings, AppError> {
    let path = cli.config.clone().unwrap_or_else(default_config_path);
    let mut settings = load_settings(&path)?;

    if let Some(width) = cli.width {
        settings.grid_width = width;
    }
    if let Some(height) = cli.height {
        settings.grid_height = height;
    }
    if let Some(tick_ms) = cli.tick_ms {
        settings.tick_interval_ms = tick_ms;
    }
    settings.ascii |= cli.ascii;

    settings.validate()?;
    Ok(settings)
}

fn run(
    session: &mut TerminalSession,
    settings: &Settings,
    seed: Option<u64>,
) -> Result<(), AppError> {
    let mut state = match seed {
        Some(seed) => GameState::new_with_seed(settings.grid(), seed),
        None => GameState::new(settings.grid()),
    };
    let mut sky_rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let skin = Skin::new(settings.ascii);
    let shades = skin.theme.stars.len();
    let mut stars = Starfield::scatter(&mut sky_rng, settings.grid(), shades);
    let mut clock = TickClock::new(
        Duration::from_millis(settings.tick_interval_ms),
        Instant::now(),
    );
    let mut input = InputHandler::new();

    loop {
        let mut layout = FrameLayout::default();
        session
            .terminal_mut()
            .draw(|frame| layout = renderer::render(frame, &state, &stars, skin))?;

        let timeout = clock.poll_timeout(state.is_over(), Instant::now(), MAX_POLL_INTERVAL);
        if let Some(game_input) = input.poll_input(timeout)? {
            let restart_requested = match game_input {
                GameInput::Quit => break,
                GameInput::Restart => true,
                GameInput::Click { column, row } => layout.hits_restart(column, row),
                other => {
                    state.apply_input(other);
                    false
                }
            };

            if restart_requested && state.restart() {
                stars = Starfield::scatter(&mut sky_rng, settings.grid(), shades);
                clock.rearm(Instant::now());
            }
        }

        if clock.should_step(state.is_over(), Instant::now()) {
            state.step();
        }
    }

    Ok(())
}
