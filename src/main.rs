//! Duck Dash entry point
//!
//! Sets up logging and the terminal backend, loads the sprites from the
//! working directory, and runs rounds until the player quits.

use std::path::Path;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use duck_dash::platform::TerminalBackend;
use duck_dash::sim::GameState;
use duck_dash::{FrameLoop, Tuning};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Duck Dash starting...");

    match run() {
        Ok(()) => {
            log::info!("Bye");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("duck-dash: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Everything that owns the terminal lives here, so it is restored before
/// `main` prints any error
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let tuning = Tuning::default();
    tuning.validate()?;

    let seed = tuning.seed.unwrap_or_else(clock_seed);
    log::info!("Game initialized with seed: {}", seed);

    let backend = TerminalBackend::new(tuning.screen_size)?;
    let state = GameState::new(tuning, seed);
    let mut game = FrameLoop::new(backend, state, Path::new("."))?;
    game.run()?;
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
