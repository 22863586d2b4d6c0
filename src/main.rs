use std::io;
use std::path::PathBuf;
use std::thread;
use std::time::Instant;

use arcade_snake::config::{FRAME_INTERVAL, GRID_SIZE};
use arcade_snake::error::GameError;
use arcade_snake::events::{AudioSink, GameEvent};
use arcade_snake::game::{GameState, InputOutcome};
use arcade_snake::input::poll_input;
use arcade_snake::logging;
use arcade_snake::screen::{GameScreen, RawTerminal};
use clap::Parser;
use ratatui::backend::Backend;
use log::{debug, error, info};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the food and particle RNG for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,

    /// Log pickups, expiries and sound cues as well.
    #[arg(short, long)]
    verbose: bool,
}

/// Audio stand-in: describes each cue in the log instead of playing it.
struct LoggedAudio;

impl AudioSink for LoggedAudio {
    fn play(&mut self, event: GameEvent) {
        if event == GameEvent::Moved {
            return;
        }

        let tone = event.tone();
        debug!(
            "cue {event:?}: {} Hz for {} ms at {:.2}",
            tone.frequency_hz,
            tone.duration.as_millis(),
            tone.volume
        );
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(error) = logging::init(&log_path, logging::level_for(cli.verbose)) {
        eprintln!("Failed to open log file {}: {error}", log_path.display());
    }
    info!("starting arcade-snake, seed {:?}", cli.seed);

    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(GRID_SIZE, seed),
        None => GameState::new(GRID_SIZE),
    }
    .map_err(fatal)?;

    let raw_terminal = RawTerminal::acquire()?;
    let result = GameScreen::stdout().and_then(|mut screen| run(&mut screen, state));
    drop(raw_terminal);

    if let Err(error) = &result {
        error!("exiting with error: {error}");
    }
    info!("bye");
    result
}

fn run<B: Backend>(screen: &mut GameScreen<B>, mut state: GameState) -> io::Result<()> {
    let mut audio = LoggedAudio;
    let mut last_frame = Instant::now();

    loop {
        screen.draw(&state)?;

        let frame_deadline = last_frame + FRAME_INTERVAL;
        loop {
            let timeout = frame_deadline.saturating_duration_since(Instant::now());
            let Some(input) = poll_input(timeout)? else {
                break;
            };
            if state.apply_input(input).map_err(fatal)? == InputOutcome::Exit {
                return Ok(());
            }
        }

        let remaining = frame_deadline.saturating_duration_since(Instant::now());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }

        let now = Instant::now();
        state.update(now - last_frame).map_err(fatal)?;
        last_frame = now;

        for event in state.drain_events() {
            audio.play(event);
        }
    }
}

fn fatal(error: GameError) -> io::Error {
    error!("{error}");
    io::Error::other(error)
}
