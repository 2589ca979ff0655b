//! Retro Pong entry point
//!
//! Headless demo driver: plays a full match (autopilot vs the scripted
//! opponent) at the display tick rate, logging the events the simulation
//! emits and printing the final scoreline.
//!
//! Usage: `retro-pong [--seed N] [--tuning FILE] [--turbo]`

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use retro_pong::consts::{MAX_SUBSTEPS, TICK_HZ};
use retro_pong::sim::{GameEvent, SimState, TickInput, tick};
use retro_pong::tuning::Tuning;

struct Options {
    seed: Option<u64>,
    tuning: Option<PathBuf>,
    /// Run unpaced, as fast as the simulation allows
    turbo: bool,
}

fn parse_args() -> Result<Options, String> {
    let mut opts = Options {
        seed: None,
        tuning: None,
        turbo: false,
    };
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                let seed = value
                    .parse()
                    .map_err(|_| format!("invalid seed: {value}"))?;
                opts.seed = Some(seed);
            }
            "--tuning" => {
                let value = args.next().ok_or("--tuning requires a path")?;
                opts.tuning = Some(PathBuf::from(value));
            }
            "--turbo" => opts.turbo = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(opts)
}

fn main() -> ExitCode {
    env_logger::init();

    let opts = match parse_args() {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("usage: retro-pong [--seed N] [--tuning FILE] [--turbo]");
            return ExitCode::FAILURE;
        }
    };

    let seed = opts.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    let tuning = Tuning::load_or_default(opts.tuning.as_deref());

    log::info!("Retro Pong starting with seed {seed}");
    let mut state = SimState::new(seed, tuning);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    if opts.turbo {
        while !state.ended() {
            for event in tick(&mut state, &input) {
                log_event(&event, &state);
            }
        }
    } else {
        run_paced(&mut state, &input);
    }

    println!(
        "Final score: player {} - opponent {} (seed {}, {} ticks)",
        state.score.player, state.score.opponent, seed, state.time_ticks
    );
    ExitCode::SUCCESS
}

/// Fixed-rate loop: accumulate wall-clock time and run catch-up ticks,
/// capped per frame so a stall cannot snowball
fn run_paced(state: &mut SimState, input: &TickInput) {
    let tick_dt = 1.0 / TICK_HZ as f32;
    let mut accumulator = 0.0_f32;
    let mut last = Instant::now();

    while !state.ended() {
        let now = Instant::now();
        accumulator += now.duration_since(last).as_secs_f32().min(0.1);
        last = now;

        let mut substeps = 0;
        while accumulator >= tick_dt && substeps < MAX_SUBSTEPS {
            for event in tick(state, input) {
                log_event(&event, state);
            }
            accumulator -= tick_dt;
            substeps += 1;
        }

        std::thread::sleep(Duration::from_secs_f32((tick_dt - accumulator).max(0.0)));
    }
}

fn log_event(event: &GameEvent, state: &SimState) {
    match event {
        GameEvent::PaddleHit { side } => {
            log::debug!("paddle hit on the {} side", side.as_str());
        }
        // Presentation-only signal; the scoreboard owns the timer
        GameEvent::ScoreBump { .. } => {}
        GameEvent::PointScored { side } => {
            log::info!(
                "point to {} ({} - {})",
                side.as_str(),
                state.score.player,
                state.score.opponent
            );
        }
        GameEvent::MatchEnded { winner } => {
            log::info!("match over: {} wins", winner.as_str());
        }
    }
}
