//! Flip Runner headless runner
//!
//! Plays runs at a simulated 60 Hz with a simple autopilot and records the
//! final score.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

#[cfg(not(target_arch = "wasm32"))]
use clap::Parser;

#[cfg(not(target_arch = "wasm32"))]
use flip_runner::Difficulty;

/// Autopilot run of Flip Runner
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Parser)]
#[command(name = "flip-runner", version, about, long_about = None)]
struct Args {
    /// Difficulty preset (relaxed, normal or hard)
    #[arg(short, long, default_value = "normal", value_parser = parse_difficulty)]
    difficulty: Difficulty,

    /// Stop after this many simulated seconds
    #[arg(
        short = 's',
        long,
        value_name = "SECONDS",
        default_value_t = 120,
        value_parser = clap::value_parser!(u64).range(1..=86_400)
    )]
    max_seconds: u64,

    /// JSON file overriding individual tuning values
    #[arg(short, long, value_name = "FILE")]
    tuning: Option<PathBuf>,
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(s).ok_or_else(|| format!("unknown difficulty '{s}'"))
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use flip_runner::consts::FRAME_MS;
    use flip_runner::persistence::FileStore;
    use flip_runner::sim::{GameEvent, GamePhase};
    use flip_runner::{ScoreHistory, Session, Tuning};

    env_logger::init();

    let args = Args::parse();
    let difficulty = args.difficulty;
    let max_ms = args.max_seconds as f64 * 1000.0;

    let mut tuning = match &args.tuning {
        Some(path) => match std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|json| Tuning::from_json(&json).map_err(|e| e.to_string()))
        {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {}", path.display(), e);
                Tuning::default()
            }
        },
        None => Tuning::default(),
    };
    tuning.apply_preset(difficulty);

    log::info!("Flip Runner (headless) starting on {}", difficulty.as_str());

    let data_dir = std::env::var("FLIP_RUNNER_DATA").unwrap_or_else(|_| ".flip-runner".into());
    let mut store = FileStore::new(data_dir);
    log::debug!("Score history in {}", store.dir().display());
    let mut history = ScoreHistory::load(&store);

    let mut session = Session::new(tuning);
    let mut now = 0.0;
    session.restart(now);

    let mut flips = 0u32;
    let mut coins = 0u32;
    while now < max_ms && session.phase() == GamePhase::Playing {
        now += FRAME_MS;
        if autopilot_wants_flip(&session) && session.flip() {
            flips += 1;
        }
        session.step(now);

        for event in session.drain_events() {
            match event {
                GameEvent::CollectiblePicked { .. } => coins += 1,
                GameEvent::LevelUp { level } => println!("Level {level}"),
                GameEvent::HazardHit { kind } => println!("Hit by {kind:?}"),
                GameEvent::Died => println!("Down!"),
                _ => {}
            }
        }
    }

    let snapshot = session.snapshot(now);
    println!(
        "Score {} (level {}, {} pickups, {} flips) after {:.1}s on {}",
        snapshot.score,
        snapshot.level,
        coins,
        flips,
        snapshot.elapsed_ms / 1000.0,
        session.tuning().difficulty.as_str()
    );

    if let Some(new_best) = session.record_final_score(&mut history) {
        if new_best {
            println!("New best!");
        }
        history.save(&mut store);
    }
}

/// Flip when the runner is airborne and about to leave the play area
#[cfg(not(target_arch = "wasm32"))]
fn autopilot_wants_flip(session: &flip_runner::Session) -> bool {
    use flip_runner::consts::{BOTTOM_BOUND, TOP_BOUND};
    use flip_runner::sim::GravityDir;

    const MARGIN: f32 = 60.0;

    let state = session.state();
    let runner = &state.runner;
    if runner.on_ground || runner.is_dead() {
        return false;
    }
    let body = runner.bounds();
    match state.gravity {
        GravityDir::Down => body.bottom() > BOTTOM_BOUND - MARGIN,
        GravityDir::Up => body.top() < TOP_BOUND + MARGIN,
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Hosts embed the library directly on this target
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["flip-runner"]).unwrap();
        assert_eq!(args.difficulty, Difficulty::Normal);
        assert_eq!(args.max_seconds, 120);
        assert!(args.tuning.is_none());
    }

    #[test]
    fn test_args_accept_preset_aliases() {
        let args =
            Args::try_parse_from(["flip-runner", "--difficulty", "EASY", "-s", "30"]).unwrap();
        assert_eq!(args.difficulty, Difficulty::Relaxed);
        assert_eq!(args.max_seconds, 30);
    }

    #[test]
    fn test_args_reject_bad_input() {
        assert!(Args::try_parse_from(["flip-runner", "--difficulty", "nightmare"]).is_err());
        assert!(Args::try_parse_from(["flip-runner", "--max-seconds", "abc"]).is_err());
        assert!(Args::try_parse_from(["flip-runner", "--max-seconds", "0"]).is_err());
        // Positional arguments are not accepted
        assert!(Args::try_parse_from(["flip-runner", "hard"]).is_err());
    }
}
