//! Headless driver: plays a seeded game with random inputs and prints the
//! final score line. Useful for smoke-testing the engine end to end and for
//! reproducing a piece sequence from a known seed.
//!
//! Usage: `autoplay [seed]`. Without a seed, one is drawn from OS entropy and
//! printed so the run can be replayed.

use std::time::Duration;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tetris_engine::{BoardEngine, GameCommand, GravityClock, ScoreBoard};

const BASE_DELAY: Duration = Duration::from_millis(500);
const LINES_PER_LEVEL: u32 = 5;
/// Simulated wall time per loop iteration.
const FRAME: Duration = Duration::from_millis(50);
const MAX_FRAMES: u32 = 200_000;

fn main() -> Result<()> {
    let seed = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<u64>()
            .with_context(|| format!("invalid seed {:?}", arg))?,
        None => rand::random(),
    };
    println!("seed: {}", seed);

    let mut engine = BoardEngine::new(seed);
    let events = engine.subscribe();
    let mut score = ScoreBoard::new(LINES_PER_LEVEL, BASE_DELAY);
    let mut clock = GravityClock::new(score.gravity_delay());
    let mut inputs = StdRng::seed_from_u64(seed ^ 0x5eed);

    let mut frames = 0;
    while !engine.is_game_over() && frames < MAX_FRAMES {
        frames += 1;

        for _ in 0..clock.advance(FRAME) {
            engine.step();
        }

        let command = match inputs.random_range(0..10u8) {
            0 | 1 => GameCommand::MoveLeft,
            2 | 3 => GameCommand::MoveRight,
            4 => GameCommand::RotateCw,
            5 => GameCommand::RotateCcw,
            6 => GameCommand::SoftDown,
            7 => GameCommand::HardDrop,
            _ => continue,
        };
        engine.apply(command);

        for event in events.try_iter() {
            score.observe(&event);
        }
        clock.set_delay(score.gravity_delay());
    }

    for event in events.try_iter() {
        score.observe(&event);
    }

    println!(
        "game over after {} frames: score {}, lines {}, level {}",
        frames,
        score.score(),
        score.lines(),
        score.level()
    );
    Ok(())
}
