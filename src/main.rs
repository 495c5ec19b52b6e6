//! Headless autoplay simulator: builds a chart from detected audio
//! features passed on the command line, drives the engine with a
//! fixed-step clock and a seeded imperfect autoplayer, and prints the
//! final result. Stands in for the browser render loop during development
//! and tuning.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use beatlane::chart::{Lane, build_chart};
use beatlane::config::EngineSettings;
use beatlane::game::{GameEngine, RunPhase};

#[derive(Parser, Debug)]
#[command(name = "beatlane", version, about = "Headless rhythm engine simulator")]
struct Args {
    /// Detected tempo in beats per minute (clamped to 70-180).
    #[arg(long, default_value_t = 120.0)]
    bpm: f64,

    /// First strong beat offset in seconds (clamped to 0-2.5).
    #[arg(long, default_value_t = 0.0)]
    offset: f64,

    /// Playable track length in seconds.
    #[arg(long, default_value_t = 60.0)]
    duration: f64,

    /// Settings file (JSON); defaults are used when absent.
    #[arg(long, env = "BEATLANE_SETTINGS")]
    settings: Option<PathBuf>,

    /// Autoplayer seed.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Fraction of notes the autoplayer fails to press.
    #[arg(long, default_value_t = 0.05)]
    miss_rate: f64,

    /// Simulated frame rate.
    #[arg(long, default_value_t = 120.0)]
    fps: f64,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let bpm = args.bpm.clamp(70.0, 180.0);
    let offset = args.offset.clamp(0.0, 2.5);

    let settings = match &args.settings {
        Some(path) => EngineSettings::load(path),
        None => EngineSettings::default(),
    };

    let chart = build_chart(bpm, offset, args.duration);
    info!(
        "chart: {} notes over {:.1}s at {:.0} bpm",
        chart.note_count(),
        args.duration,
        bpm
    );

    let mut engine = GameEngine::new(&chart, settings, 0.0);

    // Plan presses up front: skipped notes get none, the rest get a press
    // near their scheduled time.
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let miss_rate = args.miss_rate.clamp(0.0, 1.0);
    let hit_window = settings.judge.hit_window_s;
    let mut presses: Vec<(f64, Lane)> = chart
        .notes
        .iter()
        .filter_map(|note| {
            if rng.gen_bool(miss_rate) {
                None
            } else {
                let err = rng.gen_range(-0.8..0.8) * hit_window;
                Some((note.time_s + err, note.lane))
            }
        })
        .collect();
    presses.sort_by(|a, b| a.0.total_cmp(&b.0));

    let dt = 1.0 / args.fps.max(1.0);
    let mut clock = 0.0_f64;
    let mut next_press = 0usize;
    loop {
        let snapshot = engine.advance(clock);
        if snapshot.phase == RunPhase::Ended {
            break;
        }
        while next_press < presses.len() && presses[next_press].0 <= clock {
            engine.press_lane(presses[next_press].1);
            next_press += 1;
        }
        clock += dt;
    }

    let result = engine.result();
    println!("score:     {}", result.score);
    println!("max combo: {}", result.max_combo);
    println!("hits:      {} / misses: {}", result.hit_count, result.miss_count);
    println!("fast/slow: {} / {}", result.fast_count, result.slow_count);
    println!("accuracy:  {:.2}% ({})", result.accuracy(), result.rank());

    Ok(())
}
