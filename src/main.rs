//! Boxhead headless runner
//!
//! Drives sessions at a fixed step with the demo pilot (or no input at all),
//! logs the HUD, and prints a summary when done.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use boxhead::consts::TICKS_PER_SECOND;
use boxhead::platform::{DemoPilot, InputFrame, KeyBindings};
use boxhead::sim::{GameSession, TickOutcome, tick};
use boxhead::{PilotMode, Scene, Settings};

#[derive(Parser, Debug)]
#[command(name = "boxhead")]
#[command(about = "Top-down arena shooter simulation, run headless")]
struct Cli {
    /// RNG seed (defaults to one derived from the clock)
    #[arg(long)]
    seed: Option<u64>,
    /// Ticks to simulate across all runs (60 ticks = 1 second)
    #[arg(long, default_value_t = 3600)]
    ticks: u64,
    /// Settings JSON file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Write the effective settings to this path and exit
    #[arg(long)]
    write_settings: Option<PathBuf>,
    /// Override the input source (demo | idle)
    #[arg(long, value_parser = parse_pilot)]
    pilot: Option<PilotMode>,
    /// Print the final scene as JSON
    #[arg(long, default_value_t = false)]
    scene_json: bool,
}

fn parse_pilot(s: &str) -> Result<PilotMode, String> {
    PilotMode::from_str(s).ok_or_else(|| format!("unknown pilot '{s}' (expected demo or idle)"))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Totals across every run of one invocation
#[derive(Debug, Default)]
struct Summary {
    ticks: u64,
    runs: u32,
    best_score: u32,
    scores: Vec<u32>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = match &cli.settings {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(pilot) = cli.pilot {
        settings.pilot = pilot;
    }

    if let Some(path) = &cli.write_settings {
        settings.save(path)?;
        println!("Wrote settings to {}", path.display());
        return Ok(());
    }

    let seed = cli.seed.unwrap_or_else(clock_seed);
    log::info!(
        "Boxhead starting: seed {seed}, {} ticks, pilot {}",
        cli.ticks,
        settings.pilot.as_str()
    );

    let mut rng = Pcg32::seed_from_u64(seed);
    let mut session = GameSession::new(settings.sim_config());
    let summary = run(&mut session, &settings, cli.ticks, &mut rng);

    println!("seed:       {seed}");
    println!("ticks:      {}", summary.ticks);
    println!("runs:       {}", summary.runs);
    println!("scores:     {:?}", summary.scores);
    println!("best score: {}", summary.best_score);

    if cli.scene_json {
        let json = serde_json::to_string_pretty(&Scene::capture(&session))?;
        println!("{json}");
    }

    Ok(())
}

fn run(session: &mut GameSession, settings: &Settings, ticks: u64, rng: &mut Pcg32) -> Summary {
    let bindings = KeyBindings::default();
    let mut pilot = DemoPilot::new(bindings.clone());
    let max_runs = settings.max_runs.max(1);
    let step = Duration::from_secs_f64(1.0 / TICKS_PER_SECOND as f64);

    let mut summary = Summary {
        runs: 1,
        ..Default::default()
    };

    for _ in 0..ticks {
        let started = Instant::now();

        let frame = match settings.pilot {
            PilotMode::Demo => pilot.next_frame(&Scene::capture(session)),
            PilotMode::Idle => InputFrame::default(),
        };
        let input = bindings.to_tick_input(&frame);

        match tick(session, &input, rng) {
            TickOutcome::Advanced => {
                if settings.hud_due(session.frame_count) {
                    log::info!("{}", Scene::capture(session).hud.lines().join(" | "));
                }
            }
            TickOutcome::GameOver => {
                summary.scores.push(session.score);
                summary.best_score = summary.best_score.max(session.score);
                if summary.runs >= max_runs {
                    summary.ticks += 1;
                    break;
                }
            }
            TickOutcome::Restarted => summary.runs += 1,
            // Nobody will press restart
            TickOutcome::Halted => break,
        }
        summary.ticks += 1;

        if settings.realtime {
            let elapsed = started.elapsed();
            if elapsed < step {
                thread::sleep(step - elapsed);
            }
        }
    }

    if session.is_active() {
        summary.scores.push(session.score);
        summary.best_score = summary.best_score.max(session.score);
    }
    log::info!(
        "Finished after {} ticks and {} run(s), best score {}",
        summary.ticks,
        summary.runs,
        summary.best_score
    );
    summary
}
