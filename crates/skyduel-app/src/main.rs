use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

use skyduel_app::game_loop::{spawn_game_loop, LoopConfig};
use skyduel_app::state::AppState;
use skyduel_core::config::GameSettings;
use skyduel_core::enums::{AiIntensity, Difficulty};
use skyduel_core::input::KeyBindings;

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug)]
#[command(author, version, about = "SKYDUEL headless match runner", long_about = None)]
struct Args {
    /// RNG seed for the adversary
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Settings JSON file; flags below override its values
    #[arg(long)]
    settings: Option<PathBuf>,

    /// easy, normal or hard
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Adversary intensity: weak, normal or strong
    #[arg(long)]
    ai: Option<AiIntensity>,

    #[arg(long)]
    player_speed: Option<f64>,

    /// Key preset: wasd, esdf or arrows
    #[arg(long)]
    controls: Option<String>,

    /// Frames per second, 0 for uncapped
    #[arg(long, default_value_t = 60)]
    fps: u32,

    #[arg(long)]
    max_frames: Option<u64>,

    /// Keep ticking after the match ends (until --max-frames)
    #[arg(long, default_value_t = false)]
    keep_running: bool,
}

impl Args {
    fn game_settings(&self) -> Result<GameSettings> {
        let mut settings = match &self.settings {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                GameSettings::from_json_str(&json)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => GameSettings::default(),
        };
        if let Some(difficulty) = self.difficulty {
            settings.difficulty = difficulty;
        }
        if let Some(ai) = self.ai {
            settings.ai_intensity = ai;
        }
        if let Some(speed) = self.player_speed {
            settings.player_speed = speed;
        }
        if let Some(preset) = &self.controls {
            settings.controls = KeyBindings::preset(preset)?;
        }
        settings.validate()?;
        Ok(settings)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args = Args::parse();

    let settings = args.game_settings()?;
    info!(
        difficulty = ?settings.difficulty,
        ai = ?settings.ai_intensity,
        seed = args.seed,
        "starting match"
    );

    let state = AppState::new();
    let (tx, handle) = spawn_game_loop(
        LoopConfig {
            seed: args.seed,
            settings,
            fps: args.fps,
            max_frames: args.max_frames,
            stop_on_end: !args.keep_running,
            autopilot: true,
        },
        Arc::clone(&state.latest_snapshot),
    )?;
    if let Ok(mut slot) = state.command_tx.lock() {
        *slot = Some(tx);
    }

    let summary = handle
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;
    if let Some(last) = state.snapshot() {
        info!(
            player = last.hud.player_health.current,
            dragon = last.hud.dragon_health.current,
            tick = last.time.tick,
            "final frame"
        );
    }
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
