//! Game loop thread: runs the match engine at the refresh rate and
//! publishes snapshots.
//!
//! The engine is built by the caller's thread, so bad settings fail the
//! spawn, then moved into the loop thread and never shared. Commands
//! arrive via `mpsc` channel. Snapshots are stored in shared state for
//! synchronous polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, warn};

use skyduel_core::config::GameSettings;
use skyduel_core::enums::MatchOutcome;
use skyduel_core::events::GameEvent;
use skyduel_core::state::MatchSnapshot;
use skyduel_sim::engine::{MatchEngine, SimConfig};

use crate::pilot::{Autopilot, KeyboardPilot, Pilot};
use crate::state::LoopCommand;

/// How the loop is paced and when it stops.
#[derive(Debug, Clone)]
pub struct LoopConfig {
    pub seed: u64,
    pub settings: GameSettings,
    /// Target frames per second. 0 runs uncapped.
    pub fps: u32,
    /// Stop after this many frames.
    pub max_frames: Option<u64>,
    /// Stop on the first Victory or Defeat instead of idling on it.
    pub stop_on_end: bool,
    /// Fly with the autopilot until keys are pressed.
    pub autopilot: bool,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            settings: GameSettings::default(),
            fps: 60,
            max_frames: None,
            stop_on_end: true,
            autopilot: true,
        }
    }
}

impl LoopConfig {
    /// Nominal duration of one frame, `None` when uncapped.
    pub fn frame_duration(&self) -> Option<Duration> {
        (self.fps > 0).then(|| Duration::from_nanos(1_000_000_000 / u64::from(self.fps)))
    }
}

/// What the loop reports when it exits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoopSummary {
    pub frames: u64,
    pub outcome: MatchOutcome,
    pub score: u32,
    pub matches_ended: u32,
}

/// Spawns the game loop in a new thread.
///
/// Returns the command sender and a handle yielding the summary on exit.
/// Fails if the settings are invalid or the thread cannot be spawned.
pub fn spawn_game_loop(
    config: LoopConfig,
    latest_snapshot: Arc<Mutex<Option<MatchSnapshot>>>,
) -> anyhow::Result<(mpsc::Sender<LoopCommand>, JoinHandle<LoopSummary>)> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    let engine = MatchEngine::new(SimConfig {
        seed: config.seed,
        settings: config.settings.clone(),
    })?;

    let handle = std::thread::Builder::new()
        .name("skyduel-game-loop".into())
        .spawn(move || run_game_loop(engine, &config, cmd_rx, &latest_snapshot))?;

    Ok((cmd_tx, handle))
}

/// The game loop. Runs until Shutdown, channel disconnect, the frame
/// limit, or (with `stop_on_end`) the end of the match.
fn run_game_loop(
    mut engine: MatchEngine,
    config: &LoopConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<MatchSnapshot>>,
) -> LoopSummary {
    let mut pilot: Box<dyn Pilot> = if config.autopilot {
        Box::new(Autopilot::default())
    } else {
        Box::new(KeyboardPilot::new(config.settings.controls.clone()))
    };
    let frame_duration = config.frame_duration();
    let mut next_frame_time = Instant::now();
    let mut last: Option<MatchSnapshot> = None;
    let mut frames = 0u64;
    let mut matches_ended = 0u32;

    info!(seed = config.seed, fps = config.fps, "game loop started");

    'frames: loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::PressKeys(keys)) => {
                    let mut keyboard = KeyboardPilot::new(engine.settings().controls.clone());
                    keyboard.held = keys;
                    pilot = Box::new(keyboard);
                }
                Ok(LoopCommand::ApplySettings(settings)) => {
                    if let Err(err) = engine.apply_settings(settings) {
                        warn!(%err, "settings not applied");
                    }
                }
                Ok(LoopCommand::Reset) => engine.reset(),
                Ok(LoopCommand::Shutdown) => break 'frames,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => break 'frames,
            }
        }

        // 2. Advance one tick with the pilot's input
        let input = pilot.next_input(last.as_ref());
        let snapshot = engine.tick(&input);
        frames += 1;

        for event in &snapshot.events {
            if let GameEvent::MatchEnded {
                outcome,
                final_score,
            } = event
            {
                matches_ended += 1;
                info!(?outcome, final_score, frames, "match over");
            }
        }
        if snapshot.config_requested {
            debug!("config overlay requested");
        }

        // 3. Store latest snapshot for synchronous polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot.clone());
        }
        let ended = snapshot.outcome.is_terminal();
        last = Some(snapshot);

        if (config.stop_on_end && ended) || config.max_frames.is_some_and(|max| frames >= max) {
            break;
        }

        // 4. Sleep until the next frame
        if let Some(frame) = frame_duration {
            next_frame_time += frame;
            let now = Instant::now();
            if next_frame_time > now {
                std::thread::sleep(next_frame_time - now);
            } else if now - next_frame_time > frame * 2 {
                // Too far behind: reset to avoid catch-up spiral
                next_frame_time = now;
            }
        }
    }

    let summary = LoopSummary {
        frames,
        outcome: engine.outcome(),
        score: engine.score(),
        matches_ended,
    };
    info!(?summary, "game loop stopped");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uncapped(max_frames: u64) -> LoopConfig {
        LoopConfig {
            fps: 0,
            max_frames: Some(max_frames),
            stop_on_end: false,
            autopilot: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_frame_duration() {
        let config = LoopConfig {
            fps: 50,
            ..Default::default()
        };
        assert_eq!(config.frame_duration(), Some(Duration::from_millis(20)));
        assert_eq!(uncapped(1).frame_duration(), None);
    }

    #[test]
    fn test_loop_runs_to_frame_limit() {
        let latest = Arc::new(Mutex::new(None));
        let (_tx, handle) = spawn_game_loop(uncapped(25), Arc::clone(&latest)).unwrap();
        let summary = handle.join().unwrap();

        assert_eq!(summary.frames, 25);
        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.time.tick, 25);
    }

    #[test]
    fn test_loop_stops_on_shutdown() {
        let latest = Arc::new(Mutex::new(None));
        let config = LoopConfig {
            fps: 0,
            max_frames: None,
            stop_on_end: false,
            autopilot: false,
            ..Default::default()
        };
        let (tx, handle) = spawn_game_loop(config, latest).unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();
        let summary = handle.join().unwrap();
        assert_eq!(summary.outcome, MatchOutcome::InProgress);
    }

    #[test]
    fn test_loop_stops_when_sender_dropped() {
        let latest = Arc::new(Mutex::new(None));
        let config = LoopConfig {
            fps: 0,
            max_frames: None,
            autopilot: false,
            ..Default::default()
        };
        let (tx, handle) = spawn_game_loop(config, latest).unwrap();
        drop(tx);
        assert!(handle.join().is_ok());
    }

    #[test]
    fn test_spawn_rejects_invalid_settings() {
        let mut config = uncapped(1);
        config.settings.player_speed = -1.0;
        assert!(spawn_game_loop(config, Arc::new(Mutex::new(None))).is_err());
    }

    #[test]
    fn test_pressed_keys_move_player() {
        let latest = Arc::new(Mutex::new(None));
        let (tx, handle) = {
            // Queue the keys before the first frame can run.
            let (tx, rx) = mpsc::channel();
            tx.send(LoopCommand::PressKeys(vec!["d".into()])).unwrap();
            let config = uncapped(10);
            let engine = MatchEngine::new(SimConfig {
                seed: config.seed,
                settings: config.settings.clone(),
            })
            .unwrap();
            let latest = Arc::clone(&latest);
            let handle =
                std::thread::spawn(move || run_game_loop(engine, &config, rx, &latest));
            (tx, handle)
        };
        let summary = handle.join().unwrap();
        drop(tx);

        assert_eq!(summary.frames, 10);
        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert!(snapshot.player.position.x > 0.0);
    }

    #[test]
    fn test_snapshot_serialization_is_fast() {
        let mut engine = MatchEngine::new(SimConfig::default()).unwrap();
        let mut autopilot = Autopilot::default();
        let mut last = None;
        for _ in 0..50 {
            let input = autopilot.next_input(last.as_ref());
            last = Some(engine.tick(&input));
        }

        let snapshot = last.unwrap();
        let start = Instant::now();
        let json = serde_json::to_string(&snapshot).unwrap();
        let elapsed = start.elapsed();

        assert!(
            elapsed < Duration::from_millis(50),
            "Snapshot serialization took {:?}, should be <50ms",
            elapsed
        );
        assert!(!json.is_empty());
    }
}
