//! Application state shared between the caller and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use skyduel_core::config::GameSettings;
use skyduel_core::state::MatchSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum LoopCommand {
    /// Replace the held physical keys and switch to keyboard control.
    PressKeys(Vec<String>),
    /// Validate and apply new settings at the next tick.
    ApplySettings(GameSettings),
    /// Restart the match at the current difficulty.
    Reset,
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Shared application state.
///
/// - `mpsc::Sender` is wrapped in `Mutex` (Sender is Send but not Sync)
/// - `Mutex<Option<...>>` holds state that may not exist before the loop starts
/// - `Arc<Mutex<...>>` holds the latest snapshot (shared with the loop thread)
pub struct AppState {
    /// Channel sender to the game loop thread. `None` before it is spawned.
    pub command_tx: Mutex<Option<mpsc::Sender<LoopCommand>>>,
    /// Latest snapshot for synchronous polling.
    /// Updated by the game loop thread after each tick.
    pub latest_snapshot: Arc<Mutex<Option<MatchSnapshot>>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Send a command to the loop. Returns false if no loop is listening.
    pub fn send(&self, command: LoopCommand) -> bool {
        let Ok(guard) = self.command_tx.lock() else {
            return false;
        };
        guard
            .as_ref()
            .is_some_and(|tx| tx.send(command).is_ok())
    }

    /// Clone of the most recent snapshot, if any tick has run.
    pub fn snapshot(&self) -> Option<MatchSnapshot> {
        self.latest_snapshot.lock().ok().and_then(|s| s.clone())
    }
}
