//! Input sources for the loop: held keys or a scripted autopilot.

use skyduel_core::input::{Action, InputState, KeyBindings};
use skyduel_core::state::MatchSnapshot;

/// Produces the player's input for the next tick.
pub trait Pilot: Send {
    /// `last` is the previous tick's snapshot, `None` before the first tick.
    fn next_input(&mut self, last: Option<&MatchSnapshot>) -> InputState;
}

/// Resolves the currently held physical keys through the key bindings.
#[derive(Debug, Clone, Default)]
pub struct KeyboardPilot {
    pub bindings: KeyBindings,
    pub held: Vec<String>,
}

impl KeyboardPilot {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: Vec::new(),
        }
    }
}

impl Pilot for KeyboardPilot {
    fn next_input(&mut self, _last: Option<&MatchSnapshot>) -> InputState {
        self.bindings.resolve(self.held.iter().map(String::as_str))
    }
}

/// Steers the craft into the dragon's line and fires when lined up.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Lateral/vertical error tolerated before steering.
    pub deadband: f64,
    /// Preferred z separation behind the dragon.
    pub standoff: f64,
    /// Alignment error under which the trigger is held.
    pub firing_cone: f64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            deadband: 2.0,
            standoff: 60.0,
            firing_cone: 15.0,
        }
    }
}

impl Pilot for Autopilot {
    fn next_input(&mut self, last: Option<&MatchSnapshot>) -> InputState {
        let Some(snapshot) = last else {
            return InputState::default();
        };
        let offset = snapshot.dragon.position - snapshot.player.position;

        let mut input = InputState::default();
        input.set(Action::Right, offset.x > self.deadband);
        input.set(Action::Left, offset.x < -self.deadband);
        input.set(Action::Up, offset.y > self.deadband);
        input.set(Action::Down, offset.y < -self.deadband);
        input.set(Action::Forward, offset.z > self.standoff + self.deadband);
        input.set(Action::Backward, offset.z < self.standoff - self.deadband);
        input.set(
            Action::Shoot,
            offset.z > 0.0
                && offset.x.abs() < self.firing_cone
                && offset.y.abs() < self.firing_cone,
        );
        input
    }
}
