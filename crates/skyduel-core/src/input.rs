//! Logical input actions and the physical key bindings that drive them.
//!
//! The simulation consumes only `InputState`, never raw key names.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Key that always toggles the configuration overlay, whatever the bindings say.
pub const CONFIG_ESCAPE_KEY: &str = "Escape";

/// Logical input action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Forward,
    Backward,
    Shoot,
    Reset,
    OpenConfig,
}

/// Press state of every logical action for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub forward: bool,
    pub backward: bool,
    pub shoot: bool,
    pub reset: bool,
    pub open_config: bool,
}

/// Physical key bound to each action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindings {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
    pub forward: String,
    pub backward: String,
    pub shoot: String,
    pub reset: String,
    pub open_config: String,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::Up,
        Action::Down,
        Action::Left,
        Action::Right,
        Action::Forward,
        Action::Backward,
        Action::Shoot,
        Action::Reset,
        Action::OpenConfig,
    ];
}

impl InputState {
    pub fn is_pressed(&self, action: Action) -> bool {
        match action {
            Action::Up => self.up,
            Action::Down => self.down,
            Action::Left => self.left,
            Action::Right => self.right,
            Action::Forward => self.forward,
            Action::Backward => self.backward,
            Action::Shoot => self.shoot,
            Action::Reset => self.reset,
            Action::OpenConfig => self.open_config,
        }
    }

    pub fn set(&mut self, action: Action, pressed: bool) {
        let slot = match action {
            Action::Up => &mut self.up,
            Action::Down => &mut self.down,
            Action::Left => &mut self.left,
            Action::Right => &mut self.right,
            Action::Forward => &mut self.forward,
            Action::Backward => &mut self.backward,
            Action::Shoot => &mut self.shoot,
            Action::Reset => &mut self.reset,
            Action::OpenConfig => &mut self.open_config,
        };
        *slot = pressed;
    }

    /// Builder-style helper, mostly for tests and scripted pilots.
    pub fn with(mut self, action: Action) -> Self {
        self.set(action, true);
        self
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::wasd()
    }
}

impl KeyBindings {
    #[allow(clippy::too_many_arguments)]
    fn from_keys(
        up: &str,
        down: &str,
        left: &str,
        right: &str,
        forward: &str,
        backward: &str,
        shoot: &str,
        reset: &str,
        open_config: &str,
    ) -> Self {
        Self {
            up: up.into(),
            down: down.into(),
            left: left.into(),
            right: right.into(),
            forward: forward.into(),
            backward: backward.into(),
            shoot: shoot.into(),
            reset: reset.into(),
            open_config: open_config.into(),
        }
    }

    pub fn wasd() -> Self {
        Self::from_keys("w", "s", "a", "d", "q", "e", " ", "r", "c")
    }

    pub fn esdf() -> Self {
        Self::from_keys("e", "d", "s", "f", "w", "r", " ", "t", "c")
    }

    pub fn arrows() -> Self {
        Self::from_keys(
            "ArrowUp",
            "ArrowDown",
            "ArrowLeft",
            "ArrowRight",
            "PageUp",
            "PageDown",
            " ",
            "r",
            "c",
        )
    }

    /// Look up a named preset (`wasd`, `esdf`, `arrows`).
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "wasd" => Ok(Self::wasd()),
            "esdf" => Ok(Self::esdf()),
            "arrows" => Ok(Self::arrows()),
            other => Err(ConfigError::UnknownPreset(other.to_string())),
        }
    }

    pub fn key(&self, action: Action) -> &str {
        match action {
            Action::Up => &self.up,
            Action::Down => &self.down,
            Action::Left => &self.left,
            Action::Right => &self.right,
            Action::Forward => &self.forward,
            Action::Backward => &self.backward,
            Action::Shoot => &self.shoot,
            Action::Reset => &self.reset,
            Action::OpenConfig => &self.open_config,
        }
    }

    fn key_mut(&mut self, action: Action) -> &mut String {
        match action {
            Action::Up => &mut self.up,
            Action::Down => &mut self.down,
            Action::Left => &mut self.left,
            Action::Right => &mut self.right,
            Action::Forward => &mut self.forward,
            Action::Backward => &mut self.backward,
            Action::Shoot => &mut self.shoot,
            Action::Reset => &mut self.reset,
            Action::OpenConfig => &mut self.open_config,
        }
    }

    /// Action bound to `key`, if any.
    pub fn action_for(&self, key: &str) -> Option<Action> {
        Action::ALL.into_iter().find(|&a| self.key(a) == key)
    }

    /// Bind `key` to `action`. Fails if another action already owns the key;
    /// the existing bindings are left untouched in that case.
    pub fn rebind(&mut self, action: Action, key: &str) -> Result<(), ConfigError> {
        if let Some(existing) = self.action_for(key) {
            if existing != action {
                return Err(ConfigError::DuplicateBinding {
                    key: key.to_string(),
                    existing,
                });
            }
        }
        *self.key_mut(action) = key.to_string();
        Ok(())
    }

    /// Every key must map to exactly one action.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, &a) in Action::ALL.iter().enumerate() {
            for &b in &Action::ALL[..i] {
                if self.key(a) == self.key(b) {
                    return Err(ConfigError::DuplicateBinding {
                        key: self.key(a).to_string(),
                        existing: b,
                    });
                }
            }
        }
        Ok(())
    }

    /// Resolve a set of currently held physical keys to logical actions.
    pub fn resolve<'a>(&self, pressed: impl IntoIterator<Item = &'a str>) -> InputState {
        let mut state = InputState::default();
        for key in pressed {
            if key == CONFIG_ESCAPE_KEY {
                state.open_config = true;
            }
            if let Some(action) = self.action_for(key) {
                state.set(action, true);
            }
        }
        state
    }
}
