//! Match engine: the core of the game.
//!
//! `MatchEngine` owns the hecs ECS world, runs all systems once per tick,
//! and produces `MatchSnapshot`s. Completely headless, with time injected
//! through a `Clock`, enabling deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use skyduel_core::config::{ConfigError, GameSettings};
use skyduel_core::enums::MatchOutcome;
use skyduel_core::events::GameEvent;
use skyduel_core::input::InputState;
use skyduel_core::state::MatchSnapshot;
use skyduel_core::types::SimTime;

use skyduel_ai::fsm::{AdversaryBrain, AdversaryState};

use crate::clock::{Clock, MonotonicClock};
use crate::projectiles::{CombatGates, ProjectileManager};
use crate::systems;
use crate::world_setup::{self, Combatants};

/// Configuration for starting a new match.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same match.
    pub seed: u64,
    /// Initial runtime settings.
    pub settings: GameSettings,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            settings: GameSettings::default(),
        }
    }
}

/// The match engine. Owns the ECS world and all match state.
pub struct MatchEngine<C: Clock = MonotonicClock> {
    world: World,
    combatants: Combatants,
    time: SimTime,
    outcome: MatchOutcome,
    score: u32,
    settings: GameSettings,
    rng: ChaCha8Rng,
    clock: C,
    brain: AdversaryBrain,
    projectiles: ProjectileManager,
    gates: CombatGates,
    events: Vec<GameEvent>,
    /// Reset action state on the previous tick, for edge detection.
    reset_held: bool,
}

impl MatchEngine<MonotonicClock> {
    /// Create a match engine timed by the wall clock.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl<C: Clock> MatchEngine<C> {
    /// Create a match engine timed by `clock`. Fails if the settings are invalid.
    pub fn with_clock(config: SimConfig, clock: C) -> Result<Self, ConfigError> {
        config.settings.validate()?;

        let mut world = World::new();
        let combatants = world_setup::spawn_combatants(&mut world, &config.settings);

        Ok(Self {
            world,
            combatants,
            time: SimTime::default(),
            outcome: MatchOutcome::default(),
            score: 0,
            settings: config.settings,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            clock,
            brain: AdversaryBrain::default(),
            projectiles: ProjectileManager::new(),
            gates: CombatGates::default(),
            events: Vec::new(),
            reset_held: false,
        })
    }

    /// Advance the match by one tick and return the resulting snapshot.
    pub fn tick(&mut self, input: &InputState) -> MatchSnapshot {
        let reset_pressed = input.reset && !self.reset_held;
        self.reset_held = input.reset;
        if reset_pressed {
            self.reset();
        }

        if self.outcome == MatchOutcome::InProgress {
            self.run_systems(input);
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.outcome,
            self.score,
            self.brain.state.kind(),
            &self.projectiles,
            input.open_config,
            events,
        )
    }

    /// Validate and store new settings. They take effect on the next tick.
    pub fn apply_settings(&mut self, settings: GameSettings) -> Result<(), ConfigError> {
        if let Err(err) = settings.validate() {
            warn!(%err, "rejected settings");
            return Err(err);
        }
        debug!(
            difficulty = ?settings.difficulty,
            ai = ?settings.ai_intensity,
            player_speed = settings.player_speed,
            "settings applied"
        );
        self.settings = settings;
        Ok(())
    }

    /// Restore the starting configuration at the current difficulty.
    pub fn reset(&mut self) {
        world_setup::reset_combatants(&mut self.world, self.combatants, &self.settings);
        self.projectiles.clear();
        self.score = 0;
        self.brain = AdversaryBrain::default();
        self.gates.clear();
        self.outcome = MatchOutcome::InProgress;
        self.time = SimTime::default();
        self.events.push(GameEvent::MatchReset);
        info!(difficulty = ?self.settings.difficulty, "match reset");
    }

    /// Get the current match outcome.
    pub fn outcome(&self) -> MatchOutcome {
        self.outcome
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn adversary_state(&self) -> AdversaryState {
        self.brain.state
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn combatants(&self) -> Combatants {
        self.combatants
    }

    pub fn projectiles(&self) -> &ProjectileManager {
        &self.projectiles
    }

    /// Mutable world access for tests that stage positions and health.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[cfg(test)]
    pub fn projectiles_mut(&mut self) -> &mut ProjectileManager {
        &mut self.projectiles
    }

    #[cfg(test)]
    pub fn set_adversary(&mut self, brain: AdversaryBrain) {
        self.brain = brain;
    }

    #[cfg(test)]
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &InputState) {
        let now_ms = self.clock.now_ms();
        let bounds = self.settings.world.bounds;

        // 1. Difficulty ceilings and player speed
        systems::difficulty::run(&mut self.world, self.combatants, &self.settings);
        // 2. Player movement, attitude, fire
        systems::pilot::run(
            &mut self.world,
            self.combatants,
            input,
            &bounds,
            now_ms,
            &mut self.gates.player_fire,
            &mut self.projectiles,
            &mut self.events,
        );
        // 3. Adversary FSM and predictive fire
        systems::adversary::run(
            &mut self.world,
            self.combatants,
            &mut self.brain,
            input,
            self.settings.ai_intensity,
            &bounds,
            now_ms,
            &mut self.gates.dragon_fire,
            &mut self.projectiles,
            &mut self.rng,
            &mut self.events,
        );
        // 4. Projectile travel and pruning
        self.projectiles
            .advance(self.settings.world.camera.position);
        // 5. Hits and ramming
        let outcome = systems::collision::run(
            &mut self.world,
            self.combatants,
            &mut self.projectiles,
            &mut self.score,
            &mut self.gates.melee,
            now_ms,
            &mut self.events,
        );

        if outcome.is_terminal() {
            self.outcome = outcome;
            self.events.push(GameEvent::MatchEnded {
                outcome,
                final_score: self.score,
            });
            info!(?outcome, score = self.score, tick = self.time.tick, "match ended");
        }
    }
}
