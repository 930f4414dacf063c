//! Simulation constants and tuning parameters.
//!
//! Distances are abstract world units, speeds are units per tick,
//! and durations are milliseconds of the injected clock unless noted.

// --- World bounds ---

/// Half-width of the arena on the x axis.
pub const WORLD_X_EXTENT: f64 = 100.0;

/// Half-height of the arena on the y axis.
pub const WORLD_Y_EXTENT: f64 = 80.0;

/// Half-depth of the arena on the z axis.
pub const WORLD_Z_EXTENT: f64 = 100.0;

// --- Camera ---

/// Eye-to-projection-plane distance used for perspective scaling.
pub const CAMERA_DISTANCE: f64 = 300.0;

/// Camera reference point; dragon shots despawn relative to it.
pub const CAMERA_POSITION: [f64; 3] = [0.0, 0.0, -100.0];

/// Default viewport size in pixels.
pub const VIEWPORT_WIDTH: f64 = 800.0;
pub const VIEWPORT_HEIGHT: f64 = 600.0;

/// Projection is refused when `distance + z` falls below this.
pub const PROJECTION_EPSILON: f64 = 1e-6;

/// Vectors shorter than this are not normalized.
pub const NORMALIZE_EPSILON: f64 = 1e-6;

// --- Combatants ---

/// Player spawn point.
pub const PLAYER_START: [f64; 3] = [0.0, 0.0, -50.0];

/// Dragon spawn point.
pub const DRAGON_START: [f64; 3] = [30.0, 20.0, 50.0];

/// Default player movement speed (units per tick).
pub const PLAYER_DEFAULT_SPEED: f64 = 2.0;

/// Vertical movement is slower than lateral movement by this factor.
pub const PLAYER_VERTICAL_SPEED_FACTOR: f64 = 0.8;

/// Dragon base speed (units per tick).
pub const DRAGON_SPEED: f64 = 1.5;

// --- Player attitude (banking / pitching while steering) ---

pub const PLAYER_MAX_BANK: f64 = 0.3;
pub const PLAYER_BANK_RATE: f64 = 0.05;
pub const PLAYER_MAX_PITCH: f64 = 0.2;
pub const PLAYER_PITCH_RATE: f64 = 0.03;
/// Per-tick decay applied to bank/pitch with no steering input.
pub const PLAYER_ATTITUDE_DECAY: f64 = 0.9;

// --- Dragon attitude ---

pub const DRAGON_YAW_RATE: f64 = 0.008;
pub const DRAGON_PITCH_AMPLITUDE: f64 = 0.15;
pub const DRAGON_PITCH_FREQUENCY: f64 = 0.5;
pub const DRAGON_ROLL_AMPLITUDE: f64 = 0.1;
pub const DRAGON_ROLL_FREQUENCY: f64 = 0.3;

// --- Difficulty defaults (max health) ---

pub const EASY_PLAYER_HEALTH: u32 = 150;
pub const EASY_DRAGON_HEALTH: u32 = 150;
pub const NORMAL_PLAYER_HEALTH: u32 = 100;
pub const NORMAL_DRAGON_HEALTH: u32 = 200;
pub const HARD_PLAYER_HEALTH: u32 = 75;
pub const HARD_DRAGON_HEALTH: u32 = 250;

// --- AI intensity multipliers ---

pub const AI_WEAK_MULTIPLIER: f64 = 0.7;
pub const AI_NORMAL_MULTIPLIER: f64 = 1.0;
pub const AI_STRONG_MULTIPLIER: f64 = 1.4;

// --- Adversary AI ---

/// Phase accumulator increment per tick (drives oscillating motion).
pub const DRAGON_PHASE_STEP: f64 = 0.02;

/// Patrol drift amplitude per axis (x, y, z), before intensity scaling.
pub const PATROL_AMPLITUDE: [f64; 3] = [1.2, 0.8, 0.6];

/// Patrol drift frequency per axis, as multiples of the phase.
pub const PATROL_FREQUENCY: [f64; 3] = [1.0, 0.7, 0.5];

/// Patrol → Chase when the player is closer than this.
pub const CHASE_TRIGGER_RANGE: f64 = 80.0;

/// Chase steering is suppressed inside this range.
pub const CHASE_MIN_RANGE: f64 = 20.0;

/// Chase speed as a fraction of dragon speed.
pub const CHASE_SPEED_FACTOR: f64 = 0.5;

/// Vertical separation above which chase adds a vertical nudge.
pub const CHASE_VERTICAL_THRESHOLD: f64 = 30.0;

/// Vertical nudge as a fraction of chase speed.
pub const CHASE_VERTICAL_FACTOR: f64 = 0.8;

/// Chase → Attack when the player is closer than this.
pub const ATTACK_TRIGGER_RANGE: f64 = 50.0;

/// Chase gives up and returns to Patrol after this many ticks.
pub const CHASE_TIMEOUT_TICKS: u32 = 300;

/// Attack climb phase ends at this tick.
pub const ATTACK_CLIMB_TICKS: u32 = 60;

/// Attack charge phase ends at this tick; Retreat follows.
pub const ATTACK_CHARGE_TICKS: u32 = 120;

/// Climb rate during the attack wind-up.
pub const ATTACK_CLIMB_RATE: f64 = 1.5;

/// Pull-back rate during the attack wind-up.
pub const ATTACK_PULLBACK_RATE: f64 = 0.5;

/// Charge speed as a multiple of dragon speed.
pub const ATTACK_CHARGE_FACTOR: f64 = 1.5;

/// Per-tick fire probability while charging (scaled by intensity).
pub const ATTACK_FIRE_CHANCE: f64 = 0.1;

/// Retreat returns to Patrol after this many ticks.
pub const RETREAT_TICKS: u32 = 90;

/// Retreat weave amplitude on x and y, before intensity scaling.
pub const RETREAT_AMPLITUDE: [f64; 2] = [2.0, 1.5];

/// Retreat weave frequency on x and y.
pub const RETREAT_FREQUENCY: [f64; 2] = [2.0, 1.5];

/// Constant z withdrawal per tick while retreating (scaled by intensity).
pub const RETREAT_WITHDRAW_RATE: f64 = 1.0;

/// Opportunistic fire is possible inside this range in any state.
pub const OPPORTUNISTIC_FIRE_RANGE: f64 = 120.0;

/// Per-tick opportunistic fire probability (scaled by intensity).
pub const OPPORTUNISTIC_FIRE_CHANCE: f64 = 0.005;

// --- Predictive targeting ---

/// Lead time is distance divided by this.
pub const LEAD_TIME_DIVISOR: f64 = 3.0;

/// Assumed player lateral / forward speed when predicting.
pub const LEAD_LATERAL_SPEED: f64 = 2.0;

/// Assumed player vertical speed when predicting.
pub const LEAD_VERTICAL_SPEED: f64 = 1.6;

// --- Projectiles ---

/// Player shot speed (units per tick, along +z).
pub const PLAYER_SHOT_SPEED: f64 = 8.0;

/// Player shots spawn this far ahead of the craft's nose.
pub const PLAYER_SHOT_OFFSET_Z: f64 = 20.0;

/// Dragon shot speed (units per tick).
pub const DRAGON_SHOT_SPEED: f64 = 3.0;

/// Player shots despawn once |x| or |y| reaches this.
pub const PLAYER_SHOT_LATERAL_LIMIT: f64 = 200.0;

/// Player shots despawn once z reaches this.
pub const PLAYER_SHOT_FORWARD_LIMIT: f64 = 300.0;

/// Dragon shots despawn at this distance from the camera reference point.
pub const DRAGON_SHOT_RANGE: f64 = 500.0;

/// Minimum interval between player shots (ms).
pub const PLAYER_FIRE_INTERVAL_MS: u64 = 150;

/// Minimum interval between dragon shots (ms).
pub const DRAGON_FIRE_INTERVAL_MS: u64 = 2500;

// --- Collision & damage ---

pub const PLAYER_SHOT_HIT_RADIUS: f64 = 25.0;
pub const PLAYER_SHOT_DAMAGE: u32 = 12;
pub const PLAYER_SHOT_SCORE: u32 = 15;
pub const VICTORY_BONUS: u32 = 200;

pub const DRAGON_SHOT_HIT_RADIUS: f64 = 18.0;
pub const DRAGON_SHOT_DAMAGE: u32 = 15;

pub const MELEE_RANGE: f64 = 35.0;
pub const MELEE_DAMAGE: u32 = 8;
/// Single shared cooldown between melee damage applications (ms).
pub const MELEE_COOLDOWN_MS: u64 = 1000;
