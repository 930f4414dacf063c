//! Projectile data model and rate limiting.
//!
//! Stored in `MatchEngine`'s projectile manager, NOT as ECS entities, so
//! each faction's shots keep their firing order.

use skyduel_core::constants::*;
use skyduel_core::enums::Faction;
use skyduel_core::math::distance;
use skyduel_core::types::Vec3;

/// A shot in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub faction: Faction,
    pub position: Vec3,
    /// Displacement per tick.
    pub velocity: Vec3,
}

impl Projectile {
    /// Player shot launched from the craft's nose straight down +z.
    pub fn player_shot(origin: Vec3) -> Self {
        Self {
            faction: Faction::Player,
            position: origin + Vec3::new(0.0, 0.0, PLAYER_SHOT_OFFSET_Z),
            velocity: Vec3::new(0.0, 0.0, PLAYER_SHOT_SPEED),
        }
    }

    pub fn dragon_shot(origin: Vec3, velocity: Vec3) -> Self {
        Self {
            faction: Faction::Dragon,
            position: origin,
            velocity,
        }
    }

    /// Whether the shot is still inside its faction's live volume.
    pub fn in_range(&self, camera_position: Vec3) -> bool {
        match self.faction {
            Faction::Player => {
                self.position.x.abs() < PLAYER_SHOT_LATERAL_LIMIT
                    && self.position.y.abs() < PLAYER_SHOT_LATERAL_LIMIT
                    && self.position.z < PLAYER_SHOT_FORWARD_LIMIT
            }
            Faction::Dragon => distance(self.position, camera_position) < DRAGON_SHOT_RANGE,
        }
    }
}

/// Ordered shot collections, one per faction.
#[derive(Debug, Clone, Default)]
pub struct ProjectileManager {
    player: Vec<Projectile>,
    dragon: Vec<Projectile>,
}

impl ProjectileManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shot to its faction's collection.
    pub fn fire(&mut self, projectile: Projectile) {
        self.collection_mut(projectile.faction).push(projectile);
    }

    /// Move every shot by its velocity, then drop those that left their
    /// live volume. Survivors keep their relative order.
    pub fn advance(&mut self, camera_position: Vec3) {
        for list in [&mut self.player, &mut self.dragon] {
            for shot in list.iter_mut() {
                shot.position += shot.velocity;
            }
            list.retain(|shot| shot.in_range(camera_position));
        }
    }

    /// Remove and return the shot at `index`, if any.
    pub fn remove(&mut self, faction: Faction, index: usize) -> Option<Projectile> {
        let list = self.collection_mut(faction);
        (index < list.len()).then(|| list.remove(index))
    }

    pub fn iter(&self, faction: Faction) -> impl Iterator<Item = &Projectile> {
        self.collection(faction).iter()
    }

    pub fn get(&self, faction: Faction, index: usize) -> Option<&Projectile> {
        self.collection(faction).get(index)
    }

    pub fn len(&self, faction: Faction) -> usize {
        self.collection(faction).len()
    }

    pub fn is_empty(&self) -> bool {
        self.player.is_empty() && self.dragon.is_empty()
    }

    pub fn clear(&mut self) {
        self.player.clear();
        self.dragon.clear();
    }

    fn collection(&self, faction: Faction) -> &Vec<Projectile> {
        match faction {
            Faction::Player => &self.player,
            Faction::Dragon => &self.dragon,
        }
    }

    fn collection_mut(&mut self, faction: Faction) -> &mut Vec<Projectile> {
        match faction {
            Faction::Player => &mut self.player,
            Faction::Dragon => &mut self.dragon,
        }
    }
}

/// Minimum-interval limiter over the injected clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireGate {
    pub interval_ms: u64,
    pub last: Option<u64>,
}

impl FireGate {
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last: None,
        }
    }

    /// Open when never fired, or when at least `interval_ms` has elapsed.
    pub fn is_open(&self, now_ms: u64) -> bool {
        match self.last {
            None => true,
            Some(last) => now_ms.saturating_sub(last) >= self.interval_ms,
        }
    }

    /// Stamp the gate if open. Returns whether it was.
    pub fn try_fire(&mut self, now_ms: u64) -> bool {
        if self.is_open(now_ms) {
            self.last = Some(now_ms);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.last = None;
    }
}

/// The three timing gates a match carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombatGates {
    pub player_fire: FireGate,
    pub dragon_fire: FireGate,
    pub melee: FireGate,
}

impl Default for CombatGates {
    fn default() -> Self {
        Self {
            player_fire: FireGate::new(PLAYER_FIRE_INTERVAL_MS),
            dragon_fire: FireGate::new(DRAGON_FIRE_INTERVAL_MS),
            melee: FireGate::new(MELEE_COOLDOWN_MS),
        }
    }
}

impl CombatGates {
    pub fn clear(&mut self) {
        self.player_fire.clear();
        self.dragon_fire.clear();
        self.melee.clear();
    }
}
