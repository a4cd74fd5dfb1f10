//! Agent state and the per-tick context handed to every node.

use std::time::Duration;

/// A soldier with health, a magazine and a cover flag.
///
/// Damage taken while in cover is halved.
#[derive(Debug, Clone, PartialEq)]
pub struct Soldier {
    pub health: f32,
    pub max_health: f32,
    pub ammo: u32,
    pub magazine_size: u32,
    pub in_cover: bool,
    pub enemy_visible: bool,
    pub shots_fired: u32,
}

impl Soldier {
    /// A soldier at full health with a full magazine, out of cover.
    pub fn new(max_health: f32, magazine_size: u32) -> Self {
        Self {
            health: max_health,
            max_health,
            ammo: magazine_size,
            magazine_size,
            in_cover: false,
            enemy_visible: false,
            shots_fired: 0,
        }
    }

    pub fn with_health(mut self, health: f32) -> Self {
        self.health = health.clamp(0.0, self.max_health);
        self
    }

    pub fn with_ammo(mut self, ammo: u32) -> Self {
        self.ammo = ammo.min(self.magazine_size);
        self
    }

    /// Current health as a fraction of maximum (0.0 for a zero maximum).
    pub fn health_ratio(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        self.health / self.max_health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    pub fn is_magazine_full(&self) -> bool {
        self.ammo >= self.magazine_size
    }

    pub fn take_damage(&mut self, amount: f32) {
        let amount = if self.in_cover { amount / 2.0 } else { amount };
        self.health = (self.health - amount).max(0.0);
    }

    pub fn heal(&mut self, amount: f32) {
        self.health = (self.health + amount).min(self.max_health);
    }
}

impl Default for Soldier {
    fn default() -> Self {
        Self::new(100.0, 6)
    }
}

/// Context passed to every tick of a soldier's tree.
///
/// The driver fills in `delta` and `frame` before each tick; nodes read and
/// modify `soldier`.
#[derive(Debug, Clone)]
pub struct AgentContext {
    pub soldier: Soldier,

    /// Simulated time elapsed since the previous tick.
    pub delta: Duration,

    /// Zero-based index of the tick in progress.
    pub frame: u64,
}

impl AgentContext {
    pub fn new(soldier: Soldier) -> Self {
        Self {
            soldier,
            delta: Duration::ZERO,
            frame: 0,
        }
    }
}
