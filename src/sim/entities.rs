//! Player, enemies, bullets and upgrades
//!
//! Plain data plus the per-type behaviour (movement, firing). Collision and
//! lifecycle decisions belong to `tick`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::config::SimConfig;
use super::geometry::{Rect, direction_to};

/// Movement keys held this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// A bullet request produced by `Player::shoot`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub origin: Vec2,
    pub direction: Vec2,
    pub speed: f32,
}

/// The player's box and combat stats
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub rect: Rect,
    /// May dip below zero on the tick the game ends
    pub health: i32,
    pub bullet_speed: f32,
    /// Ticks the fire timer is reset to after a shot (when enforced)
    pub fire_rate: u32,
    /// Countdown to the next allowed shot; shooting needs 0
    pub fire_timer: u32,
}

impl Player {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            rect: Rect::square(config.player_start(), config.player_size),
            health: config.player_start_health,
            bullet_speed: config.bullet_speed,
            fire_rate: config.fire_rate,
            fire_timer: 0,
        }
    }

    /// Step each held direction at full speed (diagonals are not normalised),
    /// then clamp onto the screen.
    pub fn move_by(&mut self, dirs: Directions, config: &SimConfig) {
        let speed = config.player_speed;
        if dirs.left {
            self.rect.pos.x -= speed;
        }
        if dirs.right {
            self.rect.pos.x += speed;
        }
        if dirs.up {
            self.rect.pos.y -= speed;
        }
        if dirs.down {
            self.rect.pos.y += speed;
        }
        self.rect.clamp_within(config.screen_width, config.screen_height);
    }

    /// Count the fire timer down by one, floored at zero
    pub fn cool_down(&mut self) {
        self.fire_timer = self.fire_timer.saturating_sub(1);
    }

    /// Fire from the box centre toward `target`.
    ///
    /// Returns `None` while the fire timer is running or when the target is
    /// exactly the centre (no direction to fire in).
    pub fn shoot(&mut self, target: Vec2, enforce_fire_rate: bool) -> Option<Shot> {
        if self.fire_timer != 0 {
            return None;
        }
        let origin = self.rect.center();
        let direction = direction_to(origin, target)?;
        if enforce_fire_rate {
            self.fire_timer = self.fire_rate;
        }
        Some(Shot {
            origin,
            direction,
            speed: self.bullet_speed,
        })
    }

    pub fn apply_upgrade(&mut self, kind: UpgradeKind, config: &SimConfig) {
        match kind {
            UpgradeKind::Speed => self.bullet_speed = config.bullet_speed_upgrade,
            UpgradeKind::FireRate => self.fire_rate = config.fire_rate_upgrade,
        }
    }

    /// Put the stat touched by `kind` back to its base value
    pub fn revert_upgrade(&mut self, kind: UpgradeKind, config: &SimConfig) {
        match kind {
            UpgradeKind::Speed => self.bullet_speed = config.bullet_speed,
            UpgradeKind::FireRate => self.fire_rate = config.fire_rate,
        }
    }
}

/// Enemy types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyKind {
    Normal,
    Fast,
    Strong,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Normal, EnemyKind::Fast, EnemyKind::Strong];

    pub fn speed(&self, config: &SimConfig) -> f32 {
        match self {
            EnemyKind::Fast => config.fast_enemy_speed,
            EnemyKind::Normal | EnemyKind::Strong => config.enemy_speed,
        }
    }

    pub fn health(&self, config: &SimConfig) -> i32 {
        match self {
            EnemyKind::Strong => config.strong_enemy_health,
            EnemyKind::Normal | EnemyKind::Fast => 1,
        }
    }
}

/// How an enemy moves each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementPattern {
    /// Chase the player in a straight line
    Straight,
    /// Jitter sideways while falling, wrap to the top
    Zigzag,
    /// Loop around a circle, respawn when it leaves the screen
    Circle,
}

impl MovementPattern {
    pub const ALL: [MovementPattern; 3] = [
        MovementPattern::Straight,
        MovementPattern::Zigzag,
        MovementPattern::Circle,
    ];

    /// Only strong enemies get a random pattern; the rest always chase
    pub fn roll<R: Rng>(kind: EnemyKind, rng: &mut R) -> Self {
        match kind {
            EnemyKind::Strong => Self::ALL[rng.random_range(0..Self::ALL.len())],
            EnemyKind::Normal | EnemyKind::Fast => MovementPattern::Straight,
        }
    }
}

/// An enemy entity
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub id: u32,
    pub rect: Rect,
    pub kind: EnemyKind,
    pub health: i32,
    pub speed: f32,
    pub pattern: MovementPattern,
    /// Degrees, only used by the circle pattern
    pub angle: f32,
}

impl Enemy {
    pub fn new<R: Rng>(
        id: u32,
        pos: Vec2,
        kind: EnemyKind,
        config: &SimConfig,
        rng: &mut R,
    ) -> Self {
        let pattern = MovementPattern::roll(kind, rng);
        Self::with_pattern(id, pos, kind, pattern, config)
    }

    pub fn with_pattern(
        id: u32,
        pos: Vec2,
        kind: EnemyKind,
        pattern: MovementPattern,
        config: &SimConfig,
    ) -> Self {
        Self {
            id,
            rect: Rect::square(pos, config.enemy_size),
            kind,
            health: kind.health(config),
            speed: kind.speed(config),
            pattern,
            angle: 0.0,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Move one tick. `target` is the player's box origin.
    pub fn advance<R: Rng>(&mut self, target: Vec2, config: &SimConfig, rng: &mut R) {
        match self.pattern {
            MovementPattern::Straight => {
                // Sitting exactly on the target: stay put
                if let Some(dir) = direction_to(self.rect.pos, target) {
                    self.rect.pos += dir * self.speed;
                }
            }
            MovementPattern::Zigzag => {
                let sign = if rng.random::<f32>() > 0.5 { 1.0 } else { -1.0 };
                self.rect.pos.x += self.speed * sign;
                self.rect.pos.y += self.speed;
                if self.rect.pos.y > config.screen_height {
                    self.rect.pos.y = 0.0;
                    self.rect.pos.x = random_coord(rng, config.screen_width);
                }
            }
            MovementPattern::Circle => {
                let radians = self.angle.to_radians();
                self.rect.pos += Vec2::new(radians.cos(), radians.sin()) * self.speed;
                self.angle = (self.angle + config.circle_step_degrees) % 360.0;

                let pos = self.rect.pos;
                if pos.x < 0.0
                    || pos.x > config.screen_width
                    || pos.y < 0.0
                    || pos.y > config.screen_height
                {
                    self.rect.pos = Vec2::new(
                        random_coord(rng, config.screen_width),
                        random_coord(rng, config.screen_height),
                    );
                    self.angle = random_coord(rng, 360.0);
                }
            }
        }
    }
}

/// A player bullet
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub id: u32,
    pub rect: Rect,
    /// Unit vector
    pub direction: Vec2,
    pub speed: f32,
}

impl Bullet {
    pub fn from_shot(id: u32, shot: Shot, config: &SimConfig) -> Self {
        Self {
            id,
            rect: Rect::square(shot.origin, config.bullet_size),
            direction: shot.direction,
            speed: shot.speed,
        }
    }

    pub fn advance(&mut self) {
        self.rect.pos += self.direction * self.speed;
    }
}

/// Upgrade types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpgradeKind {
    /// Faster bullets
    Speed,
    /// Shorter fire interval
    FireRate,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 2] = [UpgradeKind::Speed, UpgradeKind::FireRate];

    pub fn as_str(&self) -> &'static str {
        match self {
            UpgradeKind::Speed => "Speed",
            UpgradeKind::FireRate => "Fire Rate",
        }
    }
}

/// An upgrade waiting to be picked up
#[derive(Debug, Clone, PartialEq)]
pub struct Upgrade {
    pub id: u32,
    pub rect: Rect,
    pub kind: UpgradeKind,
}

impl Upgrade {
    pub fn new(id: u32, pos: Vec2, kind: UpgradeKind, config: &SimConfig) -> Self {
        Self {
            id,
            rect: Rect::square(pos, config.upgrade_size),
            kind,
        }
    }
}

/// The single upgrade currently in effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveUpgrade {
    pub kind: UpgradeKind,
    pub remaining_ticks: u32,
}

impl ActiveUpgrade {
    pub fn new(kind: UpgradeKind, duration: u32) -> Self {
        Self {
            kind,
            remaining_ticks: duration,
        }
    }

    /// Count down one tick; true once the upgrade has run out
    pub fn tick(&mut self) -> bool {
        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        self.remaining_ticks == 0
    }
}

/// Uniform whole-pixel coordinate in [0, max]
pub(crate) fn random_coord<R: Rng>(rng: &mut R, max: f32) -> f32 {
    let max = max.max(0.0) as u32;
    rng.random_range(0..=max) as f32
}
