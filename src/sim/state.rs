//! Game session state
//!
//! Everything that changes from tick to tick lives here, next to the
//! read-only `SimConfig` it was built from.

use glam::Vec2;

use super::config::SimConfig;
use super::entities::{ActiveUpgrade, Bullet, Enemy, Player, Upgrade};

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Entities advance every tick
    Playing,
    /// Health ran out; only a restart does anything
    GameOver,
}

/// A single run of the game
#[derive(Debug, Clone)]
pub struct GameSession {
    config: SimConfig,
    pub player: Player,
    /// Live enemies in spawn order
    pub enemies: Vec<Enemy>,
    /// Live bullets in firing order
    pub bullets: Vec<Bullet>,
    /// Upgrades waiting for pickup
    pub upgrades: Vec<Upgrade>,
    /// Ticks simulated since the last reset (drives the spawner)
    pub frame_count: u64,
    pub score: u32,
    pub phase: SessionPhase,
    pub active_upgrade: Option<ActiveUpgrade>,
    /// Next entity ID
    next_id: u32,
}

impl GameSession {
    pub fn new(config: SimConfig) -> Self {
        Self {
            player: Player::new(&config),
            enemies: Vec::new(),
            bullets: Vec::new(),
            upgrades: Vec::new(),
            frame_count: 0,
            score: 0,
            phase: SessionPhase::Playing,
            active_upgrade: None,
            next_id: 1,
            config,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Playing
    }

    /// Back to the starting configuration: fresh player at the screen
    /// centre, empty collections, counters zeroed, playing again.
    pub fn reset(&mut self) {
        self.player = Player::new(&self.config);
        self.enemies.clear();
        self.bullets.clear();
        self.upgrades.clear();
        self.frame_count = 0;
        self.score = 0;
        self.phase = SessionPhase::Playing;
        self.active_upgrade = None;
        self.next_id = 1;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Try to fire toward `target`; true if a bullet was added
    pub fn fire(&mut self, target: Vec2) -> bool {
        let Some(shot) = self.player.shoot(target, self.config.enforce_fire_rate) else {
            return false;
        };
        let id = self.next_entity_id();
        self.bullets.push(Bullet::from_shot(id, shot, &self.config));
        true
    }

    /// Mark the run as over
    pub(crate) fn end(&mut self) {
        self.phase = SessionPhase::GameOver;
        log::info!(
            "Game over at tick {}: score {}, health {}",
            self.frame_count,
            self.score,
            self.player.health
        );
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
