//! Counter-driven enemy and upgrade spawning

use glam::Vec2;
use rand::Rng;

use super::config::{SimConfig, trigger_due};
use super::entities::{Enemy, EnemyKind, Upgrade, UpgradeKind, random_coord};
use super::state::GameSession;

/// Screen edge an enemy enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Uniform point along this edge (whole pixels, ends inclusive)
    pub fn random_point<R: Rng>(&self, config: &SimConfig, rng: &mut R) -> Vec2 {
        let (w, h) = (config.screen_width, config.screen_height);
        match self {
            Edge::Top => Vec2::new(random_coord(rng, w), 0.0),
            Edge::Bottom => Vec2::new(random_coord(rng, w), h),
            Edge::Left => Vec2::new(0.0, random_coord(rng, h)),
            Edge::Right => Vec2::new(w, random_coord(rng, h)),
        }
    }
}

/// Build an enemy of random type on a random edge
pub fn spawn_enemy<R: Rng>(id: u32, config: &SimConfig, rng: &mut R) -> Enemy {
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    let kind = EnemyKind::ALL[rng.random_range(0..EnemyKind::ALL.len())];
    let pos = edge.random_point(config, rng);
    Enemy::new(id, pos, kind, config, rng)
}

/// Build an upgrade of random type somewhere fully on screen
pub fn spawn_upgrade<R: Rng>(id: u32, config: &SimConfig, rng: &mut R) -> Upgrade {
    let kind = UpgradeKind::ALL[rng.random_range(0..UpgradeKind::ALL.len())];
    let pos = Vec2::new(
        random_coord(rng, config.screen_width - config.upgrade_size),
        random_coord(rng, config.screen_height - config.upgrade_size),
    );
    Upgrade::new(id, pos, kind, config)
}

/// Fire whichever spawn triggers are due on the session's current tick
pub fn run<R: Rng>(session: &mut GameSession, rng: &mut R) {
    let frame = session.frame_count;

    if trigger_due(frame, session.config().enemy_spawn_rate) {
        let id = session.next_entity_id();
        let enemy = spawn_enemy(id, session.config(), rng);
        log::debug!(
            "Spawned {:?} enemy #{} ({:?}) at ({}, {})",
            enemy.kind,
            enemy.id,
            enemy.pattern,
            enemy.rect.pos.x,
            enemy.rect.pos.y
        );
        session.enemies.push(enemy);
    }

    if trigger_due(frame, session.config().upgrade_spawn_rate) {
        let id = session.next_entity_id();
        let upgrade = spawn_upgrade(id, session.config(), rng);
        log::debug!(
            "Spawned {} upgrade #{} at ({}, {})",
            upgrade.kind.as_str(),
            upgrade.id,
            upgrade.rect.pos.x,
            upgrade.rect.pos.y
        );
        session.upgrades.push(upgrade);
    }
}
