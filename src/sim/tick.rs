//! Fixed-step simulation tick
//!
//! Advances a session by exactly one frame. Each phase is a full pass over
//! its collection; removals are deferred to the end of the pass so every live
//! entity is visited exactly once.

use glam::Vec2;
use rand::Rng;

use super::config::SimConfig;
use super::entities::{ActiveUpgrade, Directions};
use super::spawner;
use super::state::GameSession;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement keys currently held
    pub directions: Directions,
    /// Fire key pressed this frame
    pub fire: bool,
    /// Aim point (pointer position)
    pub target: Vec2,
    /// Restart key pressed this frame (only honoured after game over)
    pub restart: bool,
}

/// What a call to `tick` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Entities advanced and the session is still running
    Advanced,
    /// Entities advanced and health ran out on this tick
    GameOver,
    /// The session was over and has been reset
    Restarted,
    /// The session is over; nothing moved
    Halted,
}

/// Advance the session by one tick
pub fn tick<R: Rng>(session: &mut GameSession, input: &TickInput, rng: &mut R) -> TickOutcome {
    if !session.is_active() {
        if input.restart {
            session.reset();
            log::info!("Session restarted");
            return TickOutcome::Restarted;
        }
        return TickOutcome::Halted;
    }

    // The fire press is handled before this frame's movement
    if input.fire {
        session.fire(input.target);
    }

    let config = session.config().clone();

    // 1-2. Player
    session.player.move_by(input.directions, &config);
    session.player.cool_down();

    // 3. Spawns
    spawner::run(session, rng);

    // 4. Enemies chase (or wander)
    let target = session.player.rect.pos;
    for enemy in &mut session.enemies {
        enemy.advance(target, &config, rng);
    }

    // 5. Bullets fly
    for bullet in &mut session.bullets {
        bullet.advance();
    }

    // 6. Collisions
    let game_over = resolve_collisions(session);

    // 7. Bullets that left the screen
    session
        .bullets
        .retain(|b| b.rect.origin_inside(config.screen_width, config.screen_height));

    // 8-9. Upgrades
    collect_upgrades(session, &config);
    expire_upgrade(session, &config);

    session.frame_count += 1;

    if game_over {
        session.end();
        TickOutcome::GameOver
    } else {
        TickOutcome::Advanced
    }
}

/// Enemy-major collision pass. Returns true once player health hits zero,
/// which also stops the pass.
fn resolve_collisions(session: &mut GameSession) -> bool {
    let contact_damage = session.config().contact_damage;
    let mut spent_bullets: Vec<u32> = Vec::new();
    let mut game_over = false;

    for enemy in &mut session.enemies {
        if enemy.rect.intersects(&session.player.rect) {
            session.player.health -= contact_damage;
            if session.player.health <= 0 {
                game_over = true;
                break;
            }
        }

        // At most one bullet lands per enemy per tick
        let hit = session
            .bullets
            .iter()
            .find(|b| !spent_bullets.contains(&b.id) && b.rect.intersects(&enemy.rect));
        if let Some(bullet) = hit {
            spent_bullets.push(bullet.id);
            enemy.health -= 1;
            if !enemy.is_alive() {
                session.score += 1;
                log::debug!("Enemy #{} ({:?}) destroyed", enemy.id, enemy.kind);
            }
        }
    }

    session.enemies.retain(|e| e.is_alive());
    if !spent_bullets.is_empty() {
        session.bullets.retain(|b| !spent_bullets.contains(&b.id));
    }

    game_over
}

/// Pick up every upgrade under the player. The last one collected owns the
/// active slot; the stat of an overwritten upgrade is left as it was.
fn collect_upgrades(session: &mut GameSession, config: &SimConfig) {
    let player = &mut session.player;
    let active = &mut session.active_upgrade;

    session.upgrades.retain(|upgrade| {
        if !upgrade.rect.intersects(&player.rect) {
            return true;
        }
        player.apply_upgrade(upgrade.kind, config);
        *active = Some(ActiveUpgrade::new(upgrade.kind, config.upgrade_duration));
        log::info!("Picked up {} upgrade #{}", upgrade.kind.as_str(), upgrade.id);
        false
    });
}

/// Count the active upgrade down and revert its stat when it runs out
fn expire_upgrade(session: &mut GameSession, config: &SimConfig) {
    let Some(active) = session.active_upgrade.as_mut() else {
        return;
    };
    if active.tick() {
        let kind = active.kind;
        session.player.revert_upgrade(kind, config);
        session.active_upgrade = None;
        log::info!("{} upgrade expired", kind.as_str());
    }
}
