//! Demo pilot
//!
//! Plays the game from what is on screen, pressing the same keys a person
//! would. Used by the headless runner and for attract-mode style demos.

use glam::Vec2;

use super::input::{InputFrame, KeyBindings};
use crate::scene::{ItemKind, Scene};

/// Enemies closer than this (centre to centre) make the pilot back off
const DANGER_RADIUS: f32 = 110.0;
/// Ticks between fire presses
const FIRE_INTERVAL: u32 = 12;
/// Offsets smaller than this don't move the pilot
const DEADZONE: f32 = 3.0;

/// Scripted input source
#[derive(Debug, Clone)]
pub struct DemoPilot {
    bindings: KeyBindings,
    pub danger_radius: f32,
    pub fire_interval: u32,
    ticks: u32,
}

impl Default for DemoPilot {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

impl DemoPilot {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            danger_radius: DANGER_RADIUS,
            fire_interval: FIRE_INTERVAL,
            ticks: 0,
        }
    }

    /// Decide this frame's keys from the current scene
    pub fn next_frame(&mut self, scene: &Scene) -> InputFrame {
        let mut frame = InputFrame::default();
        let tick = self.ticks;
        self.ticks = self.ticks.wrapping_add(1);

        if scene.hud.game_over {
            frame.press(self.bindings.restart);
            self.ticks = 0;
            return frame;
        }

        let Some(player) = scene.items.iter().find(|i| i.kind == ItemKind::Player) else {
            return frame;
        };
        let me = player.rect.center();

        let enemies: Vec<Vec2> = scene
            .items
            .iter()
            .filter(|i| matches!(i.kind, ItemKind::Enemy(_)))
            .map(|i| i.rect.center())
            .collect();

        // Aim at the nearest enemy
        let nearest = enemies.iter().copied().min_by(|a, b| {
            a.distance_squared(me)
                .partial_cmp(&b.distance_squared(me))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        if let Some(target) = nearest {
            frame.pointer = target;
            if self.fire_interval == 0 || tick % self.fire_interval == 0 {
                frame.press(self.bindings.fire);
            }
        }

        // Back away from anything too close
        let threat: Vec2 = enemies
            .iter()
            .filter(|e| e.distance(me) < self.danger_radius)
            .map(|e| (me - *e).normalize_or_zero())
            .sum();

        let heading = if threat != Vec2::ZERO {
            // Pull toward the middle so walls don't pin the pilot
            let middle = Vec2::new(scene.width, scene.height) / 2.0;
            (threat.normalize_or_zero() * 2.0 + (middle - me).normalize_or_zero())
                * self.danger_radius
        } else if let Some(upgrade) = self.nearest_upgrade(scene, me) {
            upgrade - me
        } else {
            Vec2::ZERO
        };
        self.steer(&mut frame, heading);

        frame
    }

    fn nearest_upgrade(&self, scene: &Scene, me: Vec2) -> Option<Vec2> {
        scene
            .items
            .iter()
            .filter(|i| matches!(i.kind, ItemKind::Upgrade(_)))
            .map(|i| i.rect.center())
            .min_by(|a, b| {
                a.distance_squared(me)
                    .partial_cmp(&b.distance_squared(me))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    }

    fn steer(&self, frame: &mut InputFrame, heading: Vec2) {
        if heading.x > DEADZONE {
            frame.hold(self.bindings.right[0]);
        } else if heading.x < -DEADZONE {
            frame.hold(self.bindings.left[0]);
        }
        if heading.y > DEADZONE {
            frame.hold(self.bindings.down[0]);
        } else if heading.y < -DEADZONE {
            frame.hold(self.bindings.up[0]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Key;
    use crate::sim::{
        Enemy, EnemyKind, GameSession, MovementPattern, SimConfig, Upgrade, UpgradeKind,
    };

    fn session() -> GameSession {
        GameSession::new(SimConfig::without_spawns())
    }

    fn add_enemy(session: &mut GameSession, pos: Vec2) {
        let id = session.next_entity_id();
        let enemy = Enemy::with_pattern(
            id,
            pos,
            EnemyKind::Normal,
            MovementPattern::Straight,
            session.config(),
        );
        session.enemies.push(enemy);
    }

    #[test]
    fn test_restarts_after_game_over() {
        let mut pilot = DemoPilot::default();
        let mut scene = Scene::capture(&session());
        scene.hud.game_over = true;
        let frame = pilot.next_frame(&scene);
        assert_eq!(frame.pressed, vec![Key::R]);
        assert!(frame.held.is_empty());
    }

    #[test]
    fn test_aims_at_nearest_enemy() {
        let mut pilot = DemoPilot::default();
        let mut session = session();
        add_enemy(&mut session, Vec2::new(700.0, 500.0));
        add_enemy(&mut session, Vec2::new(100.0, 300.0));
        let frame = pilot.next_frame(&Scene::capture(&session));
        // Second enemy centre is 300px away, the first is ~360px
        assert_eq!(frame.pointer, Vec2::new(125.0, 325.0));
        assert!(frame.pressed.contains(&Key::Space));
        // Nothing close: no movement
        assert!(frame.held.is_empty());

        // Fire presses are spaced out
        let frame = pilot.next_frame(&Scene::capture(&session));
        assert!(!frame.pressed.contains(&Key::Space));
    }

    #[test]
    fn test_backs_away_from_close_enemy() {
        let mut pilot = DemoPilot::default();
        let mut session = session();
        // Directly to the right of the player, within the danger radius
        add_enemy(&mut session, Vec2::new(480.0, 300.0));
        let frame = pilot.next_frame(&Scene::capture(&session));
        assert!(frame.held.contains(&Key::ArrowLeft));
        assert!(!frame.held.contains(&Key::ArrowRight));
    }

    #[test]
    fn test_walks_to_upgrade_when_safe() {
        let mut pilot = DemoPilot::default();
        let mut session = session();
        let id = session.next_entity_id();
        let upgrade = Upgrade::new(
            id,
            Vec2::new(200.0, 100.0),
            UpgradeKind::Speed,
            session.config(),
        );
        session.upgrades.push(upgrade);
        let frame = pilot.next_frame(&Scene::capture(&session));
        assert!(frame.held.contains(&Key::ArrowLeft));
        assert!(frame.held.contains(&Key::ArrowUp));
        assert!(frame.pressed.is_empty());
    }

    #[test]
    fn test_idle_when_nothing_on_screen() {
        let mut pilot = DemoPilot::default();
        let frame = pilot.next_frame(&Scene::capture(&session()));
        assert!(frame.held.is_empty());
        assert!(frame.pressed.is_empty());
    }
}
