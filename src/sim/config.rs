//! Read-only simulation configuration
//!
//! The session owns one `SimConfig` for its whole lifetime. Defaults mirror
//! `crate::consts`; a spawn rate of 0 disables that trigger.

use crate::consts::*;

#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub screen_width: f32,
    pub screen_height: f32,

    pub player_size: f32,
    pub enemy_size: f32,
    pub bullet_size: f32,
    pub upgrade_size: f32,

    pub player_speed: f32,
    pub player_start_health: i32,
    pub contact_damage: i32,

    pub enemy_speed: f32,
    pub fast_enemy_speed: f32,
    pub strong_enemy_health: i32,
    pub circle_step_degrees: f32,

    pub bullet_speed: f32,
    pub bullet_speed_upgrade: f32,
    pub fire_rate: u32,
    pub fire_rate_upgrade: u32,
    /// Reset the fire timer on every shot. Off by default: shots are limited
    /// only by fire key presses.
    pub enforce_fire_rate: bool,

    pub enemy_spawn_rate: u64,
    pub upgrade_spawn_rate: u64,
    pub upgrade_duration: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,

            player_size: PLAYER_SIZE,
            enemy_size: ENEMY_SIZE,
            bullet_size: BULLET_SIZE,
            upgrade_size: UPGRADE_SIZE,

            player_speed: PLAYER_SPEED,
            player_start_health: PLAYER_START_HEALTH,
            contact_damage: CONTACT_DAMAGE,

            enemy_speed: ENEMY_SPEED,
            fast_enemy_speed: FAST_ENEMY_SPEED,
            strong_enemy_health: STRONG_ENEMY_HEALTH,
            circle_step_degrees: CIRCLE_STEP_DEGREES,

            bullet_speed: BULLET_SPEED,
            bullet_speed_upgrade: BULLET_SPEED_UPGRADE,
            fire_rate: BULLET_FIRE_RATE,
            fire_rate_upgrade: BULLET_FIRE_RATE_UPGRADE,
            enforce_fire_rate: false,

            enemy_spawn_rate: ENEMY_SPAWN_RATE,
            upgrade_spawn_rate: UPGRADE_SPAWN_RATE,
            upgrade_duration: UPGRADE_DURATION,
        }
    }
}

impl SimConfig {
    /// Config with both spawn triggers turned off (scripted scenarios)
    pub fn without_spawns() -> Self {
        Self {
            enemy_spawn_rate: 0,
            upgrade_spawn_rate: 0,
            ..Self::default()
        }
    }

    /// Where a fresh player starts: box origin at the screen centre
    pub fn player_start(&self) -> glam::Vec2 {
        glam::Vec2::new(
            (self.screen_width / 2.0).floor(),
            (self.screen_height / 2.0).floor(),
        )
    }
}

/// True when a counter-driven trigger with the given rate fires on `frame`
#[inline]
pub fn trigger_due(frame: u64, rate: u64) -> bool {
    rate != 0 && frame % rate == 0
}
