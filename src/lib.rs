//! Boxhead - a top-down arena shooter
//!
//! Core modules:
//! - `sim`: Tick-driven simulation (entities, spawning, collisions, upgrades)
//! - `scene`: Read-only render/HUD view of a session
//! - `platform`: Key bindings and scripted input sources
//! - `settings`: Runner preferences

pub mod platform;
pub mod scene;
pub mod settings;
pub mod sim;

pub use scene::Scene;
pub use settings::{PilotMode, Settings};

/// Game configuration constants
pub mod consts {
    /// Target simulation rate (ticks per second)
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Playfield dimensions (pixels)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Entity box sizes (square, pixels)
    pub const PLAYER_SIZE: f32 = 50.0;
    pub const ENEMY_SIZE: f32 = 50.0;
    pub const BULLET_SIZE: f32 = 5.0;
    pub const UPGRADE_SIZE: f32 = 20.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_START_HEALTH: i32 = 100;
    /// Health lost per tick of contact with an enemy
    pub const CONTACT_DAMAGE: i32 = 10;

    /// Enemy defaults
    pub const ENEMY_SPEED: f32 = 2.0;
    pub const FAST_ENEMY_SPEED: f32 = 4.0;
    pub const STRONG_ENEMY_HEALTH: i32 = 3;
    /// Angle step of the circle pattern (degrees per tick)
    pub const CIRCLE_STEP_DEGREES: f32 = 5.0;

    /// Bullet speed (pixels per tick), base and upgraded
    pub const BULLET_SPEED: f32 = 10.0;
    pub const BULLET_SPEED_UPGRADE: f32 = 15.0;
    /// Ticks between shots, base and upgraded
    pub const BULLET_FIRE_RATE: u32 = 15;
    pub const BULLET_FIRE_RATE_UPGRADE: u32 = 10;

    /// Spawner cadence (ticks)
    pub const ENEMY_SPAWN_RATE: u64 = 30;
    pub const UPGRADE_SPAWN_RATE: u64 = 300;
    /// How long a collected upgrade stays active (ticks)
    pub const UPGRADE_DURATION: u32 = 300;
}

/// Flat RGB colours handed to the renderer
pub mod palette {
    pub type Rgb = [u8; 3];

    pub const BACKGROUND: Rgb = [50, 50, 50];
    pub const PLAYER: Rgb = [0, 0, 255];
    pub const ENEMY: Rgb = [255, 0, 0];
    pub const FAST_ENEMY: Rgb = [255, 165, 0];
    pub const STRONG_ENEMY: Rgb = [128, 0, 128];
    pub const BULLET: Rgb = [255, 255, 0];
    pub const UPGRADE: Rgb = [0, 255, 0];
    pub const HUD_TEXT: Rgb = [255, 255, 255];
}
