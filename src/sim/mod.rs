//! Tick-driven simulation module
//!
//! All gameplay logic lives here. This module stays free of I/O:
//! - One fixed step per frame, driven by the caller
//! - Randomness only through an injected `rand::Rng`
//! - Stable iteration order (entities keep insertion/id order)
//! - No rendering or platform dependencies

pub mod config;
pub mod entities;
pub mod geometry;
pub mod spawner;
pub mod state;
pub mod tick;

pub use config::SimConfig;
pub use entities::{
    ActiveUpgrade, Bullet, Directions, Enemy, EnemyKind, MovementPattern, Player, Shot, Upgrade,
    UpgradeKind,
};
pub use geometry::{Rect, direction_to};
pub use state::{GameSession, SessionPhase};
pub use tick::{TickInput, TickOutcome, tick};
