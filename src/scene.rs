//! Read-only render view of a session
//!
//! A `Scene` is everything a frontend needs to draw one frame: flat-coloured
//! boxes in draw order plus the HUD. It holds no references into the session,
//! so it can be kept around, compared or dumped as JSON.

use serde::{Deserialize, Serialize};

use crate::palette::{self, Rgb};
use crate::sim::{ActiveUpgrade, EnemyKind, GameSession, Rect, UpgradeKind};

/// What a drawn box represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Player,
    Enemy(EnemyKind),
    Bullet,
    Upgrade(UpgradeKind),
}

impl ItemKind {
    pub fn color(&self) -> Rgb {
        match self {
            ItemKind::Player => palette::PLAYER,
            ItemKind::Enemy(EnemyKind::Normal) => palette::ENEMY,
            ItemKind::Enemy(EnemyKind::Fast) => palette::FAST_ENEMY,
            ItemKind::Enemy(EnemyKind::Strong) => palette::STRONG_ENEMY,
            ItemKind::Bullet => palette::BULLET,
            ItemKind::Upgrade(_) => palette::UPGRADE,
        }
    }
}

/// One filled box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneItem {
    /// Entity ID (0 for the player)
    pub id: u32,
    pub kind: ItemKind,
    pub rect: Rect,
    pub color: Rgb,
}

impl SceneItem {
    fn new(id: u32, kind: ItemKind, rect: Rect) -> Self {
        Self {
            id,
            kind,
            rect,
            color: kind.color(),
        }
    }
}

/// Heads-up display values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hud {
    pub score: u32,
    /// Player health, never shown below zero
    pub health: i32,
    pub active_upgrade: Option<ActiveUpgrade>,
    pub game_over: bool,
}

impl Hud {
    /// Text lines in display order (top-left block, then the centred
    /// game-over banner)
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Score: {}", self.score),
            format!("Health: {}", self.health),
        ];
        if let Some(active) = self.active_upgrade {
            lines.push(format!(
                "Upgrade: {} ({})",
                active.kind.as_str(),
                active.remaining_ticks
            ));
        }
        if self.game_over {
            lines.push("Game Over".to_string());
            lines.push("Press R to Restart".to_string());
        }
        lines
    }
}

/// A snapshot of one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub background: Rgb,
    /// Draw order: player, enemies, bullets, upgrades
    pub items: Vec<SceneItem>,
    pub hud: Hud,
}

impl Scene {
    pub fn capture(session: &GameSession) -> Self {
        let config = session.config();
        let mut items = Vec::with_capacity(
            1 + session.enemies.len() + session.bullets.len() + session.upgrades.len(),
        );

        items.push(SceneItem::new(0, ItemKind::Player, session.player.rect));
        items.extend(
            session
                .enemies
                .iter()
                .map(|e| SceneItem::new(e.id, ItemKind::Enemy(e.kind), e.rect)),
        );
        items.extend(
            session
                .bullets
                .iter()
                .map(|b| SceneItem::new(b.id, ItemKind::Bullet, b.rect)),
        );
        items.extend(
            session
                .upgrades
                .iter()
                .map(|u| SceneItem::new(u.id, ItemKind::Upgrade(u.kind), u.rect)),
        );

        Self {
            width: config.screen_width,
            height: config.screen_height,
            background: palette::BACKGROUND,
            items,
            hud: Hud {
                score: session.score,
                health: session.player.health.max(0),
                active_upgrade: session.active_upgrade,
                game_over: !session.is_active(),
            },
        }
    }

    /// Number of items whose kind matches
    pub fn count(&self, matches: impl Fn(&ItemKind) -> bool) -> usize {
        self.items.iter().filter(|item| matches(&item.kind)).count()
    }
}
