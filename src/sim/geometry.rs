//! Axis-aligned boxes and direction helpers
//!
//! Every collision in the game is a box-vs-box overlap test, so this is the
//! only geometry the simulation needs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box: top-left origin plus size (screen space, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Square box with its origin at `pos`
    pub fn square(pos: Vec2, side: f32) -> Self {
        Self {
            pos,
            size: Vec2::splat(side),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Strict overlap test. Boxes that only share an edge do not collide,
    /// and a zero-area box never collides.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.size.x <= 0.0 || self.size.y <= 0.0 || other.size.x <= 0.0 || other.size.y <= 0.0
        {
            return false;
        }
        self.pos.x < other.right()
            && self.right() > other.pos.x
            && self.pos.y < other.bottom()
            && self.bottom() > other.pos.y
    }

    /// Clamp the origin so the whole box stays inside [0, width] x [0, height]
    pub fn clamp_within(&mut self, width: f32, height: f32) {
        let max_x = (width - self.size.x).max(0.0);
        let max_y = (height - self.size.y).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
        self.pos.y = self.pos.y.clamp(0.0, max_y);
    }

    /// True while the origin lies strictly inside (0, width) x (0, height)
    pub fn origin_inside(&self, width: f32, height: f32) -> bool {
        self.pos.x > 0.0 && self.pos.x < width && self.pos.y > 0.0 && self.pos.y < height
    }
}

/// Unit vector from `from` toward `to`, or `None` when the points coincide
pub fn direction_to(from: Vec2, to: Vec2) -> Option<Vec2> {
    let delta = to - from;
    let dist = delta.length();
    if dist == 0.0 || !dist.is_finite() {
        return None;
    }
    Some(delta / dist)
}
