//! Keyboard bindings
//!
//! Directions are held state; fire and restart are discrete presses.

use glam::Vec2;

use crate::sim::{Directions, TickInput};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    W,
    A,
    S,
    D,
    Space,
    R,
}

/// Key state for one frame
#[derive(Debug, Clone, Default)]
pub struct InputFrame {
    /// Keys down at the start of the frame
    pub held: Vec<Key>,
    /// Keys that went down during the frame
    pub pressed: Vec<Key>,
    /// Pointer position in screen space
    pub pointer: Vec2,
}

impl InputFrame {
    pub fn hold(&mut self, key: Key) {
        if !self.held.contains(&key) {
            self.held.push(key);
        }
    }

    pub fn press(&mut self, key: Key) {
        if !self.pressed.contains(&key) {
            self.pressed.push(key);
        }
    }
}

/// Which keys drive which action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub up: [Key; 2],
    pub down: [Key; 2],
    pub left: [Key; 2],
    pub right: [Key; 2],
    pub fire: Key,
    pub restart: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up: [Key::ArrowUp, Key::W],
            down: [Key::ArrowDown, Key::S],
            left: [Key::ArrowLeft, Key::A],
            right: [Key::ArrowRight, Key::D],
            fire: Key::Space,
            restart: Key::R,
        }
    }
}

impl KeyBindings {
    pub fn to_tick_input(&self, frame: &InputFrame) -> TickInput {
        let held = |keys: &[Key; 2]| keys.iter().any(|k| frame.held.contains(k));
        TickInput {
            directions: Directions {
                up: held(&self.up),
                down: held(&self.down),
                left: held(&self.left),
                right: held(&self.right),
            },
            fire: frame.pressed.contains(&self.fire),
            target: frame.pointer,
            restart: frame.pressed.contains(&self.restart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_layouts_move() {
        let bindings = KeyBindings::default();
        let mut frame = InputFrame::default();
        frame.hold(Key::W);
        frame.hold(Key::ArrowRight);
        let input = bindings.to_tick_input(&frame);
        assert!(input.directions.up);
        assert!(input.directions.right);
        assert!(!input.directions.down);
        assert!(!input.directions.left);
    }

    #[test]
    fn test_held_fire_key_does_not_shoot() {
        let bindings = KeyBindings::default();
        let mut frame = InputFrame::default();
        frame.hold(Key::Space);
        frame.hold(Key::R);
        let input = bindings.to_tick_input(&frame);
        assert!(!input.fire);
        assert!(!input.restart);
    }

    #[test]
    fn test_presses_and_pointer() {
        let bindings = KeyBindings::default();
        let mut frame = InputFrame {
            pointer: Vec2::new(120.0, 40.0),
            ..Default::default()
        };
        frame.press(Key::Space);
        frame.press(Key::Space);
        assert_eq!(frame.pressed.len(), 1);
        let input = bindings.to_tick_input(&frame);
        assert!(input.fire);
        assert!(!input.restart);
        assert_eq!(input.target, Vec2::new(120.0, 40.0));
    }
}
