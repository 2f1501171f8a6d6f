//! Platform input layer
//!
//! Turns device-level key state into simulation input:
//! - `input`: key bindings and per-frame key/pointer state
//! - `demo`: scripted pilot that plays from the rendered scene

pub mod demo;
pub mod input;

pub use demo::DemoPilot;
pub use input::{InputFrame, Key, KeyBindings};
