//! Runner settings and preferences
//!
//! Stored as a JSON file. These control how a session is driven, never the
//! game rules themselves (the one exception is the opt-in fire-rate limit).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::sim::SimConfig;
use crate::sim::config::trigger_due;

/// Who provides input to the headless runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PilotMode {
    /// Scripted pilot that aims, dodges and restarts
    #[default]
    Demo,
    /// No input at all; the player stands still until overrun
    Idle,
}

impl PilotMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PilotMode::Demo => "Demo",
            PilotMode::Idle => "Idle",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "demo" | "auto" => Some(PilotMode::Demo),
            "idle" | "none" => Some(PilotMode::Idle),
            _ => None,
        }
    }
}

/// Runner settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Input source
    pub pilot: PilotMode,

    // === Pacing ===
    /// Sleep between ticks to hold 60 ticks per second
    pub realtime: bool,
    /// Sessions to play before stopping (restarts allowed = max_runs - 1)
    pub max_runs: u32,

    // === Logging ===
    /// Ticks between HUD log lines (0 = off)
    pub hud_log_interval: u64,

    // === Rules ===
    /// Make the fire timer gate shots
    pub enforce_fire_rate: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pilot: PilotMode::Demo,

            realtime: false,
            max_runs: 3,

            hud_log_interval: 600,

            enforce_fire_rate: false,
        }
    }
}

impl Settings {
    /// Simulation rules with these settings applied
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            enforce_fire_rate: self.enforce_fire_rate,
            ..SimConfig::default()
        }
    }

    /// Whether a HUD line is due after `frame` ticks
    pub fn hud_due(&self, frame: u64) -> bool {
        trigger_due(frame, self.hud_log_interval)
    }

    /// Load settings from a JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = serde_json::from_str(&json)
            .with_context(|| format!("invalid settings file {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize settings")?;
        fs::write(path, json)
            .with_context(|| format!("failed to write settings to {}", path.display()))?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pilot_mode_from_str() {
        assert_eq!(PilotMode::from_str("DEMO"), Some(PilotMode::Demo));
        assert_eq!(PilotMode::from_str("idle"), Some(PilotMode::Idle));
        assert_eq!(PilotMode::from_str("fast"), None);
        assert_eq!(PilotMode::Idle.as_str(), "Idle");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = Settings {
            pilot: PilotMode::Idle,
            max_runs: 7,
            enforce_fire_rate: true,
            ..Settings::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "pilot": "idle" }"#).unwrap();
        let settings = Settings::load(&path).unwrap();
        assert_eq!(settings.pilot, PilotMode::Idle);
        assert_eq!(settings.max_runs, Settings::default().max_runs);
    }

    #[test]
    fn test_load_errors_name_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        let err = Settings::load(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("nope.json"));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        let err = Settings::load(&broken).unwrap_err();
        assert!(format!("{err}").contains("invalid settings file"));
    }

    #[test]
    fn test_sim_config_only_touches_fire_rate() {
        let settings = Settings {
            enforce_fire_rate: true,
            ..Settings::default()
        };
        let config = settings.sim_config();
        assert!(config.enforce_fire_rate);
        assert_eq!(
            SimConfig {
                enforce_fire_rate: false,
                ..config
            },
            SimConfig::default()
        );
    }

    #[test]
    fn test_hud_due() {
        let mut settings = Settings::default();
        settings.hud_log_interval = 60;
        assert!(settings.hud_due(120));
        assert!(!settings.hud_due(121));
        settings.hud_log_interval = 0;
        assert!(!settings.hud_due(120));
    }
}
