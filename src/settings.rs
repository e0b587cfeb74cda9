//! Per-player settings: a flat struct persisted as part of the profile.
//!
//! Audio and graphics fields are carried as data for the presentation layer;
//! the simulation only reads the physics overrides via [`GameSettings::tuning`].

use crate::core::{constants, PhysicsTuning};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphicsQuality {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Id,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    // Audio
    pub sound_enabled: bool,
    pub sound_volume: u8,

    // Graphics
    pub graphics_quality: GraphicsQuality,
    pub show_fps: bool,

    // Gameplay
    pub auto_save: bool,
    pub notifications: bool,
    pub language: Language,

    // Physics overrides
    pub gravity: f64,
    pub flap_force: f64,
    pub pipe_speed: f64,

    // Privacy
    pub show_on_leaderboard: bool,
    pub allow_friend_requests: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            sound_volume: 70,
            graphics_quality: GraphicsQuality::High,
            show_fps: false,
            auto_save: true,
            notifications: true,
            language: Language::En,
            gravity: constants::GRAVITY,
            flap_force: constants::FLAP_FORCE,
            pipe_speed: constants::PIPE_SPEED,
            show_on_leaderboard: true,
            allow_friend_requests: true,
        }
    }
}

impl GameSettings {
    /// Physics tuning handed to a new session.
    pub fn tuning(&self) -> PhysicsTuning {
        PhysicsTuning {
            gravity: self.gravity,
            flap_force: self.flap_force,
            pipe_speed: self.pipe_speed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_core_constants() {
        let settings = GameSettings::default();
        let tuning = settings.tuning();
        assert_eq!(tuning, PhysicsTuning::default());
        assert!(settings.show_on_leaderboard);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: GameSettings =
            serde_json::from_str(r#"{"sound_volume": 30, "show_on_leaderboard": false}"#).unwrap();
        assert_eq!(settings.sound_volume, 30);
        assert!(!settings.show_on_leaderboard);
        assert!((settings.gravity - constants::GRAVITY).abs() < f64::EPSILON);
        assert_eq!(settings.graphics_quality, GraphicsQuality::High);
    }

    #[test]
    fn test_round_trip() {
        let mut settings = GameSettings::default();
        settings.pipe_speed = 4.5;
        settings.language = Language::Id;
        let json = serde_json::to_string(&settings).unwrap();
        let back: GameSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
