//! Simulation settings
//!
//! Loaded once at construction, either built in code or read from a JSON file.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{SimError, SimResult};

/// Construction-time configuration for a juggling simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    /// Siteswap digits, e.g. "531"
    pub sequence: String,

    // === Hands ===
    /// Left and right hand positions (simulation units)
    pub hands: [[f32; 2]; 2],
    /// Hand rectangle size handed to the renderer
    pub hand_size: [f32; 2],

    // === Timing ===
    /// Seconds advanced per tick (one beat per second)
    pub tick_interval: f64,

    // === Physics ===
    /// Metres per simulation unit
    pub length_scale: f32,
    /// Gravitational acceleration (m/s²)
    pub gravity: f32,

    /// Reject digit strings that are not juggleable patterns
    pub validate_pattern: bool,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            // No sensible default pattern; must be supplied
            sequence: String::new(),

            hands: [LEFT_HAND, RIGHT_HAND],
            hand_size: HAND_SIZE,

            tick_interval: TICK_INTERVAL,

            length_scale: LENGTH_SCALE,
            gravity: GRAVITY_SI,

            validate_pattern: true,
        }
    }
}

impl SimSettings {
    /// Default settings for the given pattern
    pub fn with_sequence(sequence: impl Into<String>) -> Self {
        Self {
            sequence: sequence.into(),
            ..Self::default()
        }
    }

    /// Parse settings from a JSON document (missing fields take defaults)
    pub fn from_json(json: &str) -> SimResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check numeric fields and presence of a sequence
    pub fn validate(&self) -> SimResult<()> {
        if self.sequence.trim().is_empty() {
            return Err(SimError::Config("a throw sequence is required".into()));
        }
        if !(self.tick_interval.is_finite() && self.tick_interval > 0.0) {
            return Err(SimError::Config(format!(
                "tick interval must be positive, got {}",
                self.tick_interval
            )));
        }
        if !(self.length_scale.is_finite() && self.length_scale > 0.0) {
            return Err(SimError::Config(format!(
                "length scale must be positive, got {}",
                self.length_scale
            )));
        }
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(SimError::Config(format!(
                "gravity must be positive, got {}",
                self.gravity
            )));
        }
        if self.hands.iter().flatten().any(|c| !c.is_finite()) {
            return Err(SimError::Config("hand positions must be finite".into()));
        }
        Ok(())
    }

    /// Gravity in simulation units per beat²
    pub fn scaled_gravity(&self) -> f32 {
        self.gravity / self.length_scale
    }

    pub fn left_hand(&self) -> Vec2 {
        Vec2::from(self.hands[0])
    }

    pub fn right_hand(&self) -> Vec2 {
        Vec2::from(self.hands[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_need_sequence() {
        let settings = SimSettings::default();
        assert!(matches!(settings.validate(), Err(SimError::Config(_))));
        assert!(SimSettings::with_sequence("3").validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let settings = SimSettings::from_json(r#"{ "sequence": "531" }"#).unwrap();
        assert_eq!(settings.sequence, "531");
        assert_eq!(settings.tick_interval, TICK_INTERVAL);
        assert_eq!(settings.hands, [LEFT_HAND, RIGHT_HAND]);
        assert!(settings.validate_pattern);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        let err = SimSettings::from_json(r#"{ "sequence": "3", "tick_interval": 0.0 }"#);
        assert!(matches!(err, Err(SimError::Config(_))));

        let err = SimSettings::from_json(r#"{ "sequence": "3", "length_scale": -1.0 }"#);
        assert!(matches!(err, Err(SimError::Config(_))));

        let err = SimSettings::from_json("not json");
        assert!(matches!(err, Err(SimError::Json(_))));
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = SimSettings::with_sequence("441");
        settings.hands = [[0.0, 50.0], [300.0, 60.0]];
        let json = settings.to_json().unwrap();
        assert_eq!(SimSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_scaled_gravity() {
        let settings = SimSettings::with_sequence("3");
        assert!((settings.scaled_gravity() - 19.62).abs() < 1e-4);
    }
}
