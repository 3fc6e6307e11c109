//! Data-driven game balance
//!
//! Every knob defaults to the value in [`crate::consts`]. A partial JSON
//! document only overrides the fields it names.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::persistence::KeyValueStore;

/// Configuration load failure
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("tuning JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(String),
}

/// Physics, pipe and player parameters for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub jump_power: f32,
    pub pipe_speed: f32,
    pub pipe_spawn_interval: u64,
    pub pipe_gap: f32,
    pub pipe_width: f32,
    pub pipe_min_height: f32,
    pub player_start: Vec2,
    pub player_size: Vec2,
    pub trail_interval: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_power: JUMP_POWER,
            pipe_speed: PIPE_SPEED,
            pipe_spawn_interval: PIPE_SPAWN_INTERVAL,
            pipe_gap: PIPE_GAP,
            pipe_width: PIPE_WIDTH,
            pipe_min_height: PIPE_MIN_HEIGHT,
            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            trail_interval: TRAIL_INTERVAL,
        }
    }
}

impl Tuning {
    /// Storage key (LocalStorage on web)
    pub const STORAGE_KEY: &'static str = "flappyKiroTuning";

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject values that would break the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |msg: &str| Err(TuningError::Invalid(msg.to_string()));

        if !(self.gravity > 0.0) {
            return invalid("gravity must be positive");
        }
        if !(self.jump_power < 0.0) {
            return invalid("jump_power must be negative (upward)");
        }
        if !(self.pipe_speed > 0.0) {
            return invalid("pipe_speed must be positive");
        }
        if self.pipe_spawn_interval == 0 || self.trail_interval == 0 {
            return invalid("intervals must be at least one tick");
        }
        if !(self.pipe_gap > 0.0) || !(self.pipe_width > 0.0) {
            return invalid("pipe_gap and pipe_width must be positive");
        }
        if !(self.pipe_min_height >= 0.0) {
            return invalid("pipe_min_height must not be negative");
        }
        if !(self.player_size.x > 0.0 && self.player_size.y > 0.0) {
            return invalid("player_size must be positive");
        }
        if !self.player_start.is_finite() {
            return invalid("player_start must be finite");
        }
        Ok(())
    }

    /// Load from a key/value store, falling back to defaults
    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(Self::STORAGE_KEY) {
            Ok(Some(json)) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning overrides");
                    tuning
                }
                Err(e) => {
                    log::warn!("Ignoring stored tuning: {}", e);
                    Self::default()
                }
            },
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("Tuning unavailable ({}), using defaults", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.3, "pipe_gap": 200.0 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.3);
        assert_eq!(tuning.pipe_gap, 200.0);
        assert_eq!(tuning.pipe_speed, PIPE_SPEED);
        assert_eq!(tuning.player_start, Vec2::new(100.0, 300.0));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Tuning::from_json(r#"{ "jump_power": 2.0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "pipe_spawn_interval": 0 }"#),
            Err(TuningError::Invalid(_))
        ));
        assert!(matches!(Tuning::from_json("not json"), Err(TuningError::Parse(_))));
    }

    #[test]
    fn test_load_falls_back_on_garbage() {
        let mut store = MemoryStore::new();
        store.set(Tuning::STORAGE_KEY, "{{{").unwrap();
        assert_eq!(Tuning::load(&store), Tuning::default());

        store.set(Tuning::STORAGE_KEY, r#"{ "pipe_speed": 2.5 }"#).unwrap();
        assert_eq!(Tuning::load(&store).pipe_speed, 2.5);
    }
}
