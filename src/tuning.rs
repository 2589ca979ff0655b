//! Data-driven match tuning
//!
//! Geometry and speed parameters, loadable from a JSON file so a table
//! can be reshaped without recompiling. Defaults reproduce the classic
//! table. Opponent behavior stays in [`crate::consts`]: difficulty is
//! not configurable.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Failure loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning: {0}")]
    Invalid(&'static str),
}

/// Match geometry and speeds
///
/// Missing fields fall back to their defaults, so a tuning file only
/// needs the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub playfield_width: f32,
    pub playfield_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    /// Opponent paddle base speed cap
    pub paddle_speed: f32,
    pub ball_radius: f32,
    /// Serve speed and the base for spin computation
    pub ball_speed: f32,
    /// First score to reach this wins
    pub win_score: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            paddle_speed: PADDLE_SPEED,
            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            win_score: WIN_SCORE,
        }
    }
}

impl Tuning {
    /// Load and validate a tuning file
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let json = fs::read_to_string(path)?;
        let tuning: Tuning = serde_json::from_str(&json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning file, falling back to defaults on any failure
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(err) => {
                log::warn!("Using default tuning: {err}");
                Self::default()
            }
        }
    }

    /// Write the tuning as pretty JSON (template for hand editing)
    pub fn save(&self, path: &Path) -> Result<(), TuningError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    fn validate(&self) -> Result<(), TuningError> {
        if self.playfield_width <= 0.0 || self.playfield_height <= 0.0 {
            return Err(TuningError::Invalid("playfield dimensions must be positive"));
        }
        if self.paddle_height <= 0.0 || self.paddle_width <= 0.0 {
            return Err(TuningError::Invalid("paddle dimensions must be positive"));
        }
        if self.ball_radius <= 0.0 || self.ball_speed <= 0.0 {
            return Err(TuningError::Invalid("ball radius and speed must be positive"));
        }
        if self.win_score == 0 {
            return Err(TuningError::Invalid("win score must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"win_score": 5}"#).unwrap();
        assert_eq!(tuning.win_score, 5);
        assert_eq!(tuning.ball_speed, BALL_SPEED);
        assert_eq!(tuning.playfield_width, PLAYFIELD_WIDTH);
    }

    #[test]
    fn test_invalid_rejected() {
        let tuning = Tuning {
            paddle_height: 0.0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::Invalid(_))));

        let tuning = Tuning {
            win_score: 0,
            ..Default::default()
        };
        assert!(matches!(tuning.validate(), Err(TuningError::Invalid(_))));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load_or_default(Some(Path::new("/nonexistent/tuning.json")));
        assert_eq!(tuning, Tuning::default());
    }
}
