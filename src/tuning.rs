//! Data-driven game balance
//!
//! Every number the simulation reads lives here. Defaults reproduce the
//! classic feel; `from_json` accepts partial overrides.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SetupError;

/// What happens to upward velocity when the jump key is released
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum JumpCut {
    /// Hard clamp: upward speed never exceeds `speed` after release
    Clamp { speed: f32 },
    /// Soft cut: if rising faster than `threshold`, add `boost` downward once
    Damp { threshold: f32, boost: f32 },
}

impl Default for JumpCut {
    fn default() -> Self {
        JumpCut::Clamp {
            speed: JUMP_CUT_SPEED,
        }
    }
}

impl JumpCut {
    /// Vertical velocity after the jump key is released
    pub fn apply(&self, vertical_velocity: f32) -> f32 {
        match *self {
            JumpCut::Clamp { speed } => {
                if vertical_velocity < -speed {
                    -speed
                } else {
                    vertical_velocity
                }
            }
            JumpCut::Damp { threshold, boost } => {
                if vertical_velocity < -threshold {
                    vertical_velocity + boost
                } else {
                    vertical_velocity
                }
            }
        }
    }
}

/// Width/height/top of one obstacle kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FootprintSpec {
    pub width: i32,
    pub height: i32,
    /// Fixed top edge; `None` rests the obstacle on the ground
    #[serde(default)]
    pub y: Option<i32>,
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub screen_size: i32,
    pub obstacle_speed: f32,
    pub spawn_interval: f32,
    pub spawn_x: i32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub jump_cut: JumpCut,
    pub player_x: i32,
    pub player_size: i32,
    pub collectible: FootprintSpec,
    pub hazard: FootprintSpec,
    /// RNG seed for obstacle kinds; `None` lets the caller pick one
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_size: SCREEN_SIZE,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_interval: SPAWN_INTERVAL,
            spawn_x: SPAWN_EDGE_X,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            jump_cut: JumpCut::default(),
            player_x: PLAYER_X,
            player_size: PLAYER_SIZE,
            collectible: FootprintSpec {
                width: COLLECTIBLE_SIZE.0,
                height: COLLECTIBLE_SIZE.1,
                y: Some(COLLECTIBLE_Y),
            },
            hazard: FootprintSpec {
                width: HAZARD_SIZE.0,
                height: HAZARD_SIZE.1,
                y: None,
            },
            seed: None,
        }
    }
}

impl Tuning {
    /// Parse overrides from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SetupError> {
        let tuning: Tuning = serde_json::from_str(json)
            .map_err(|e| SetupError::InvalidTuning(e.to_string()))?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> String {
        // Plain data with string keys, serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), SetupError> {
        let bad = |what: &str| Err(SetupError::InvalidTuning(what.to_string()));

        if self.screen_size <= 0 {
            return bad("screen_size must be positive");
        }
        if self.player_size <= 0 {
            return bad("player_size must be positive");
        }
        for (name, fp) in [("collectible", &self.collectible), ("hazard", &self.hazard)] {
            if fp.width <= 0 || fp.height <= 0 {
                return Err(SetupError::InvalidTuning(format!(
                    "{name} footprint must have positive size"
                )));
            }
        }
        if !(self.spawn_interval > 0.0) {
            return bad("spawn_interval must be positive");
        }
        if !(self.obstacle_speed >= 0.0) || !self.obstacle_speed.is_finite() {
            return bad("obstacle_speed must be finite and not negative");
        }
        if !self.gravity.is_finite() || !self.jump_velocity.is_finite() {
            return bad("gravity and jump_velocity must be finite");
        }
        Ok(())
    }
}
