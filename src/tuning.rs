//! Data-driven game balance
//!
//! Every gameplay constant lives here so a host can ship a JSON override
//! without rebuilding. Missing fields fall back to the values in
//! [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised when a tuning document is unusable.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be greater than zero (got {value:.2})")]
    NotPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative (got {value:.2})")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be finite")]
    NotFinite { field: &'static str },
    #[error("jump impulse must point upward (negative), got {value:.2}")]
    JumpImpulse { value: f32 },
    #[error("obstacle height range invalid (min {min:.2} > max {max:.2})")]
    HeightRange { min: f32, max: f32 },
    #[error("spawn interval {interval:.2} is below its floor {floor:.2}")]
    IntervalBelowFloor { interval: f32, floor: f32 },
    #[error("hitbox insets ({total:.2}) swallow the runner width {width:.2}")]
    InsetsTooWide { total: f32, width: f32 },
    #[error("hitbox top inset {inset:.2} swallows the runner height {height:.2}")]
    InsetsTooTall { inset: f32, height: f32 },
}

/// Balance parameters for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    #[serde(default = "Tuning::default_world_width")]
    pub world_width: f32,
    #[serde(default = "Tuning::default_tick_ms")]
    pub tick_ms: f32,

    #[serde(default = "Tuning::default_runner_x")]
    pub runner_x: f32,
    #[serde(default = "Tuning::default_runner_width")]
    pub runner_width: f32,
    #[serde(default = "Tuning::default_runner_height")]
    pub runner_height: f32,

    #[serde(default = "Tuning::default_ground_baseline")]
    pub ground_baseline: f32,
    #[serde(default = "Tuning::default_ground_surface_offset")]
    pub ground_surface_offset: f32,

    #[serde(default = "Tuning::default_gravity")]
    pub gravity: f32,
    #[serde(default = "Tuning::default_jump_impulse")]
    pub jump_impulse: f32,

    #[serde(default = "Tuning::default_initial_speed")]
    pub initial_speed: f32,
    #[serde(default = "Tuning::default_speed_increment")]
    pub speed_increment: f32,

    #[serde(default = "Tuning::default_spawn_interval_ms")]
    pub spawn_interval_ms: f32,
    #[serde(default = "Tuning::default_spawn_interval_decay_ms")]
    pub spawn_interval_decay_ms: f32,
    #[serde(default = "Tuning::default_spawn_interval_floor_ms")]
    pub spawn_interval_floor_ms: f32,

    #[serde(default = "Tuning::default_obstacle_width")]
    pub obstacle_width: f32,
    #[serde(default = "Tuning::default_obstacle_min_height")]
    pub obstacle_min_height: f32,
    #[serde(default = "Tuning::default_obstacle_max_height")]
    pub obstacle_max_height: f32,

    #[serde(default = "Tuning::default_inset_left")]
    pub hitbox_inset_left: f32,
    #[serde(default = "Tuning::default_inset_right")]
    pub hitbox_inset_right: f32,
    #[serde(default = "Tuning::default_inset_top")]
    pub hitbox_inset_top: f32,
}

impl Tuning {
    const fn default_world_width() -> f32 {
        WORLD_WIDTH
    }
    const fn default_tick_ms() -> f32 {
        TICK_MS
    }
    const fn default_runner_x() -> f32 {
        RUNNER_X
    }
    const fn default_runner_width() -> f32 {
        RUNNER_WIDTH
    }
    const fn default_runner_height() -> f32 {
        RUNNER_HEIGHT
    }
    const fn default_ground_baseline() -> f32 {
        GROUND_BASELINE
    }
    const fn default_ground_surface_offset() -> f32 {
        GROUND_SURFACE_OFFSET
    }
    const fn default_gravity() -> f32 {
        GRAVITY
    }
    const fn default_jump_impulse() -> f32 {
        JUMP_IMPULSE
    }
    const fn default_initial_speed() -> f32 {
        INITIAL_SPEED
    }
    const fn default_speed_increment() -> f32 {
        SPEED_INCREMENT
    }
    const fn default_spawn_interval_ms() -> f32 {
        SPAWN_INTERVAL_MS
    }
    const fn default_spawn_interval_decay_ms() -> f32 {
        SPAWN_INTERVAL_DECAY_MS
    }
    const fn default_spawn_interval_floor_ms() -> f32 {
        SPAWN_INTERVAL_FLOOR_MS
    }
    const fn default_obstacle_width() -> f32 {
        OBSTACLE_WIDTH
    }
    const fn default_obstacle_min_height() -> f32 {
        OBSTACLE_MIN_HEIGHT
    }
    const fn default_obstacle_max_height() -> f32 {
        OBSTACLE_MAX_HEIGHT
    }
    const fn default_inset_left() -> f32 {
        HITBOX_INSET_LEFT
    }
    const fn default_inset_right() -> f32 {
        HITBOX_INSET_RIGHT
    }
    const fn default_inset_top() -> f32 {
        HITBOX_INSET_TOP
    }

    /// Parse a (possibly partial) JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Surface obstacles stand on (their bottom edge)
    #[inline]
    pub fn ground_surface(&self) -> f32 {
        self.ground_baseline + self.ground_surface_offset
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let all = [
            ("world_width", self.world_width),
            ("tick_ms", self.tick_ms),
            ("runner_x", self.runner_x),
            ("runner_width", self.runner_width),
            ("runner_height", self.runner_height),
            ("ground_baseline", self.ground_baseline),
            ("ground_surface_offset", self.ground_surface_offset),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("initial_speed", self.initial_speed),
            ("speed_increment", self.speed_increment),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("spawn_interval_decay_ms", self.spawn_interval_decay_ms),
            ("spawn_interval_floor_ms", self.spawn_interval_floor_ms),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_min_height", self.obstacle_min_height),
            ("obstacle_max_height", self.obstacle_max_height),
            ("hitbox_inset_left", self.hitbox_inset_left),
            ("hitbox_inset_right", self.hitbox_inset_right),
            ("hitbox_inset_top", self.hitbox_inset_top),
        ];
        if let Some(&(field, _)) = all.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TuningError::NotFinite { field });
        }

        let positive = [
            ("world_width", self.world_width),
            ("tick_ms", self.tick_ms),
            ("runner_width", self.runner_width),
            ("runner_height", self.runner_height),
            ("gravity", self.gravity),
            ("initial_speed", self.initial_speed),
            ("spawn_interval_floor_ms", self.spawn_interval_floor_ms),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_min_height", self.obstacle_min_height),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("runner_x", self.runner_x),
            ("ground_surface_offset", self.ground_surface_offset),
            ("speed_increment", self.speed_increment),
            ("spawn_interval_decay_ms", self.spawn_interval_decay_ms),
            ("hitbox_inset_left", self.hitbox_inset_left),
            ("hitbox_inset_right", self.hitbox_inset_right),
            ("hitbox_inset_top", self.hitbox_inset_top),
        ];
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(TuningError::Negative { field, value });
            }
        }

        if self.jump_impulse >= 0.0 {
            return Err(TuningError::JumpImpulse {
                value: self.jump_impulse,
            });
        }
        if self.obstacle_min_height > self.obstacle_max_height {
            return Err(TuningError::HeightRange {
                min: self.obstacle_min_height,
                max: self.obstacle_max_height,
            });
        }
        if self.spawn_interval_ms < self.spawn_interval_floor_ms {
            return Err(TuningError::IntervalBelowFloor {
                interval: self.spawn_interval_ms,
                floor: self.spawn_interval_floor_ms,
            });
        }
        let total = self.hitbox_inset_left + self.hitbox_inset_right;
        if total >= self.runner_width {
            return Err(TuningError::InsetsTooWide {
                total,
                width: self.runner_width,
            });
        }
        if self.hitbox_inset_top >= self.runner_height {
            return Err(TuningError::InsetsTooTall {
                inset: self.hitbox_inset_top,
                height: self.runner_height,
            });
        }
        Ok(())
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            tick_ms: TICK_MS,
            runner_x: RUNNER_X,
            runner_width: RUNNER_WIDTH,
            runner_height: RUNNER_HEIGHT,
            ground_baseline: GROUND_BASELINE,
            ground_surface_offset: GROUND_SURFACE_OFFSET,
            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            initial_speed: INITIAL_SPEED,
            speed_increment: SPEED_INCREMENT,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            spawn_interval_decay_ms: SPAWN_INTERVAL_DECAY_MS,
            spawn_interval_floor_ms: SPAWN_INTERVAL_FLOOR_MS,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_min_height: OBSTACLE_MIN_HEIGHT,
            obstacle_max_height: OBSTACLE_MAX_HEIGHT,
            hitbox_inset_left: HITBOX_INSET_LEFT,
            hitbox_inset_right: HITBOX_INSET_RIGHT,
            hitbox_inset_top: HITBOX_INSET_TOP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 2.0, "initial_speed": 8 }"#).unwrap();
        assert_eq!(tuning.gravity, 2.0);
        assert_eq!(tuning.initial_speed, 8.0);
        assert_eq!(tuning.jump_impulse, JUMP_IMPULSE);
        assert_eq!(tuning.ground_surface(), GROUND_BASELINE + GROUND_SURFACE_OFFSET);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Tuning::from_json("{}").unwrap(), Tuning::default());
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            Tuning::from_json("{ gravity: }"),
            Err(TuningError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_inverted_height_range() {
        let err = Tuning::from_json(r#"{ "obstacle_min_height": 90 }"#).unwrap_err();
        assert!(matches!(err, TuningError::HeightRange { .. }));
    }

    #[test]
    fn test_rejects_downward_jump() {
        let tuning = Tuning {
            jump_impulse: 5.0,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::JumpImpulse { .. })
        ));
    }

    #[test]
    fn test_rejects_interval_below_floor() {
        let tuning = Tuning {
            spawn_interval_ms: 500.0,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::IntervalBelowFloor { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_gravity() {
        let tuning = Tuning {
            gravity: 0.0,
            ..Tuning::default()
        };
        let err = tuning.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "gravity must be greater than zero (got 0.00)"
        );
    }

    #[test]
    fn test_rejects_nan() {
        let tuning = Tuning {
            tick_ms: f32::NAN,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::NotFinite { field: "tick_ms" })
        ));
    }

    #[test]
    fn test_rejects_inset_taller_than_runner() {
        let tuning = Tuning {
            hitbox_inset_top: 100.0,
            ..Tuning::default()
        };
        assert!(matches!(
            tuning.validate(),
            Err(TuningError::InsetsTooTall { .. })
        ));

        let exact = Tuning {
            hitbox_inset_top: RUNNER_HEIGHT,
            ..Tuning::default()
        };
        assert!(exact.validate().is_err());
    }
}
