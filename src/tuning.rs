//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Missing JSON fields fall back
//! to the defaults in [`crate::consts`], so a tuning file only needs to name
//! what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// How projectile velocity is derived at fire time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectileModel {
    /// Step is the firing position divided by `projectile_velocity_divisor` (x and z only)
    #[default]
    PositionScaled,
    /// Step is the unit heading direction times `projectile_speed`
    Heading,
}

/// Tuning load/validation errors
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Value out of range
    #[error("Invalid tuning: {0}")]
    Invalid(String),
}

/// Gameplay balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Spawning ===
    pub spawn_period: f32,
    pub spawn_z: f32,
    pub spawn_x_max: f32,
    pub min_frames_to_origin: f32,
    pub max_frames_to_origin: f32,
    pub cull_z: f32,
    pub asteroid_spin_period: f32,

    // === Ship ===
    pub ship_radius: f32,
    pub max_turn: f32,
    pub turn_divisor: f32,
    pub starting_lives: u32,

    // === Combat ===
    pub collision_radius: f32,
    pub asteroid_reward: u64,
    pub fire_cooldown: f32,
    pub projectile_model: ProjectileModel,
    pub projectile_velocity_divisor: f32,
    pub projectile_speed: f32,
    pub projectile_max_distance: f32,

    // === Game over ===
    pub explosion_duration: f32,
    pub dim_step: f32,
    pub dim_floor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            spawn_period: ASTEROID_SPAWN_PERIOD,
            spawn_z: ASTEROID_SPAWN_Z,
            spawn_x_max: ASTEROID_SPAWN_X_MAX,
            min_frames_to_origin: MIN_ASTEROID_FRAMES_TO_ORIGIN,
            max_frames_to_origin: MAX_ASTEROID_FRAMES_TO_ORIGIN,
            cull_z: ASTEROID_CULL_Z,
            asteroid_spin_period: ASTEROID_SPIN_PERIOD,

            ship_radius: SHIP_DISTANCE_FROM_ORIGIN,
            max_turn: MAX_SHIP_TURN,
            turn_divisor: SHIP_TURN_DIVISOR,
            starting_lives: STARTING_LIVES,

            collision_radius: COLLISION_RADIUS,
            asteroid_reward: ASTEROID_REWARD,
            fire_cooldown: FIRE_COOLDOWN,
            projectile_model: ProjectileModel::PositionScaled,
            projectile_velocity_divisor: PROJECTILE_VELOCITY_DIVISOR,
            projectile_speed: PROJECTILE_SPEED,
            projectile_max_distance: PROJECTILE_MAX_DISTANCE,

            explosion_duration: EXPLOSION_DURATION,
            dim_step: BACKGROUND_DIM_STEP,
            dim_floor: BACKGROUND_DIM_FLOOR,
        }
    }
}

impl Tuning {
    /// Heading change per tick of held turn input
    #[inline]
    pub fn turn_step(&self) -> f32 {
        self.max_turn / self.turn_divisor
    }

    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate a JSON tuning file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load a tuning file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from_file(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Rejected tuning {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("spawn_period", self.spawn_period),
            ("spawn_x_max", self.spawn_x_max),
            ("min_frames_to_origin", self.min_frames_to_origin),
            ("asteroid_spin_period", self.asteroid_spin_period),
            ("ship_radius", self.ship_radius),
            ("max_turn", self.max_turn),
            ("turn_divisor", self.turn_divisor),
            ("collision_radius", self.collision_radius),
            ("fire_cooldown", self.fire_cooldown),
            ("projectile_velocity_divisor", self.projectile_velocity_divisor),
            ("projectile_speed", self.projectile_speed),
            ("projectile_max_distance", self.projectile_max_distance),
            ("explosion_duration", self.explosion_duration),
            ("dim_step", self.dim_step),
        ];
        for (name, value) in positive {
            // NaN fails this too
            if !(value > 0.0) {
                return Err(TuningError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if self.min_frames_to_origin > self.max_frames_to_origin {
            return Err(TuningError::Invalid(format!(
                "min_frames_to_origin ({}) exceeds max_frames_to_origin ({})",
                self.min_frames_to_origin, self.max_frames_to_origin
            )));
        }

        if !(0.0..=1.0).contains(&self.dim_floor) {
            return Err(TuningError::Invalid(format!(
                "dim_floor must be within [0, 1], got {}",
                self.dim_floor
            )));
        }

        Ok(())
    }
}
