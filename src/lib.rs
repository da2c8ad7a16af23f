//! Asteroid Rush - A 3D asteroid defense arcade game core
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (pools, spawning, motion, collisions, phases)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input bindings and UI live in the host; they read
//! [`sim::FrameSnapshot`] each frame and feed [`sim::FrameInput`] back in.

pub mod sim;
pub mod tuning;

pub use tuning::{ProjectileModel, Tuning, TuningError};

use glam::Vec3;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Number of asteroid visual variants
    pub const NUM_ASTEROID_KINDS: u32 = 3;
    /// Depth at which asteroids appear
    pub const ASTEROID_SPAWN_Z: f32 = -70.0;
    /// Horizontal spawn half-width
    pub const ASTEROID_SPAWN_X_MAX: f32 = 70.0;
    /// Asteroid spin angle is t·π / this
    pub const ASTEROID_SPIN_PERIOD: f32 = 8.0;

    pub const MIN_ASTEROID_FRAMES_TO_ORIGIN: f32 = 300.0;
    pub const MAX_ASTEROID_FRAMES_TO_ORIGIN: f32 = 1000.0;

    /// Seconds between automatic spawns
    pub const ASTEROID_SPAWN_PERIOD: f32 = 0.5;
    /// Asteroids whose z exceeds this have passed the origin
    pub const ASTEROID_CULL_Z: f32 = 0.0;

    /// Heading limit (radians) in either direction
    pub const MAX_SHIP_TURN: f32 = 1.0;
    /// Turn step is MAX_SHIP_TURN / this (smaller number, faster turn)
    pub const SHIP_TURN_DIVISOR: f32 = 20.0;
    pub const SHIP_DISTANCE_FROM_ORIGIN: f32 = 5.0;
    pub const STARTING_LIVES: u32 = 3;

    /// Per-axis half-extent of the collision box
    pub const COLLISION_RADIUS: f32 = 2.0;
    pub const ASTEROID_REWARD: u64 = 10;

    /// Projectile step is firing position / this
    pub const PROJECTILE_VELOCITY_DIVISOR: f32 = 50.0;
    /// Units per tick for the heading-based projectile model
    pub const PROJECTILE_SPEED: f32 = SHIP_DISTANCE_FROM_ORIGIN / PROJECTILE_VELOCITY_DIVISOR;
    /// Projectiles farther than this (xz plane) from the origin are culled
    pub const PROJECTILE_MAX_DISTANCE: f32 = 100.0;
    /// Seconds between shots
    pub const FIRE_COOLDOWN: f32 = 0.75;

    /// Explosion runs over sin(elapsed / 2) for elapsed in [0, 2π]
    pub const EXPLOSION_DURATION: f32 = std::f32::consts::TAU;
    /// Background dim decrease per tick once the explosion passes its peak
    pub const BACKGROUND_DIM_STEP: f32 = 0.01;
    pub const BACKGROUND_DIM_FLOOR: f32 = 0.0;
}

/// Ship position for a heading on a circle of `radius` around the origin.
///
/// Heading 0 places the ship at `(0, 0, -radius)`, facing the incoming field.
#[inline]
pub fn ship_position_for_heading(radius: f32, heading: f32) -> Vec3 {
    let theta = std::f32::consts::FRAC_PI_2 + heading;
    Vec3::new(radius * theta.cos(), 0.0, -radius * theta.sin())
}

/// Unit direction in the xz plane that a ship with `heading` faces
#[inline]
pub fn heading_direction(heading: f32) -> Vec3 {
    ship_position_for_heading(1.0, heading)
}

/// Independent-axis box test: `|Δx| < r && |Δy| < r && |Δz| < r`
#[inline]
pub fn within_box(a: Vec3, b: Vec3, radius: f32) -> bool {
    let d = (a - b).abs();
    d.x < radius && d.y < radius && d.z < radius
}
