//! Simulation state and entity types
//!
//! Everything the frame step mutates lives in [`SimulationState`]; there is no
//! ambient state anywhere else in the crate.

use glam::Vec3;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::phase::PhaseMachine;
use super::pool::EntityPool;
use super::spawner::Spawner;
use crate::ship_position_for_heading;
use crate::tuning::Tuning;

/// Coarse game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Lives just hit zero; explosion and fade running
    Exploding,
    /// Terminal
    Faded,
}

/// Asteroid visual variant, assigned round-robin at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidKind {
    Coarse,
    Smooth,
    Mossy,
}

impl AsteroidKind {
    /// Variant for the `n`th spawned asteroid (0-indexed)
    pub fn for_spawn_index(n: u64) -> Self {
        match n % crate::consts::NUM_ASTEROID_KINDS as u64 {
            0 => AsteroidKind::Coarse,
            1 => AsteroidKind::Smooth,
            _ => AsteroidKind::Mossy,
        }
    }

    pub fn index(self) -> u32 {
        match self {
            AsteroidKind::Coarse => 0,
            AsteroidKind::Smooth => 1,
            AsteroidKind::Mossy => 2,
        }
    }
}

/// An asteroid falling toward the origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub initial_pos: Vec3,
    pub pos: Vec3,
    pub kind: AsteroidKind,
    /// Ticks until `pos` reaches the origin
    pub frames_to_origin: f32,
    /// Spin axis for rendering (not normalized)
    pub rotation_axis: Vec3,
}

impl Asteroid {
    pub fn new(initial_pos: Vec3, kind: AsteroidKind, frames_to_origin: f32, rotation_axis: Vec3) -> Self {
        debug_assert!(frames_to_origin > 0.0);
        Self {
            initial_pos,
            pos: initial_pos,
            kind,
            frames_to_origin,
            rotation_axis,
        }
    }

    /// Per-tick displacement (subtracted from `pos`)
    #[inline]
    pub fn step(&self) -> Vec3 {
        self.initial_pos / self.frames_to_origin
    }
}

/// A projectile fired from the ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub initial_pos: Vec3,
    pub pos: Vec3,
    /// Ship heading at fire time
    pub heading: f32,
    /// Per-tick displacement, fixed at fire time
    pub vel: Vec3,
}

/// The player's ship, parked on a circle around the origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    /// Radians, clamped to [-max_turn, max_turn]
    pub heading: f32,
    /// Derived from `heading` every tick
    pub pos: Vec3,
    pub lives: u32,
    pub score: u64,
    /// Seconds accumulated since the last shot
    pub fire_cooldown: f32,
}

impl Ship {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            heading: 0.0,
            pos: ship_position_for_heading(tuning.ship_radius, 0.0),
            lives: tuning.starting_lives,
            score: 0,
            // Ready to fire on the first frame
            fire_cooldown: tuning.fire_cooldown,
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }
}

/// Something that happened during a frame, for audio/FX sinks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    AsteroidSpawned { index: usize, pos: Vec3 },
    ProjectileFired { index: usize, heading: f32 },
    /// Ship collided with the asteroid at `index` (pre-removal)
    ShipHit { index: usize, lives_left: u32 },
    AsteroidDestroyed { asteroid: usize, projectile: usize, score: u64 },
    AsteroidsCulled { count: usize },
    ProjectilesCulled { count: usize },
    PhaseChanged { from: GamePhase, to: GamePhase },
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub asteroids: EntityPool<Asteroid>,
    pub projectiles: EntityPool<Projectile>,
    pub ship: Ship,
    pub spawner: Spawner,
    pub phase: PhaseMachine,
    pub paused: bool,
    /// Host time of the most recent frame (seconds)
    pub time: f32,
    pub frame_count: u64,
    /// Events raised by the most recent frame
    pub events: Vec<GameEvent>,
}

impl SimulationState {
    /// Create a new simulation with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ship: Ship::new(&tuning),
            tuning,
            asteroids: EntityPool::new(),
            projectiles: EntityPool::new(),
            spawner: Spawner::default(),
            phase: PhaseMachine::default(),
            paused: false,
            time: 0.0,
            frame_count: 0,
            events: Vec::new(),
        }
    }

    /// Full restart: empty pools, fresh ship and counters, RNG reseeded
    pub fn reset(&mut self) {
        log::info!("Resetting simulation (seed {})", self.seed);
        let tuning = std::mem::take(&mut self.tuning);
        *self = Self::with_tuning(self.seed, tuning);
    }

    #[inline]
    pub fn game_phase(&self) -> GamePhase {
        self.phase.phase
    }
}
