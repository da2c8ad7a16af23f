//! Frame-driven simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - Host-supplied clock only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod phase;
pub mod pool;
pub mod snapshot;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{
    ProjectileHit, check_projectile_collisions, check_ship_collisions, cull_asteroids,
    cull_projectiles,
};
pub use phase::PhaseMachine;
pub use pool::EntityPool;
pub use snapshot::{AsteroidView, FrameSnapshot, OverlayView, ProjectileView, ShipView};
pub use spawner::Spawner;
pub use state::{
    Asteroid, AsteroidKind, GameEvent, GamePhase, Projectile, Ship, SimulationState,
};
pub use tick::{FrameInput, tick};
