//! Read-only per-frame view for rendering and UI sinks

use glam::Vec3;
use serde::Serialize;

use super::state::{AsteroidKind, GameEvent, GamePhase, SimulationState};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AsteroidView {
    pub pos: Vec3,
    pub rotation_axis: Vec3,
    pub kind: AsteroidKind,
    /// Spin angle around `rotation_axis` (radians)
    pub spin_angle: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectileView {
    pub pos: Vec3,
    pub heading: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShipView {
    pub pos: Vec3,
    pub heading: f32,
    pub alive: bool,
}

/// Game-over overlay parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayView {
    pub explosion_progress: f32,
    pub background_dim_factor: f32,
    pub fade_active: bool,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub time: f32,
    pub phase: GamePhase,
    pub paused: bool,
    pub score: u64,
    pub lives: u32,
    pub ship: ShipView,
    /// Spawn order
    pub asteroids: Vec<AsteroidView>,
    /// Fire order
    pub projectiles: Vec<ProjectileView>,
    pub overlay: OverlayView,
    pub events: Vec<GameEvent>,
}

impl FrameSnapshot {
    pub fn capture(state: &SimulationState) -> Self {
        let spin_angle = state.time * std::f32::consts::PI / state.tuning.asteroid_spin_period;

        Self {
            time: state.time,
            phase: state.game_phase(),
            paused: state.paused,
            score: state.ship.score,
            lives: state.ship.lives,
            ship: ShipView {
                pos: state.ship.pos,
                heading: state.ship.heading,
                alive: state.ship.is_alive(),
            },
            asteroids: state
                .asteroids
                .iter()
                .map(|a| AsteroidView {
                    pos: a.pos,
                    rotation_axis: a.rotation_axis,
                    kind: a.kind,
                    spin_angle,
                })
                .collect(),
            projectiles: state
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    pos: p.pos,
                    heading: p.heading,
                })
                .collect(),
            overlay: OverlayView {
                explosion_progress: state.phase.explosion_progress,
                background_dim_factor: state.phase.background_dim,
                fade_active: state.phase.fade_active(state.time),
            },
            events: state.events.clone(),
        }
    }
}
