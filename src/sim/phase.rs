//! Game phase state machine
//!
//! `Playing` → `Exploding` the first time phase evaluation sees zero lives,
//! then `Exploding` → `Faded` once the explosion interval is over and the
//! background has dimmed to its floor. `Faded` is terminal; restarting is a
//! full [`SimulationState::reset`](super::SimulationState::reset).

use serde::{Deserialize, Serialize};

use super::state::GamePhase;
use crate::tuning::Tuning;

/// Phase plus the timers driving the game-over overlay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseMachine {
    pub phase: GamePhase,
    /// Host time at which `Exploding` began
    pub entered_at: Option<f32>,
    /// Particle burst scale/opacity, 0 → 1 → 0
    pub explosion_progress: f32,
    /// 1.0 = full brightness
    pub background_dim: f32,
}

impl Default for PhaseMachine {
    fn default() -> Self {
        Self {
            phase: GamePhase::Playing,
            entered_at: None,
            explosion_progress: 0.0,
            background_dim: 1.0,
        }
    }
}

impl PhaseMachine {
    /// Spawning and asteroid motion only run while playing
    #[inline]
    pub fn world_active(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Seconds since `Exploding` began (0 while playing)
    pub fn elapsed(&self, current_time: f32) -> f32 {
        self.entered_at.map_or(0.0, |t| (current_time - t).max(0.0))
    }

    /// Fade overlay is drawn once the explosion has passed its peak
    pub fn fade_active(&self, current_time: f32) -> bool {
        self.phase == GamePhase::Faded
            || (self.phase == GamePhase::Exploding && self.elapsed(current_time) > std::f32::consts::PI)
    }

    /// Evaluate lives and advance the game-over timers by one tick.
    ///
    /// Returns the transition taken this tick, if any.
    pub fn evaluate(&mut self, lives: u32, current_time: f32, tuning: &Tuning) -> Option<(GamePhase, GamePhase)> {
        match self.phase {
            GamePhase::Playing => {
                if lives == 0 {
                    self.phase = GamePhase::Exploding;
                    self.entered_at = Some(current_time);
                    self.explosion_progress = 0.0;
                    log::info!("Ship destroyed at t={:.2}, exploding", current_time);
                    return Some((GamePhase::Playing, GamePhase::Exploding));
                }
                None
            }
            GamePhase::Exploding => {
                let elapsed = self.elapsed(current_time);
                self.explosion_progress = explosion_curve(elapsed, tuning.explosion_duration);
                if elapsed > std::f32::consts::PI {
                    self.dim_step(tuning);
                }

                if elapsed > tuning.explosion_duration && self.background_dim <= tuning.dim_floor {
                    self.phase = GamePhase::Faded;
                    self.explosion_progress = 0.0;
                    log::info!("Game over, faded at t={:.2}", current_time);
                    return Some((GamePhase::Exploding, GamePhase::Faded));
                }
                None
            }
            GamePhase::Faded => {
                self.dim_step(tuning);
                None
            }
        }
    }

    fn dim_step(&mut self, tuning: &Tuning) {
        self.background_dim = (self.background_dim - tuning.dim_step).max(tuning.dim_floor);
    }
}

/// `sin(elapsed / 2)` over `[0, duration]`, zero outside
pub fn explosion_curve(elapsed: f32, duration: f32) -> f32 {
    if (0.0..=duration).contains(&elapsed) {
        (elapsed / 2.0).sin().max(0.0)
    } else {
        0.0
    }
}
