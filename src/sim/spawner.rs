//! Time-gated asteroid spawning

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::pool::EntityPool;
use super::state::{Asteroid, AsteroidKind};
use crate::tuning::Tuning;

/// Spawn clock and round-robin counter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Spawner {
    /// Host time of the last timed spawn
    pub last_spawn_time: f32,
    /// Asteroids spawned since the run started (drives kind rotation)
    pub total_spawned: u64,
}

impl Spawner {
    /// Spawn one asteroid if more than `spawn_period` has passed since the last timed spawn
    pub fn maybe_spawn<R: Rng>(
        &mut self,
        current_time: f32,
        asteroids: &mut EntityPool<Asteroid>,
        rng: &mut R,
        tuning: &Tuning,
    ) -> Option<usize> {
        if current_time - self.last_spawn_time > tuning.spawn_period {
            self.last_spawn_time = current_time;
            Some(self.spawn(asteroids, rng, tuning))
        } else {
            None
        }
    }

    /// Spawn one asteroid unconditionally, returning its index
    pub fn spawn<R: Rng>(&mut self, asteroids: &mut EntityPool<Asteroid>, rng: &mut R, tuning: &Tuning) -> usize {
        let x = rng.random_range(-tuning.spawn_x_max..=tuning.spawn_x_max);
        let pos = Vec3::new(x, 0.0, tuning.spawn_z);
        let frames_to_origin = rng.random_range(tuning.min_frames_to_origin..=tuning.max_frames_to_origin);
        let rotation_axis = Vec3::new(rng.random::<f32>(), rng.random::<f32>(), rng.random::<f32>());
        let kind = AsteroidKind::for_spawn_index(self.total_spawned);

        self.total_spawned += 1;
        let index = asteroids.spawn(Asteroid::new(pos, kind, frames_to_origin, rotation_axis));
        log::debug!(
            "Asteroid {} spawned at ({:.2}, {:.2}, {:.2}), {:.0} frames to origin",
            index,
            pos.x,
            pos.y,
            pos.z,
            frames_to_origin
        );
        index
    }
}
