//! Collision detection, resolution and culling
//!
//! Both detectors use an independent-axis box test (see [`crate::within_box`])
//! and resolve at most one collision per call. Scan order is spawn order, so
//! the oldest overlapping entity always wins a tie.

use super::pool::EntityPool;
use super::state::{Asteroid, Projectile, Ship};

/// A projectile/asteroid hit, with pre-removal indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectileHit {
    pub asteroid: usize,
    pub projectile: usize,
}

/// Resolve the first asteroid overlapping the ship.
///
/// Removes it, takes one life, and returns its index before removal.
pub fn check_ship_collisions(asteroids: &mut EntityPool<Asteroid>, ship: &mut Ship, radius: f32) -> Option<usize> {
    let ship_pos = ship.pos;
    let index = asteroids.position(|a| crate::within_box(a.pos, ship_pos, radius))?;

    asteroids.remove(index);
    ship.lives = ship.lives.saturating_sub(1);
    log::debug!("Ship hit by asteroid {}, {} lives left", index, ship.lives);
    Some(index)
}

/// Resolve the first (asteroid, projectile) pair that overlaps.
///
/// Asteroids are the outer loop. Removes both and awards `reward` points.
pub fn check_projectile_collisions(
    asteroids: &mut EntityPool<Asteroid>,
    projectiles: &mut EntityPool<Projectile>,
    ship: &mut Ship,
    radius: f32,
    reward: u64,
) -> Option<ProjectileHit> {
    let hit = asteroids.iter().enumerate().find_map(|(ai, asteroid)| {
        projectiles
            .position(|p| crate::within_box(asteroid.pos, p.pos, radius))
            .map(|pi| ProjectileHit {
                asteroid: ai,
                projectile: pi,
            })
    })?;

    asteroids.remove(hit.asteroid);
    projectiles.remove(hit.projectile);
    ship.score = ship.score.saturating_add(reward);
    log::debug!(
        "Projectile {} destroyed asteroid {}, score {}",
        hit.projectile,
        hit.asteroid,
        ship.score
    );
    Some(hit)
}

/// Drop asteroids whose depth has passed `cull_z`. Returns the number removed.
pub fn cull_asteroids(asteroids: &mut EntityPool<Asteroid>, cull_z: f32) -> usize {
    let culled = asteroids.retain(|a| a.pos.z <= cull_z);
    if culled > 0 {
        log::debug!("{} asteroid(s) culled past the origin", culled);
    }
    culled
}

/// Drop projectiles farther than `max_distance` from the origin in the xz plane
pub fn cull_projectiles(projectiles: &mut EntityPool<Projectile>, max_distance: f32) -> usize {
    let max_sq = max_distance * max_distance;
    let culled = projectiles.retain(|p| p.pos.x * p.pos.x + p.pos.z * p.pos.z <= max_sq);
    if culled > 0 {
        log::debug!("{} projectile(s) out of range", culled);
    }
    culled
}
