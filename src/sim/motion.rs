//! Motion integration
//!
//! Asteroids decay linearly toward the origin and keep going past it; culling
//! (not arrival) ends their life. Projectiles move at the velocity fixed when
//! they were fired. The ship never integrates velocity: its position is a pure
//! function of heading.

use glam::Vec3;

use super::pool::EntityPool;
use super::state::{Asteroid, Projectile, Ship};
use crate::tuning::{ProjectileModel, Tuning};
use crate::{heading_direction, ship_position_for_heading};

/// Advance every asteroid one tick: `pos -= initial_pos / frames_to_origin`
pub fn advance_asteroids(asteroids: &mut EntityPool<Asteroid>) {
    for asteroid in asteroids {
        let step = asteroid.step();
        asteroid.pos -= step;
    }
}

/// Advance every projectile one tick along its fixed velocity
pub fn advance_projectiles(projectiles: &mut EntityPool<Projectile>) {
    for projectile in projectiles {
        projectile.pos += projectile.vel;
    }
}

/// Per-tick projectile velocity for a shot fired from `origin` at `heading`
pub fn projectile_velocity(origin: Vec3, heading: f32, tuning: &Tuning) -> Vec3 {
    match tuning.projectile_model {
        // Scales with the firing position; y stays put
        ProjectileModel::PositionScaled => Vec3::new(
            origin.x / tuning.projectile_velocity_divisor,
            0.0,
            origin.z / tuning.projectile_velocity_divisor,
        ),
        ProjectileModel::Heading => heading_direction(heading) * tuning.projectile_speed,
    }
}

/// Apply held turn input, clamped to `[-max_turn, max_turn]`.
///
/// Ignored once the ship has no lives left.
pub fn apply_turn(ship: &mut Ship, turn_left: bool, turn_right: bool, tuning: &Tuning) {
    if !ship.is_alive() {
        return;
    }

    let step = tuning.turn_step();
    if turn_left && ship.heading < tuning.max_turn {
        ship.heading += step;
    }
    if turn_right && ship.heading > -tuning.max_turn {
        ship.heading -= step;
    }
    ship.heading = ship.heading.clamp(-tuning.max_turn, tuning.max_turn);
}

/// Recompute ship position from heading
pub fn update_ship_position(ship: &mut Ship, tuning: &Tuning) {
    ship.pos = ship_position_for_heading(tuning.ship_radius, ship.heading);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::AsteroidKind;
    use proptest::prelude::*;

    fn single_asteroid(pos: Vec3, frames: f32) -> EntityPool<Asteroid> {
        let mut pool = EntityPool::new();
        pool.spawn(Asteroid::new(pos, AsteroidKind::Coarse, frames, Vec3::ONE));
        pool
    }

    #[test]
    fn test_asteroid_reaches_origin_after_frames_to_origin() {
        let mut pool = single_asteroid(Vec3::new(10.0, 0.0, -70.0), 350.0);
        for _ in 0..350 {
            advance_asteroids(&mut pool);
        }
        let pos = pool.get(0).expect("asteroid").pos;
        assert!(pos.abs().max_element() < 1e-2, "expected origin, got {pos:?}");

        advance_asteroids(&mut pool);
        let pos = pool.get(0).expect("asteroid").pos;
        assert!(pos.z > 0.0);
        assert!(pos.x < 0.0);
    }

    #[test]
    fn test_asteroid_depth_is_monotonic() {
        let mut pool = single_asteroid(Vec3::new(-30.0, 0.0, -70.0), 300.0);
        let mut last_z = pool.get(0).expect("asteroid").pos.z;
        for _ in 0..400 {
            advance_asteroids(&mut pool);
            let z = pool.get(0).expect("asteroid").pos.z;
            assert!(z > last_z);
            last_z = z;
        }
    }

    #[test]
    fn test_position_scaled_projectile_velocity() {
        let tuning = Tuning::default();
        let vel = projectile_velocity(Vec3::new(2.0, 1.0, -5.0), 0.3, &tuning);
        assert_eq!(vel, Vec3::new(2.0 / 50.0, 0.0, -5.0 / 50.0));
    }

    #[test]
    fn test_heading_projectile_velocity_is_unit_scaled() {
        let tuning = Tuning {
            projectile_model: ProjectileModel::Heading,
            projectile_speed: 0.5,
            ..Tuning::default()
        };
        let vel = projectile_velocity(Vec3::new(100.0, 0.0, 0.0), 0.0, &tuning);
        assert!((vel.length() - 0.5).abs() < 1e-5);
        // Heading 0 faces -z
        assert!(vel.z < 0.0);
        assert!(vel.x.abs() < 1e-5);
    }

    #[test]
    fn test_projectile_keeps_height() {
        let tuning = Tuning::default();
        let origin = Vec3::new(0.0, 0.7, -5.0);
        let mut pool = EntityPool::new();
        pool.spawn(Projectile {
            initial_pos: origin,
            pos: origin,
            heading: 0.0,
            vel: projectile_velocity(origin, 0.0, &tuning),
        });
        for _ in 0..10 {
            advance_projectiles(&mut pool);
        }
        let p = pool.get(0).expect("projectile");
        assert_eq!(p.pos.y, 0.7);
        assert!((p.pos.z - (-5.0 - 10.0 * 0.1)).abs() < 1e-4);
    }

    #[test]
    fn test_turn_ignored_when_dead() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(&tuning);
        ship.lives = 0;
        apply_turn(&mut ship, true, false, &tuning);
        assert_eq!(ship.heading, 0.0);
    }

    #[test]
    fn test_opposing_turns_cancel() {
        let tuning = Tuning::default();
        let mut ship = Ship::new(&tuning);
        apply_turn(&mut ship, true, true, &tuning);
        assert!(ship.heading.abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn prop_heading_saturates(ticks in 0usize..200, left in any::<bool>()) {
            let tuning = Tuning::default();
            let mut ship = Ship::new(&tuning);
            for _ in 0..ticks {
                apply_turn(&mut ship, left, !left, &tuning);
                update_ship_position(&mut ship, &tuning);
                prop_assert!(ship.heading.abs() <= tuning.max_turn);
                prop_assert!((ship.pos.length() - tuning.ship_radius).abs() < 1e-3);
            }
            if ticks >= 20 {
                let expected = if left { tuning.max_turn } else { -tuning.max_turn };
                prop_assert!((ship.heading - expected).abs() < 1e-4);
            }
        }
    }
}
