//! Per-frame simulation step
//!
//! Order within a frame: pause toggle, turning, firing, spawning, motion,
//! collisions, culling, then phase evaluation. A frame always runs to
//! completion; the host reads a snapshot afterwards.

use super::collision::{
    check_projectile_collisions, check_ship_collisions, cull_asteroids, cull_projectiles,
};
use super::motion::{
    advance_asteroids, advance_projectiles, apply_turn, projectile_velocity, update_ship_position,
};
use super::state::{GameEvent, Projectile, SimulationState};

/// Input flags for a single frame, set by the host's input handlers
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Held: rotate heading toward +max_turn
    pub turn_left: bool,
    /// Held: rotate heading toward -max_turn
    pub turn_right: bool,
    /// Fire if the cooldown allows
    pub fire: bool,
    /// Pause toggle (one-shot)
    pub toggle_pause: bool,
    /// Spawn an asteroid now (one-shot)
    pub force_spawn: bool,
}

impl FrameInput {
    /// Clear one-shot inputs after a frame consumed them
    pub fn clear_triggers(&mut self) {
        self.toggle_pause = false;
        self.force_spawn = false;
    }
}

/// Advance the simulation by one frame.
///
/// `current_time` is the host's monotonically increasing clock and `dt` the
/// time since the previous frame, both in seconds.
pub fn tick(state: &mut SimulationState, input: &FrameInput, current_time: f32, dt: f32) {
    state.events.clear();
    state.time = current_time;

    if input.toggle_pause {
        state.paused = !state.paused;
        log::info!("{}", if state.paused { "Paused" } else { "Resumed" });
    }
    if state.paused {
        return;
    }

    state.frame_count += 1;
    state.ship.fire_cooldown += dt;

    // Ship
    apply_turn(&mut state.ship, input.turn_left, input.turn_right, &state.tuning);
    update_ship_position(&mut state.ship, &state.tuning);
    if input.fire {
        try_fire(state);
    }

    let world_active = state.phase.world_active();

    // Spawning
    if world_active {
        if input.force_spawn {
            let index = state.spawner.spawn(&mut state.asteroids, &mut state.rng, &state.tuning);
            push_spawned(state, index);
        }
        let spawned = state.spawner.maybe_spawn(
            current_time,
            &mut state.asteroids,
            &mut state.rng,
            &state.tuning,
        );
        if let Some(index) = spawned {
            push_spawned(state, index);
        }
    }

    // Motion
    if world_active {
        advance_asteroids(&mut state.asteroids);
    }
    advance_projectiles(&mut state.projectiles);

    // Collisions
    if world_active {
        let radius = state.tuning.collision_radius;
        if let Some(index) = check_ship_collisions(&mut state.asteroids, &mut state.ship, radius) {
            state.events.push(GameEvent::ShipHit {
                index,
                lives_left: state.ship.lives,
            });
        }
        if let Some(hit) = check_projectile_collisions(
            &mut state.asteroids,
            &mut state.projectiles,
            &mut state.ship,
            radius,
            state.tuning.asteroid_reward,
        ) {
            state.events.push(GameEvent::AsteroidDestroyed {
                asteroid: hit.asteroid,
                projectile: hit.projectile,
                score: state.ship.score,
            });
        }
    }

    // Culling
    let count = cull_asteroids(&mut state.asteroids, state.tuning.cull_z);
    if count > 0 {
        state.events.push(GameEvent::AsteroidsCulled { count });
    }
    let count = cull_projectiles(&mut state.projectiles, state.tuning.projectile_max_distance);
    if count > 0 {
        state.events.push(GameEvent::ProjectilesCulled { count });
    }

    // Phase
    if let Some((from, to)) = state.phase.evaluate(state.ship.lives, current_time, &state.tuning) {
        state.events.push(GameEvent::PhaseChanged { from, to });
    }
}

/// Fire a projectile from the ship if alive, playing, and off cooldown.
///
/// Firing on cooldown is a silent no-op.
fn try_fire(state: &mut SimulationState) {
    let ship = &mut state.ship;
    if !ship.is_alive() || !state.phase.world_active() || ship.fire_cooldown < state.tuning.fire_cooldown {
        return;
    }

    ship.fire_cooldown = 0.0;
    let vel = projectile_velocity(ship.pos, ship.heading, &state.tuning);
    let index = state.projectiles.spawn(Projectile {
        initial_pos: ship.pos,
        pos: ship.pos,
        heading: ship.heading,
        vel,
    });
    log::debug!("Projectile {} fired at heading {:.2}", index, ship.heading);
    state.events.push(GameEvent::ProjectileFired {
        index,
        heading: ship.heading,
    });
}

fn push_spawned(state: &mut SimulationState, index: usize) {
    if let Some(asteroid) = state.asteroids.get(index) {
        state.events.push(GameEvent::AsteroidSpawned {
            index,
            pos: asteroid.initial_pos,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Asteroid, AsteroidKind, GamePhase};
    use crate::tuning::Tuning;
    use glam::Vec3;

    const DT: f32 = 1.0 / 60.0;

    /// Drive `frames` frames at 60 Hz starting at `start`, returning the final time
    fn run(state: &mut SimulationState, input: &FrameInput, start: f32, frames: usize) -> f32 {
        let mut t = start;
        for _ in 0..frames {
            t += DT;
            tick(state, input, t, DT);
        }
        t
    }

    #[test]
    fn test_spawns_on_cadence() {
        let mut state = SimulationState::new(12345);
        // ~1.83 s at 60 Hz with a strict 0.5 s gate: one spawn per 30-31 frames
        run(&mut state, &FrameInput::default(), 0.0, 110);
        assert_eq!(state.spawner.total_spawned, 3);
        assert_eq!(state.asteroids.count(), 3);
    }

    #[test]
    fn test_force_spawn() {
        let mut state = SimulationState::new(1);
        let input = FrameInput {
            force_spawn: true,
            ..Default::default()
        };
        tick(&mut state, &input, 0.01, 0.01);
        assert_eq!(state.asteroids.count(), 1);
        assert!(matches!(state.events[0], GameEvent::AsteroidSpawned { index: 0, .. }));
    }

    #[test]
    fn test_fire_cooldown() {
        let mut state = SimulationState::new(5);
        let fire = FrameInput {
            fire: true,
            ..Default::default()
        };

        tick(&mut state, &fire, 0.1, 0.1);
        tick(&mut state, &fire, 0.6, 0.5);
        assert_eq!(state.projectiles.count(), 1);

        // 0.8 s after the first shot
        tick(&mut state, &fire, 0.9, 0.3);
        assert_eq!(state.projectiles.count(), 2);
    }

    #[test]
    fn test_pause_freezes_world() {
        let mut state = SimulationState::new(9);
        let t = run(&mut state, &FrameInput::default(), 0.0, 40);
        assert_eq!(state.asteroids.count(), 1);
        let before = state.asteroids.get(0).map(|a| a.pos);

        let toggle = FrameInput {
            toggle_pause: true,
            ..Default::default()
        };
        tick(&mut state, &toggle, t + DT, DT);
        assert!(state.paused);
        let t = run(&mut state, &FrameInput::default(), t + DT, 120);
        assert_eq!(state.asteroids.count(), 1);
        assert_eq!(state.asteroids.get(0).map(|a| a.pos), before);

        tick(&mut state, &toggle, t + DT, DT);
        assert!(!state.paused);
    }

    #[test]
    fn test_turning_moves_ship_on_circle() {
        let mut state = SimulationState::new(4);
        let left = FrameInput {
            turn_left: true,
            ..Default::default()
        };
        run(&mut state, &left, 0.0, 50);
        assert!((state.ship.heading - state.tuning.max_turn).abs() < 1e-4);
        assert!((state.ship.pos.length() - state.tuning.ship_radius).abs() < 1e-4);
        // Turning left swings the ship toward -x
        assert!(state.ship.pos.x < 0.0);
    }

    #[test]
    fn test_one_ship_collision_per_frame() {
        let mut state = SimulationState::new(8);
        let ship_pos = state.ship.pos;
        for dx in [0.3, -0.3] {
            state.asteroids.spawn(Asteroid::new(
                ship_pos + Vec3::new(dx, 0.0, -0.5),
                AsteroidKind::Coarse,
                1.0e6,
                Vec3::ONE,
            ));
        }

        tick(&mut state, &FrameInput::default(), 0.01, 0.01);
        assert_eq!(state.asteroids.count(), 1);
        assert_eq!(state.ship.lives, state.tuning.starting_lives - 1);

        tick(&mut state, &FrameInput::default(), 0.02, 0.01);
        assert_eq!(state.asteroids.count(), 0);
        assert_eq!(state.ship.lives, state.tuning.starting_lives - 2);
    }

    #[test]
    fn test_projectile_scores_against_asteroid() {
        let mut state = SimulationState::new(10);
        // Straight ahead of the ship at heading 0
        state.asteroids.spawn(Asteroid::new(
            Vec3::new(0.0, 0.0, -12.0),
            AsteroidKind::Smooth,
            1.0e6,
            Vec3::ONE,
        ));
        let fire = FrameInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, 0.01, 0.01);
        assert_eq!(state.projectiles.count(), 1);

        // Projectile moves 0.1 per tick from z=-5; inside the box once z < -10
        run(&mut state, &FrameInput::default(), 0.01, 60);
        assert_eq!(state.ship.score, state.tuning.asteroid_reward);
        assert!(state.projectiles.is_empty());
        assert!(
            state
                .asteroids
                .iter()
                .all(|a| a.kind != AsteroidKind::Smooth)
        );
    }

    #[test]
    fn test_game_over_pauses_world() {
        let mut state = SimulationState::new(77);
        let t = run(&mut state, &FrameInput::default(), 0.0, 40);
        assert_eq!(state.asteroids.count(), 1);

        state.ship.lives = 0;
        tick(&mut state, &FrameInput::default(), t + DT, DT);
        assert_eq!(state.game_phase(), GamePhase::Exploding);
        assert!(state.events.contains(&GameEvent::PhaseChanged {
            from: GamePhase::Playing,
            to: GamePhase::Exploding,
        }));

        let frozen = state.asteroids.get(0).map(|a| a.pos);
        let spawned = state.spawner.total_spawned;
        let fire_left = FrameInput {
            fire: true,
            turn_left: true,
            ..Default::default()
        };
        let t = run(&mut state, &fire_left, t + DT, 120);

        assert_eq!(state.spawner.total_spawned, spawned);
        assert_eq!(state.asteroids.get(0).map(|a| a.pos), frozen);
        assert!(state.projectiles.is_empty());
        assert_eq!(state.ship.heading, 0.0);

        // Explosion plus fade completes within a few more seconds
        run(&mut state, &FrameInput::default(), t, 600);
        assert_eq!(state.game_phase(), GamePhase::Faded);
    }

    #[test]
    fn test_end_to_end_asteroid_crosses_origin() {
        let mut state = SimulationState::new(0);
        state.asteroids.spawn(Asteroid::new(
            Vec3::new(10.0, 0.0, -70.0),
            AsteroidKind::Coarse,
            350.0,
            Vec3::ONE,
        ));

        for _ in 0..350 {
            advance_asteroids(&mut state.asteroids);
        }
        let pos = state.asteroids.get(0).expect("asteroid").pos;
        assert!(pos.abs().max_element() < 1e-2);

        advance_asteroids(&mut state.asteroids);
        assert!(state.asteroids.get(0).expect("asteroid").pos.z > 0.0);
        assert_eq!(cull_asteroids(&mut state.asteroids, state.tuning.cull_z), 1);
        assert_eq!(state.asteroids.count(), 0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = SimulationState::new(99999);
        let mut state2 = SimulationState::new(99999);

        let inputs = [
            FrameInput {
                turn_left: true,
                ..Default::default()
            },
            FrameInput {
                fire: true,
                ..Default::default()
            },
            FrameInput {
                force_spawn: true,
                turn_right: true,
                ..Default::default()
            },
            FrameInput::default(),
        ];

        let mut t = 0.0;
        for _ in 0..50 {
            for input in &inputs {
                t += DT;
                tick(&mut state1, input, t, DT);
                tick(&mut state2, input, t, DT);
            }
        }

        assert_eq!(state1.asteroids, state2.asteroids);
        assert_eq!(state1.projectiles, state2.projectiles);
        assert_eq!(state1.ship, state2.ship);
    }

    #[test]
    fn test_heading_model_still_hits_straight_ahead() {
        let tuning = Tuning {
            projectile_model: crate::tuning::ProjectileModel::Heading,
            ..Tuning::default()
        };
        let mut state = SimulationState::with_tuning(3, tuning);
        state.asteroids.spawn(Asteroid::new(
            Vec3::new(0.0, 0.0, -12.0),
            AsteroidKind::Coarse,
            1.0e6,
            Vec3::ONE,
        ));
        let fire = FrameInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, 0.01, 0.01);
        run(&mut state, &FrameInput::default(), 0.01, 60);
        assert_eq!(state.ship.score, state.tuning.asteroid_reward);
    }
}
