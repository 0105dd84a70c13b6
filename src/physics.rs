/*
 * Physics Module
 *
 * This module drives one simulation tick: it assigns steering behaviors to
 * every boid, then integrates each boid exactly once. Behaviors are
 * accumulated from an immutable snapshot of the flock taken at the start of
 * the tick, so no boid ever observes a mid-tick peer.
 *
 * Boid 0 is the leader and always wanders. Every other boid runs the
 * globally selected behavior, aimed at the leader (seek/flee/arrive, blended
 * with a low-intensity wander for naturalism) or at the immediately
 * preceding boid (seek-sequence, an emergent follow-the-leader chain).
 */

use nannou::prelude::*;

use crate::behavior::Behavior;
use crate::boid::{random_point_on_unit_sphere, Boid};
use crate::params::SimulationParams;
use crate::SPHERE_RADIUS;

// Default wander tuning shared by the leader and the followers
pub const WANDER_ANGLE: f32 = 0.25;
pub const WANDER_RADIUS: f32 = 20.0;

// The leader outruns its followers slightly
pub const LEADER_SPEED_BOOST: f32 = 1.2;

// Place boids uniformly on the sphere, leader first
pub fn spawn_boids(params: &SimulationParams) -> Vec<Boid> {
    let mut rng = rand::thread_rng();
    let mut boids = Vec::with_capacity(params.num_boids);

    for i in 0..params.num_boids {
        let color = if i == 0 {
            rgb(0xdd, 0xa1, 0x5e)
        } else {
            rgb(0xa3, 0xb1, 0x8a)
        };
        let position = random_point_on_unit_sphere(&mut rng) * SPHERE_RADIUS;
        let mut boid = Boid::new(SPHERE_RADIUS, color, position, Vec3::ZERO);
        boid.set_max_speed(max_speed_for(params, i));
        boids.push(boid);
    }

    boids
}

pub fn max_speed_for(params: &SimulationParams, index: usize) -> f32 {
    if index == 0 {
        params.max_speed * LEADER_SPEED_BOOST
    } else {
        params.max_speed
    }
}

// Run one simulation tick
pub fn step(boids: &mut [Boid], params: &SimulationParams) {
    apply_behaviors(boids, params);

    if params.enable_flocking {
        for boid in boids.iter_mut() {
            boid.update_flocking();
        }
    } else {
        for boid in boids.iter_mut() {
            boid.update();
        }
    }
}

// Accumulate acceleration for every boid from a snapshot of the flock
pub fn apply_behaviors(boids: &mut [Boid], params: &SimulationParams) {
    if boids.is_empty() {
        return;
    }

    let snapshot = boids.to_vec();

    if params.enable_flocking {
        for (i, boid) in boids.iter_mut().enumerate() {
            boid.flock(&snapshot, i, params);
        }
        return;
    }

    let leader_position = snapshot[0].position;
    boids[0].wander(WANDER_ANGLE, WANDER_RADIUS, 1.0);

    for (i, boid) in boids.iter_mut().enumerate().skip(1) {
        match params.behavior {
            Behavior::Wander => {
                boid.wander(WANDER_ANGLE, WANDER_RADIUS, 1.0);
            }
            Behavior::Seek => {
                boid.seek(leader_position, 1.0);
                boid.wander(WANDER_ANGLE, WANDER_RADIUS, 0.8);
            }
            Behavior::Flee => {
                boid.flee(leader_position, 1.0);
                boid.wander(WANDER_ANGLE, WANDER_RADIUS, 0.8);
            }
            Behavior::Arrive => {
                boid.arrive(leader_position, 1.0);
                boid.wander(0.1, WANDER_RADIUS, 0.05);
            }
            Behavior::SeekSequence => {
                // Each boid chases the one spawned just before it
                boid.seek(snapshot[i - 1].position, 1.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SPHERE_RADIUS;

    fn fixed_flock() -> Vec<Boid> {
        let positions = [
            vec3(SPHERE_RADIUS, 0.0, 0.0),
            vec3(0.0, SPHERE_RADIUS, 0.0),
            vec3(0.0, 0.0, SPHERE_RADIUS),
        ];
        positions
            .iter()
            .map(|&p| Boid::new(SPHERE_RADIUS, rgb(220, 220, 220), p, Vec3::ZERO))
            .collect()
    }

    #[test]
    fn spawned_boids_sit_on_the_sphere() {
        let params = SimulationParams::default();
        let boids = spawn_boids(&params);

        assert_eq!(boids.len(), params.num_boids);
        for boid in &boids {
            assert!((boid.position.length() - SPHERE_RADIUS).abs() < 1.0e-3);
        }
    }

    #[test]
    fn the_leader_is_faster_than_its_followers() {
        let params = SimulationParams::default();
        let boids = spawn_boids(&params);

        let expected = params.max_speed * LEADER_SPEED_BOOST;
        assert!((boids[0].max_speed - expected).abs() < 1.0e-5);
        assert!((boids[1].max_speed - params.max_speed).abs() < 1.0e-5);
        assert!((boids[0].arrive_radius - 0.2 * expected).abs() < 1.0e-5);
    }

    #[test]
    fn seek_sequence_chains_each_boid_to_its_predecessor() {
        let mut boids = fixed_flock();
        let before = boids.clone();

        let mut params = SimulationParams::default();
        params.behavior = Behavior::SeekSequence;
        apply_behaviors(&mut boids, &params);

        for i in 1..boids.len() {
            let expected = before[i - 1].position - before[i].position;
            assert!((boids[i].acceleration - expected).length() < 1.0e-4);
        }
    }

    #[test]
    fn followers_seek_the_leader_in_seek_mode() {
        let mut boids = fixed_flock();
        let leader_position = boids[0].position;

        let mut params = SimulationParams::default();
        params.behavior = Behavior::Seek;
        apply_behaviors(&mut boids, &params);

        for boid in boids.iter().skip(1) {
            // The wander blend is weaker than the seek pull towards a
            // target on the far side of the sphere
            let towards_leader = leader_position - boid.position;
            assert!(boid.acceleration.dot(towards_leader) > 0.0);
        }
    }

    #[test]
    fn step_respects_every_speed_limit() {
        let mut params = SimulationParams::default();
        params.num_boids = 20;
        let mut boids = spawn_boids(&params);

        for _ in 0..100 {
            step(&mut boids, &params);
            for boid in &boids {
                assert!(boid.velocity.length() <= boid.max_speed + 1.0e-4);
            }
        }
    }

    #[test]
    fn flocking_tick_resets_every_acceleration() {
        let mut params = SimulationParams::default();
        params.num_boids = 12;
        params.enable_flocking = true;
        let mut boids = spawn_boids(&params);

        step(&mut boids, &params);
        for boid in &boids {
            assert_eq!(boid.acceleration, Vec3::ZERO);
        }
    }

    #[test]
    fn distant_flockers_coast_without_forces() {
        let mut params = SimulationParams::default();
        params.enable_flocking = true;

        let mut boids = vec![
            Boid::new(
                SPHERE_RADIUS,
                rgb(220, 220, 220),
                vec3(SPHERE_RADIUS, 0.0, 0.0),
                vec3(0.0, 0.5, 0.0),
            ),
            Boid::new(
                SPHERE_RADIUS,
                rgb(220, 220, 220),
                vec3(-SPHERE_RADIUS, 0.0, 0.0),
                vec3(0.0, 0.5, 0.0),
            ),
        ];
        apply_behaviors(&mut boids, &params);

        assert_eq!(boids[0].acceleration, Vec3::ZERO);
        assert_eq!(boids[1].acceleration, Vec3::ZERO);
    }

    #[test]
    fn an_empty_flock_is_a_no_op() {
        let mut boids: Vec<Boid> = Vec::new();
        let params = SimulationParams::default();
        step(&mut boids, &params);
    }
}
