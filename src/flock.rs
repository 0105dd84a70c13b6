/*
 * Flock Module
 *
 * Neighbor-averaged flocking rules, each a brute-force scan over the full
 * agent set with its own perception radius:
 * 1. Alignment: steer towards the average heading of neighbors
 * 2. Cohesion: steer towards the average position of neighbors
 * 3. Separation: avoid crowding neighbors (inverse-square repulsion)
 *
 * The scans only read other boids, so they run against an immutable
 * snapshot of the flock taken at the start of the tick. A boid is never
 * its own neighbor; callers pass its index in the snapshot to skip it.
 */

use nannou::prelude::*;

use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::EPSILON;

impl Boid {
    // Calculate alignment force (steer towards average heading of neighbors)
    pub fn align(&self, boids: &[Boid], self_index: usize, perception_radius: f32) -> Vec3 {
        let mut steering = Vec3::ZERO;
        let mut count = 0;

        for (i, other) in boids.iter().enumerate() {
            if i == self_index {
                continue;
            }
            if self.position.distance(other.position) < perception_radius {
                steering += other.velocity;
                count += 1;
            }
        }

        if count > 0 {
            steering /= count as f32;

            if steering.length() > 0.0 {
                // Implement Reynolds: Steering = Desired - Velocity
                steering = steering.normalize() * self.max_speed - self.velocity;

                if steering.length() > self.max_force {
                    steering = steering.normalize() * self.max_force;
                }
            }
        }

        steering
    }

    // Calculate cohesion force (steer towards average position of neighbors)
    pub fn cohesion(&self, boids: &[Boid], self_index: usize, perception_radius: f32) -> Vec3 {
        let mut steering = Vec3::ZERO;
        let mut count = 0;

        for (i, other) in boids.iter().enumerate() {
            if i == self_index {
                continue;
            }
            if self.position.distance(other.position) < perception_radius {
                steering += other.position;
                count += 1;
            }
        }

        if count > 0 {
            steering /= count as f32;

            // Desired velocity towards the neighborhood center
            let desired = steering - self.position;

            if desired.length() > 0.0 {
                let mut steering = desired.normalize() * self.max_speed - self.velocity;

                if steering.length() > self.max_force {
                    steering = steering.normalize() * self.max_force;
                }

                return steering;
            }
        }

        Vec3::ZERO
    }

    // Calculate separation force (avoid crowding neighbors)
    pub fn separation(&self, boids: &[Boid], self_index: usize, perception_radius: f32) -> Vec3 {
        let mut steering = Vec3::ZERO;
        let mut count = 0;

        for (i, other) in boids.iter().enumerate() {
            if i == self_index {
                continue;
            }
            let d = self.position.distance(other.position);
            if d < perception_radius {
                // Inverse-square repulsion; coincident agents are kept
                // finite by clamping the distance to a small epsilon
                let d = d.max(EPSILON);
                let diff = (self.position - other.position) / (d * d);
                steering += diff;
                count += 1;
            }
        }

        if count > 0 {
            steering /= count as f32;

            if steering.length() > 0.0 {
                // Implement Reynolds: Steering = Desired - Velocity
                steering = steering.normalize() * self.max_speed - self.velocity;

                if steering.length() > self.max_force {
                    steering = steering.normalize() * self.max_force;
                }
            }
        }

        steering
    }

    // Apply all three flocking behaviors with their configured weights
    pub fn flock(&mut self, boids: &[Boid], self_index: usize, params: &SimulationParams) {
        let separation =
            self.separation(boids, self_index, params.separation_radius) * params.separation_weight;
        let alignment =
            self.align(boids, self_index, params.alignment_radius) * params.alignment_weight;
        let cohesion =
            self.cohesion(boids, self_index, params.cohesion_radius) * params.cohesion_weight;

        self.apply_force(separation);
        self.apply_force(alignment);
        self.apply_force(cohesion);
    }
}
