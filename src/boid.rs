/*
 * Boid Module
 *
 * This module defines the Boid struct and its steering behaviors.
 * Each boid lives on the surface of a sphere and accumulates acceleration
 * from one or more behaviors (seek, flee, arrive, wander) before a single
 * update() call per tick integrates velocity and position and re-projects
 * the motion onto the sphere.
 */

use nannou::glam::Quat;
use nannou::prelude::*;
use rand::Rng;
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::EPSILON;

#[derive(Clone)]
pub struct Boid {
    pub sphere_radius: f32,
    pub position: Vec3,
    pub velocity: Vec3,
    pub acceleration: Vec3,
    pub orientation: Quat,
    pub max_speed: f32,
    pub max_steer: f32,
    pub max_force: f32,
    pub wander_angle: f32,
    pub arrive_radius: f32,
    pub depart_radius: f32,
    pub color: Rgb<u8>,
}

impl Boid {
    pub fn new(sphere_radius: f32, color: Rgb<u8>, position: Vec3, velocity: Vec3) -> Self {
        let max_speed = 1.0;
        Self {
            sphere_radius,
            position,
            velocity,
            acceleration: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            max_speed,
            max_steer: 0.1,
            max_force: 0.25,
            wander_angle: 0.0,
            arrive_radius: 0.2 * max_speed,
            depart_radius: 0.5 * max_speed,
            color,
        }
    }

    // Change the speed limit and refresh the radii derived from it
    pub fn set_max_speed(&mut self, max_speed: f32) {
        self.max_speed = max_speed;
        self.arrive_radius = 0.2 * max_speed;
        self.depart_radius = 0.5 * max_speed;
    }

    // Apply a force to the boid
    pub fn apply_force(&mut self, force: Vec3) {
        self.acceleration += force;
    }

    // Steer directly towards a target point
    pub fn seek(&mut self, target: Vec3, intensity: f32) {
        let steering = target - self.position;
        self.acceleration += steering * intensity;
    }

    // Steer directly away from a target point (exact negation of seek)
    pub fn flee(&mut self, target: Vec3, intensity: f32) {
        let steering = self.position - target;
        self.acceleration += steering * intensity;
    }

    // Steer towards a target, slowing down as the angular distance to it
    // shrinks below arrive_radius. Distance is measured as the angle between
    // the two position vectors, since motion is constrained to the sphere.
    pub fn arrive(&mut self, target: Vec3, intensity: f32) {
        let direction = target - self.position;
        if direction.length() <= EPSILON
            || self.position.length() <= EPSILON
            || target.length() <= EPSILON
        {
            // Degenerate geometry contributes no steering
            return;
        }

        let distance = self.position.angle_between(target);
        let target_speed = if distance > self.arrive_radius {
            self.max_speed
        } else {
            self.max_speed * distance / self.arrive_radius
        };
        let target_velocity = direction.normalize() * target_speed;

        let steering = target_velocity - self.velocity;
        self.acceleration += steering * intensity;
    }

    // Persistent pseudo-random steering: the wander angle drifts by a bounded
    // random increment each tick, picking a point on a circle that is rotated
    // into the tangent plane ahead of the boid.
    pub fn wander(&mut self, angle: f32, radius: f32, intensity: f32) {
        let mut rng = rand::thread_rng();
        self.wander_angle += rng.gen_range(-angle..=angle);

        let up = self.position;
        let mut offset = vec3(self.wander_angle.cos(), self.wander_angle.sin(), 0.0) * radius;
        if up.length() > EPSILON {
            offset = Quat::from_axis_angle(up.normalize(), FRAC_PI_2) * offset;
        }

        let target = self.position + self.velocity + offset;
        self.seek(target, intensity);
    }

    // Integrate one tick of motion, clamping the accumulated acceleration
    // to max_steer before it feeds the velocity.
    pub fn update(&mut self) {
        if self.acceleration.length() > self.max_steer {
            self.acceleration = self.acceleration.normalize() * self.max_steer;
        }
        self.integrate();
    }

    // Flocking variant: the three flock forces are already clamped to
    // max_force individually, so the combined acceleration is not clamped
    // again here.
    pub fn update_flocking(&mut self) {
        self.integrate();
    }

    fn integrate(&mut self) {
        // Update velocity
        self.velocity += self.acceleration;

        // Limit speed
        if self.velocity.length() > self.max_speed {
            self.velocity = self.velocity.normalize() * self.max_speed;
        }

        let speed = self.velocity.length();
        if speed > EPSILON {
            // Bend the velocity towards the sphere surface while preserving
            // its magnitude. The advanced position only approximately lies on
            // the sphere; the drift is corrected again next tick rather than
            // hard-renormalizing the position.
            let candidate = (self.position + self.velocity).normalize() * self.sphere_radius;
            let corrected = candidate - self.position;
            if corrected.length() > EPSILON {
                self.velocity = corrected.normalize() * speed;
            }

            // Update position
            self.position += self.velocity;

            // Update rotation: faster motion turns the heading faster
            let angular_velocity = (speed / self.max_speed).min(1.0);
            self.turn_towards_velocity(angular_velocity);
        }

        // Reset acceleration
        self.acceleration = Vec3::ZERO;
    }

    // Slerp the stored orientation towards a look-at frame whose forward axis
    // is the velocity direction and whose up axis is the surface normal.
    fn turn_towards_velocity(&mut self, amount: f32) {
        if self.position.length() <= EPSILON || self.velocity.length() <= EPSILON {
            return;
        }
        let up = self.position.normalize();
        let forward = self.velocity.normalize();

        // Flatten the forward axis into the tangent plane
        let tangent = forward - up * forward.dot(up);
        if tangent.length() <= EPSILON {
            return;
        }

        let target = look_rotation(tangent.normalize(), up);
        self.orientation = self.orientation.slerp(target, amount).normalize();
    }
}

// Build the rotation that maps local +Z to `forward` and local +Y to `up`.
// Both inputs must be unit length and perpendicular to each other.
fn look_rotation(forward: Vec3, up: Vec3) -> Quat {
    let align = Quat::from_rotation_arc(Vec3::Z, forward);
    let aligned_up = align * Vec3::Y;
    let twist = signed_angle(aligned_up, up, forward);
    (Quat::from_axis_angle(forward, twist) * align).normalize()
}

// Angle from `from` to `to` around `axis`, in [-PI, PI]. All unit vectors,
// with `from` and `to` perpendicular to `axis`.
fn signed_angle(from: Vec3, to: Vec3, axis: Vec3) -> f32 {
    from.cross(to).dot(axis).atan2(from.dot(to))
}

// Uniformly distributed point on the unit sphere (cylinder projection)
pub fn random_point_on_unit_sphere(rng: &mut impl Rng) -> Vec3 {
    let theta = rng.gen_range(0.0..TAU);
    let z: f32 = rng.gen_range(-1.0..1.0);
    let r = (1.0 - z * z).sqrt();
    vec3(theta.cos() * r, theta.sin() * r, z)
}
