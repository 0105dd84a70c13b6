/*
 * Sphere Boids - Module Definitions
 *
 * This file defines the module structure for the sphere-constrained boid
 * simulation. Agents steer (seek, flee, arrive, wander, follow-the-leader)
 * and optionally flock (alignment, cohesion, separation) while gliding
 * along the surface of a sphere.
 */

// Re-export key components for easier access
pub use app::Model;
pub use behavior::Behavior;
pub use boid::Boid;
pub use camera::Camera;
pub use debug::DebugInfo;
pub use params::SimulationParams;

// Define modules
pub mod app;
pub mod behavior;
pub mod boid;
pub mod camera;
pub mod debug;
pub mod flock;
pub mod input;
pub mod params;
pub mod physics;
pub mod renderer;
pub mod ui;

// Constants
pub const SPHERE_RADIUS: f32 = 80.0;
pub const BOID_SIZE: f32 = 6.0;
pub const EPSILON: f32 = 1.0e-5;
