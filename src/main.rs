/*
 * Sphere Boids
 *
 * This application simulates steering agents (boids) constrained to the
 * surface of a sphere. Agent 0 is the leader and always wanders; every
 * other agent follows the behavior selected in the UI:
 * wander, seek, flee, arrive, or seek-sequence (follow-the-leader chain).
 * A flocking mode (separation, alignment, cohesion) can be toggled on
 * instead, with interactive sliders for weights and perception radii.
 */

use sphere_boids::app;

fn main() {
    nannou::app(app::model)
        .update(app::update)
        .run();
}
