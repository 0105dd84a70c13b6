/*
 * Renderer Module
 *
 * This module handles the rendering of the sphere and the boids.
 * Each boid is drawn as an oriented triangle lying in its tangent plane;
 * boids beyond the sphere horizon are skipped.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::boid::Boid;
use crate::camera::Camera;
use crate::ui;
use crate::{BOID_SIZE, SPHERE_RADIUS};

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    // Get the window rectangle
    let window_rect = app.window_rect();

    // Draw the sphere as a shaded disc behind the boids
    if let Some(center) = model.camera.project(Vec3::ZERO, window_rect) {
        let radius = model
            .camera
            .projected_sphere_radius(SPHERE_RADIUS, window_rect);
        let surface: Rgb<u8> = rgb(0x58, 0x81, 0x57);
        draw.ellipse()
            .xy(pt2(center.x, center.y))
            .radius(radius)
            .color(surface);
    }

    // Draw each boid on the near side of the sphere
    for boid in &model.boids {
        if !model.camera.is_front_facing(boid.position, SPHERE_RADIUS) {
            continue;
        }
        draw_boid(&draw, &model.camera, boid, window_rect);
    }

    // Draw debug visualization if enabled
    if model.params.show_debug {
        if let Some(leader) = model.boids.first() {
            draw_velocity_arrow(&draw, &model.camera, leader, window_rect);
        }

        ui::draw_debug_info(
            &draw,
            &model.debug_info,
            window_rect,
            model.boids.len(),
            model.params.behavior.label(),
        );
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI
    model.egui.draw_to_frame(&frame).unwrap();
}

// Project the boid's cone footprint through its orientation: local +Z is
// the heading, local +Y the surface normal, so the triangle lies in the
// tangent plane with its tip forward.
fn draw_boid(draw: &Draw, camera: &Camera, boid: &Boid, window_rect: Rect) {
    let local_points = [
        vec3(0.0, 0.0, BOID_SIZE),
        vec3(BOID_SIZE / 2.0, 0.0, -BOID_SIZE / 2.0),
        vec3(-BOID_SIZE / 2.0, 0.0, -BOID_SIZE / 2.0),
    ];

    let mut screen_points = [Vec2::ZERO; 3];
    for (screen, local) in screen_points.iter_mut().zip(local_points.iter()) {
        let world = boid.position + boid.orientation * *local;
        match camera.project(world, window_rect) {
            Some(point) => *screen = point,
            None => return,
        }
    }

    draw.polygon()
        .color(boid.color)
        .points(screen_points.iter().map(|p| pt2(p.x, p.y)));
}

fn draw_velocity_arrow(draw: &Draw, camera: &Camera, boid: &Boid, window_rect: Rect) {
    let start = camera.project(boid.position, window_rect);
    let end = camera.project(boid.position + boid.velocity * 10.0, window_rect);

    if let (Some(start), Some(end)) = (start, end) {
        draw.arrow()
            .start(pt2(start.x, start.y))
            .end(pt2(end.x, end.y))
            .color(YELLOW)
            .stroke_weight(2.0);
    }
}
