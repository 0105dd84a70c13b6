/*
 * Camera Module
 *
 * This module defines an orbit camera for the sphere scene. It always looks
 * at the sphere center and provides the world-to-screen projection used by
 * the renderer, plus drag-to-rotate and wheel-to-zoom handling.
 */

use nannou::glam::Quat;
use nannou::prelude::*;

use crate::EPSILON;

// Vertical field of view, matching a typical perspective scene camera
const FIELD_OF_VIEW_DEGREES: f32 = 50.0;
const ROTATE_SPEED: f32 = 0.005;
const MAX_PITCH: f32 = 1.5;
const NEAR_PLANE: f32 = 0.1;

pub struct Camera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub is_dragging: bool,
    pub last_cursor_pos: Vec2,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: 300.0,
            min_distance: 120.0,
            max_distance: 800.0,
            is_dragging: false,
            last_cursor_pos: Vec2::ZERO,
        }
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_axis_angle(Vec3::Y, self.yaw) * Quat::from_axis_angle(Vec3::X, self.pitch)
    }

    // Camera position in world space
    pub fn eye(&self) -> Vec3 {
        self.rotation() * Vec3::Z * self.distance
    }

    pub fn focal_length(&self, window_rect: Rect) -> f32 {
        0.5 * window_rect.h() / (0.5 * FIELD_OF_VIEW_DEGREES.to_radians()).tan()
    }

    // Perspective-project a world point onto the screen. Returns None for
    // points at or behind the near plane.
    pub fn project(&self, point: Vec3, window_rect: Rect) -> Option<Vec2> {
        let view = self.rotation().inverse() * (point - self.eye());

        // The camera looks down its local -Z towards the sphere center
        let depth = -view.z;
        if depth <= NEAR_PLANE {
            return None;
        }

        let focal = self.focal_length(window_rect);
        Some(vec2(view.x, view.y) * (focal / depth))
    }

    // Screen radius of the sphere silhouette
    pub fn projected_sphere_radius(&self, sphere_radius: f32, window_rect: Rect) -> f32 {
        let horizon_sq =
            (self.distance * self.distance - sphere_radius * sphere_radius).max(EPSILON);
        self.focal_length(window_rect) * sphere_radius / horizon_sq.sqrt()
    }

    // A sphere-surface point faces the camera when it lies on the near side
    // of the horizon circle: dot(point, eye) > radius^2
    pub fn is_front_facing(&self, point: Vec3, sphere_radius: f32) -> bool {
        point.dot(self.eye()) > sphere_radius * sphere_radius
    }

    // Handle mouse wheel events for zooming
    pub fn zoom(&mut self, scroll_amount: f32) {
        let zoom_factor = 1.0 - scroll_amount * 0.1;
        self.distance = (self.distance * zoom_factor).clamp(self.min_distance, self.max_distance);
    }

    // Start dragging the camera
    pub fn start_drag(&mut self, position: Vec2) {
        self.last_cursor_pos = position;
        self.is_dragging = true;
    }

    // Rotate the orbit while dragging
    pub fn drag(&mut self, position: Vec2) {
        if self.is_dragging {
            let delta = position - self.last_cursor_pos;

            if delta.length_squared() > 0.0 {
                self.yaw -= delta.x * ROTATE_SPEED;
                self.pitch = (self.pitch + delta.y * ROTATE_SPEED).clamp(-MAX_PITCH, MAX_PITCH);
                self.last_cursor_pos = position;
            }
        }
    }

    // End dragging
    pub fn end_drag(&mut self) {
        self.is_dragging = false;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SPHERE_RADIUS;

    fn window_rect() -> Rect {
        Rect::from_w_h(1280.0, 720.0)
    }

    #[test]
    fn the_sphere_center_projects_to_the_screen_center() {
        let camera = Camera::new();
        let center = camera.project(Vec3::ZERO, window_rect()).unwrap();
        assert!(center.length() < 1.0e-3);
    }

    #[test]
    fn points_behind_the_camera_are_rejected() {
        let camera = Camera::new();
        let behind = camera.eye() * 2.0;
        assert!(camera.project(behind, window_rect()).is_none());
    }

    #[test]
    fn horizon_culling_splits_the_sphere() {
        let camera = Camera::new(); // eye on +Z
        assert!(camera.is_front_facing(vec3(0.0, 0.0, SPHERE_RADIUS), SPHERE_RADIUS));
        assert!(!camera.is_front_facing(vec3(0.0, 0.0, -SPHERE_RADIUS), SPHERE_RADIUS));
        assert!(!camera.is_front_facing(vec3(SPHERE_RADIUS, 0.0, 0.0), SPHERE_RADIUS));
    }

    #[test]
    fn zoom_is_clamped_to_the_configured_range() {
        let mut camera = Camera::new();
        for _ in 0..100 {
            camera.zoom(1.0);
        }
        assert!((camera.distance - camera.min_distance).abs() < 1.0e-3);

        for _ in 0..100 {
            camera.zoom(-1.0);
        }
        assert!((camera.distance - camera.max_distance).abs() < 1.0e-3);
    }
}
