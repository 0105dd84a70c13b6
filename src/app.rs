/*
 * Application Module
 *
 * This module defines the main application model and per-frame logic.
 * One nannou update is one simulation tick: the UI runs first, then the
 * behavior selector accumulates steering for every boid, and finally each
 * boid integrates its own motion on the sphere.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::camera::Camera;
use crate::boid::Boid;
use crate::debug::DebugInfo;
use crate::params::SimulationParams;
use crate::physics;
use crate::renderer;
use crate::input;
use crate::ui;

// Main model for the application
pub struct Model {
    pub boids: Vec<Boid>,
    pub params: SimulationParams,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub camera: Camera,
    pub mouse_position: Vec2,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    // Get the primary monitor's dimensions
    let monitor = app.primary_monitor().expect("Failed to get primary monitor");
    let monitor_size = monitor.size();

    // Calculate window size based on monitor size (80% of monitor size)
    let window_width = monitor_size.width as f32 * 0.8;
    let window_height = monitor_size.height as f32 * 0.8;

    // Create the main window with dynamic size
    let window_id = app
        .new_window()
        .title("Sphere Boids")
        .size(window_width as u32, window_height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .mouse_released(input::mouse_released)
        .mouse_wheel(input::mouse_wheel)
        .raw_event(input::raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Create simulation parameters and the flock
    let params = SimulationParams::default();
    let boids = physics::spawn_boids(&params);

    Model {
        boids,
        params,
        egui,
        debug_info: DebugInfo::default(),
        camera: Camera::new(),
        mouse_position: Vec2::ZERO,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and check if boids need to be reset
    let (should_reset_boids, num_boids_changed, ui_changed) =
        ui::update_ui(&mut model.egui, &mut model.params, &model.debug_info);

    // Handle reset boids
    if should_reset_boids || num_boids_changed {
        model.boids = physics::spawn_boids(&model.params);
    } else if ui_changed {
        // Push the (possibly changed) speed limit to every boid, keeping
        // the leader's boost intact
        for (i, boid) in model.boids.iter_mut().enumerate() {
            boid.set_max_speed(physics::max_speed_for(&model.params, i));
        }
    }

    // Only update boids if simulation is not paused
    if !model.params.pause_simulation {
        physics::step(&mut model.boids, &model.params);
    }
}
