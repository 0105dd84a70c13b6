/*
 * UI Module
 *
 * This module contains functions for creating and updating the user interface
 * using nannou_egui. It exposes the behavior mode selector, the flocking
 * toggle with its weights and perception radii, and general simulation
 * controls. Parameter change detection is handled by the SimulationParams
 * struct.
 */

use nannou_egui::{egui, Egui};

use crate::behavior::Behavior;
use crate::debug::DebugInfo;
use crate::params::SimulationParams;

// Update the UI and return whether boids should be reset, the number of
// boids changed, and whether any UI change occurred
pub fn update_ui(
    egui: &mut Egui,
    params: &mut SimulationParams,
    debug_info: &DebugInfo,
) -> (bool, bool, bool) {
    let mut should_reset_boids = false;

    // Take a snapshot of current parameter values for change detection
    params.take_snapshot();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.collapsing("Steering", |ui| {
                egui::ComboBox::from_label("Behavior")
                    .selected_text(params.behavior.label())
                    .show_ui(ui, |ui| {
                        for behavior in Behavior::ALL {
                            ui.selectable_value(&mut params.behavior, behavior, behavior.label());
                        }
                    });
                ui.label("The leader always wanders; followers run the selected behavior.");
            });

            ui.collapsing("Flocking", |ui| {
                ui.checkbox(&mut params.enable_flocking, "Enable Flocking");
                ui.add(
                    egui::Slider::new(
                        &mut params.separation_weight,
                        SimulationParams::get_weight_range(),
                    )
                    .text("Separation Weight"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.alignment_weight,
                        SimulationParams::get_weight_range(),
                    )
                    .text("Alignment Weight"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.cohesion_weight,
                        SimulationParams::get_weight_range(),
                    )
                    .text("Cohesion Weight"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.separation_radius,
                        SimulationParams::get_radius_range(),
                    )
                    .text("Separation Radius"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.alignment_radius,
                        SimulationParams::get_radius_range(),
                    )
                    .text("Alignment Radius"),
                );
                ui.add(
                    egui::Slider::new(
                        &mut params.cohesion_radius,
                        SimulationParams::get_radius_range(),
                    )
                    .text("Cohesion Radius"),
                );
            });

            ui.collapsing("Boid Parameters", |ui| {
                ui.add(
                    egui::Slider::new(
                        &mut params.num_boids,
                        SimulationParams::get_num_boids_range(),
                    )
                    .text("Number of Boids"),
                );

                if ui.button("Reset Boids").clicked() {
                    should_reset_boids = true;
                }

                ui.add(
                    egui::Slider::new(&mut params.max_speed, SimulationParams::get_max_speed_range())
                        .text("Max Speed"),
                );
            });

            ui.collapsing("Camera Controls", |ui| {
                ui.label("Rotate: Click and drag");
                ui.label("Zoom: Use mouse wheel or trackpad pinch gesture");
            });

            ui.separator();
            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!(
                "Frame time: {:.2} ms",
                debug_info.frame_time.as_secs_f64() * 1000.0
            ));

            ui.checkbox(&mut params.show_debug, "Show Debug Info");
            ui.checkbox(&mut params.pause_simulation, "Pause Simulation");
        });

    // Detect parameter changes
    let (num_boids_changed, ui_changed) = params.detect_changes();

    (should_reset_boids, num_boids_changed, ui_changed)
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    boids_len: usize,
    behavior_label: &str,
) {
    let margin = 20.0;
    let line_height = 20.0;
    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    let debug_texts = [
        format!("FPS: {:.1}", debug_info.fps),
        format!(
            "Frame time: {:.2} ms",
            debug_info.frame_time.as_secs_f64() * 1000.0
        ),
        format!("Boids: {}", boids_len),
        format!("Behavior: {}", behavior_label),
    ];

    for (i, text) in debug_texts.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);

        draw.text(text)
            .x_y(text_x + 70.0, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
