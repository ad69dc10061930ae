/*
 * UI Module
 *
 * This module builds the optional debug overlay with nannou_egui. The
 * overlay is read-only: it reports frame timing and the field's state but
 * offers no controls, since the particles are not meant to be interactive.
 */

use nannou_egui::{egui, Egui};

use crate::stats::FrameStats;

pub fn update_overlay(egui: &mut Egui, stats: &FrameStats) {
    let ctx = egui.begin_frame();

    egui::Window::new("Particle Field")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(&ctx, |ui| {
            ui.label(format!("FPS: {:.1}", stats.fps));
            ui.label(format!("Frame time: {:.2} ms", stats.frame_time_ms()));

            ui.separator();

            ui.label(format!("Particles: {}", stats.particle_count));
            ui.label(format!("Surface: {}x{} px", stats.surface.0, stats.surface.1));
            ui.label(format!("Frames rendered: {}", stats.frames_rendered));
            ui.label(if stats.loop_running { "Loop: running" } else { "Loop: stopped" });
        });
}
