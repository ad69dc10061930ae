/*
 * Application Module
 *
 * This module is the nannou host for the particle field. It opens the
 * window, mounts the field on a DisplayList sized to the window's device
 * pixels, and maps window events onto the field lifecycle:
 *
 * - every refresh-synchronised update delivers the due frame, if any
 * - the view replays the recorded frame over the background colour
 * - window resize regenerates the population for the new size
 * - window close tears the field down
 */

use clap::Parser;
use nannou::prelude::*;
use nannou_egui::Egui;

use crate::canvas::DisplayList;
use crate::cli::Cli;
use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::render_loop::RefreshScheduler;
use crate::stats::FrameStats;
use crate::ui;
use crate::viewport::ResizeListeners;

// Fallback window size when no monitor can be queried
const FALLBACK_WINDOW_SIZE: (f32, f32) = (1280.0, 720.0);

// Main model for the application
pub struct Model {
    pub window_id: WindowId,
    pub config: FieldConfig,
    pub field: Option<ParticleField>,
    pub canvas: DisplayList,
    pub scheduler: RefreshScheduler,
    pub listeners: ResizeListeners,
    pub egui: Egui,
    pub stats: FrameStats,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let config = match Cli::parse().resolve_config() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("{}, falling back to default settings", err);
            FieldConfig::default()
        }
    };

    // Size the window relative to the primary monitor
    let (window_width, window_height) = match app.primary_monitor() {
        Some(monitor) => {
            let size = monitor.size();
            (
                size.width as f32 * config.window_scale,
                size.height as f32 * config.window_scale,
            )
        }
        None => FALLBACK_WINDOW_SIZE,
    };

    let window_id = match app
        .new_window()
        .title(&config.window_title)
        .size(window_width as u32, window_height as u32)
        .view(view)
        .resized(resized)
        .closed(closed)
        .raw_event(raw_window_event)
        .build()
    {
        Ok(id) => id,
        Err(err) => {
            log::error!("Failed to build window: {:?}", err);
            std::process::exit(1);
        }
    };

    let Some(window) = app.window(window_id) else {
        log::error!("Window {:?} vanished right after creation", window_id);
        std::process::exit(1);
    };
    let egui = Egui::from_window(&window);
    let (pixel_width, pixel_height) = window.inner_size_pixels();
    drop(window);

    log::info!(
        "Opened {}x{} window ({}x{} device pixels)",
        window_width as u32,
        window_height as u32,
        pixel_width,
        pixel_height
    );

    app.set_loop_mode(LoopMode::RefreshSync);

    let mut canvas = DisplayList::new();
    let mut scheduler = RefreshScheduler::new();
    let mut listeners = ResizeListeners::new();
    let field = ParticleField::mount(
        Some(&mut canvas),
        pixel_width,
        pixel_height,
        config.clone(),
        &mut listeners,
        &mut scheduler,
    );

    Model {
        window_id,
        config,
        field,
        canvas,
        scheduler,
        listeners,
        egui,
        stats: FrameStats::default(),
    }
}

// Update the model once per display refresh
pub fn update(app: &App, model: &mut Model, update: Update) {
    if let Some(request) = model.scheduler.take_due() {
        if let Some(field) = model.field.as_mut() {
            field.on_frame(request, &mut model.canvas, &mut model.scheduler);
        }
    }

    model.stats.record(app.fps(), update.since_last, model.field.as_ref());

    if model.config.show_debug {
        ui::update_overlay(&mut model.egui, &model.stats);
    }
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    draw.background().color(model.config.background());

    let (window_rect, scale_factor) = match app.window(model.window_id) {
        Some(window) => (window.rect(), window.scale_factor()),
        None => (app.window_rect(), 1.0),
    };
    model
        .canvas
        .replay(&draw, window_rect, scale_factor, model.config.background());

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("Failed to submit frame: {:?}", err);
    }

    if model.config.show_debug {
        if let Err(err) = model.egui.draw_to_frame(&frame) {
            log::error!("Failed to draw debug overlay: {:?}", err);
        }
    }
}

// Regenerate the population whenever the window changes size
pub fn resized(app: &App, model: &mut Model, _size: Vec2) {
    let Some((width, height)) = app
        .window(model.window_id)
        .map(|window| window.inner_size_pixels())
    else {
        return;
    };

    if let Some(field) = model.field.as_mut() {
        field.on_resize(&mut model.canvas, width, height, &model.listeners);
    }
}

// Release the loop and the resize listener with the window
pub fn closed(_app: &App, model: &mut Model) {
    if let Some(mut field) = model.field.take() {
        field.teardown(&mut model.listeners, &mut model.scheduler);
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    model.egui.handle_raw_event(event);
}
