/*
 * Particle Field - Module Definitions
 *
 * This file defines the module structure for the ambient particle field.
 * The simulation core (particle, simulation, viewport, render_loop, field)
 * has no windowing dependency beyond nannou's math and colour types; the
 * app module hosts it in a nannou window.
 */

// Re-export key components for easier access
pub use canvas::{pixel_to_point, Canvas, DisplayList, DrawCommand};
pub use config::{FieldConfig, DEFAULT_DENSITY, MIN_DENSITY};
pub use error::{FieldError, Result};
pub use field::ParticleField;
pub use particle::Particle;
pub use render_loop::{FrameRequest, FrameScheduler, LoopHandle, RefreshScheduler, RenderLoop};
pub use simulation::{population_size, ParticleSimulation};
pub use stats::FrameStats;
pub use viewport::{ListenerId, ResizeListeners, ViewportManager};

// Define modules
pub mod particle;
pub mod simulation;
pub mod canvas;
pub mod viewport;
pub mod render_loop;
pub mod field;
pub mod config;
pub mod error;
pub mod cli;
pub mod stats;
pub mod ui;
pub mod app;
