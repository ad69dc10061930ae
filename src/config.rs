/*
 * Configuration Module
 *
 * This module defines the FieldConfig struct that holds every tunable
 * constant of the particle field: population density, the sampling ranges
 * for new particles, colours and window settings. Values load from a TOML
 * file where any missing key falls back to its default.
 */

use std::fs;
use std::path::Path;

use nannou::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{FieldError, Result};

/// Pixel area per particle used when none is configured
pub const DEFAULT_DENSITY: f32 = 10_000.0;

/// Smallest accepted density: one particle per pixel
pub const MIN_DENSITY: f32 = 1.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Pixel area per particle (px²)
    pub density: f32,
    /// Velocity components are sampled from [-max_speed, max_speed]
    pub max_speed: f32,
    /// Half-open [min, max) range for particle radius
    pub radius_range: [f32; 2],
    /// Half-open [min, max) range for particle opacity
    pub opacity_range: [f32; 2],
    pub hue: [u8; 3],
    pub background: [u8; 3],
    pub window_title: String,
    /// Share of the primary monitor the window covers
    pub window_scale: f32,
    pub show_debug: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            max_speed: 0.1,
            radius_range: [1.0, 3.0],
            opacity_range: [0.1, 0.6],
            hue: [139, 92, 246],
            background: [15, 23, 42],
            window_title: "Particle Field".to_string(),
            window_scale: 0.8,
            show_debug: false,
        }
    }
}

impl FieldConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: FieldConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&source)
    }

    // Reject values that would make particle sampling panic or produce nonsense
    pub fn validate(&self) -> Result<()> {
        if !self.density.is_finite() || self.density < MIN_DENSITY {
            return Err(invalid(
                "density",
                format!("must be at least {} px² per particle, got {}", MIN_DENSITY, self.density),
            ));
        }

        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return Err(invalid("max_speed", format!("must be zero or positive, got {}", self.max_speed)));
        }

        let [radius_min, radius_max] = self.radius_range;
        if !(radius_min > 0.0 && radius_min < radius_max && radius_max.is_finite()) {
            return Err(invalid(
                "radius_range",
                format!("expected 0 < min < max, got [{radius_min}, {radius_max}]"),
            ));
        }

        let [opacity_min, opacity_max] = self.opacity_range;
        if !(opacity_min > 0.0 && opacity_min < opacity_max && opacity_max <= 1.0) {
            return Err(invalid(
                "opacity_range",
                format!("expected 0 < min < max <= 1, got [{opacity_min}, {opacity_max}]"),
            ));
        }

        if !(self.window_scale > 0.0 && self.window_scale <= 1.0) {
            return Err(invalid("window_scale", format!("must lie in (0, 1], got {}", self.window_scale)));
        }

        Ok(())
    }

    pub fn hue(&self) -> Rgb<u8> {
        rgb(self.hue[0], self.hue[1], self.hue[2])
    }

    pub fn background(&self) -> Rgb<u8> {
        rgb(self.background[0], self.background[1], self.background[2])
    }

    pub fn radius_range(&self) -> std::ops::Range<f32> {
        self.radius_range[0]..self.radius_range[1]
    }

    pub fn opacity_range(&self) -> std::ops::Range<f32> {
        self.opacity_range[0]..self.opacity_range[1]
    }

    pub fn velocity_range(&self) -> std::ops::RangeInclusive<f32> {
        -self.max_speed..=self.max_speed
    }
}

fn invalid(field: &'static str, reason: String) -> FieldError {
    FieldError::InvalidConfig { field, reason }
}
