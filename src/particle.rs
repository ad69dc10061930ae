/*
 * Particle Module
 *
 * This module defines the Particle struct: a single drifting point with a
 * position, a velocity, and a radius and opacity fixed at creation.
 * Particles never interact with each other. Each one moves by its velocity
 * every step and bounces off the surface edges by reversing one velocity
 * component.
 */

use nannou::prelude::*;
use rand::Rng;

use crate::config::FieldConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    position: Point2,
    velocity: Vec2,
    radius: f32,
    opacity: f32,
}

impl Particle {
    pub fn new(position: Point2, velocity: Vec2, radius: f32, opacity: f32) -> Self {
        Self {
            position,
            velocity,
            radius,
            opacity,
        }
    }

    // Sample a fresh particle somewhere inside a width x height pixel surface
    pub fn spawn<R: Rng>(rng: &mut R, width: f32, height: f32, config: &FieldConfig) -> Self {
        let x = if width > 0.0 { rng.gen_range(0.0..width) } else { 0.0 };
        let y = if height > 0.0 { rng.gen_range(0.0..height) } else { 0.0 };

        let vx = rng.gen_range(config.velocity_range());
        let vy = rng.gen_range(config.velocity_range());

        Self {
            position: pt2(x, y),
            velocity: vec2(vx, vy),
            radius: rng.gen_range(config.radius_range()),
            opacity: rng.gen_range(config.opacity_range()),
        }
    }

    // Advance by one frame, then reflect off any edge the new position lies past.
    // The check runs after the move, so a particle can sit just outside the
    // bounds for one frame before it heads back in.
    pub fn step(&mut self, width: f32, height: f32) {
        self.position += self.velocity;

        if self.position.x < 0.0 || self.position.x > width {
            self.velocity.x = -self.velocity.x;
        }

        if self.position.y < 0.0 || self.position.y > height {
            self.velocity.y = -self.velocity.y;
        }
    }

    pub fn position(&self) -> Point2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}
