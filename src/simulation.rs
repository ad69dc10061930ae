/*
 * Simulation Module
 *
 * This module defines ParticleSimulation, the owner of the particle
 * population. It sizes the population from surface area, regenerates it
 * wholesale, and advances every particle by one step per call.
 */

use rand::Rng;

use crate::config::FieldConfig;
use crate::particle::Particle;

/// Number of particles for a surface: floor(width * height / density)
pub fn population_size(width: u32, height: u32, density: f32) -> usize {
    if width == 0 || height == 0 || density.is_nan() || density <= 0.0 {
        return 0;
    }

    let area = width as f64 * height as f64;
    (area / density as f64).floor() as usize
}

#[derive(Clone, Debug, Default)]
pub struct ParticleSimulation {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl ParticleSimulation {
    pub fn new() -> Self {
        Self::default()
    }

    // Build a simulation around an existing population
    pub fn from_particles(particles: Vec<Particle>, width: f32, height: f32) -> Self {
        Self {
            particles,
            width,
            height,
        }
    }

    // Throw away every particle and sample a new population for the given surface
    pub fn populate<R: Rng>(&mut self, rng: &mut R, width: u32, height: u32, config: &FieldConfig) {
        let count = population_size(width, height, config.density);
        let (w, h) = (width as f32, height as f32);

        self.particles.clear();
        self.particles.reserve(count);
        self.particles
            .extend((0..count).map(|_| Particle::spawn(rng, w, h, config)));

        self.width = w;
        self.height = h;
    }

    // Advance every particle by exactly one frame
    pub fn step(&mut self) {
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}
