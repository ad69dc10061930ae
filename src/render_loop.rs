/*
 * Render Loop Module
 *
 * This module drives the particle field forward once per display refresh.
 * Every frame steps the simulation, clears the canvas, draws one filled
 * circle per particle, and then asks the scheduler for the next frame.
 *
 * The loop is an explicit task rather than a chain of callbacks. A shared
 * LoopHandle flag is checked before a frame runs and again before the next
 * frame is requested. Cancelling the loop also withdraws its pending frame
 * request.
 */

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use nannou::prelude::*;

use crate::canvas::Canvas;
use crate::simulation::ParticleSimulation;

/// Token for one scheduled frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRequest(u64);

/// A refresh-synchronised scheduling primitive
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameRequest;

    fn cancel_frame(&mut self, request: FrameRequest);
}

/// Scheduler drained by the host once per display refresh
#[derive(Debug, Default)]
pub struct RefreshScheduler {
    next_id: u64,
    pending: Option<FrameRequest>,
}

impl RefreshScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    // Hand out the request due on this refresh tick, if any
    pub fn take_due(&mut self) -> Option<FrameRequest> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl FrameScheduler for RefreshScheduler {
    fn request_frame(&mut self) -> FrameRequest {
        let request = FrameRequest(self.next_id);
        self.next_id += 1;
        self.pending = Some(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.pending == Some(request) {
            self.pending = None;
        }
    }
}

#[derive(Clone, Debug)]
pub struct LoopHandle {
    running: Arc<AtomicBool>,
}

impl LoopHandle {
    fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn cancel(&self) {
        self.running.store(false, Ordering::Release);
    }
}

#[derive(Debug)]
pub struct RenderLoop {
    handle: LoopHandle,
    pending: Option<FrameRequest>,
    hue: Rgb<u8>,
    frames_rendered: u64,
}

impl RenderLoop {
    // Create the loop and schedule its first frame
    pub fn start<S: FrameScheduler + ?Sized>(hue: Rgb<u8>, scheduler: &mut S) -> Self {
        Self {
            handle: LoopHandle::new(),
            pending: Some(scheduler.request_frame()),
            hue,
            frames_rendered: 0,
        }
    }

    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_running()
    }

    // Run the frame for `request`. Returns false if the request is stale or
    // the loop has been cancelled, in which case nothing is stepped or drawn.
    pub fn run_frame<C, S>(
        &mut self,
        request: FrameRequest,
        simulation: &mut ParticleSimulation,
        canvas: &mut C,
        scheduler: &mut S,
    ) -> bool
    where
        C: Canvas + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        if self.pending != Some(request) {
            return false;
        }
        self.pending = None;

        if !self.handle.is_running() {
            return false;
        }

        simulation.step();
        draw_particles(simulation, canvas, self.hue);
        self.frames_rendered += 1;

        if self.handle.is_running() {
            self.pending = Some(scheduler.request_frame());
        }

        true
    }

    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.handle.cancel();
        if let Some(request) = self.pending.take() {
            scheduler.cancel_frame(request);
        }
    }

    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }
}

// Clear the whole surface and paint every particle in its current state
pub fn draw_particles<C: Canvas + ?Sized>(simulation: &ParticleSimulation, canvas: &mut C, hue: Rgb<u8>) {
    let (width, height) = canvas.resolution();
    canvas.clear_rect(0.0, 0.0, width as f32, height as f32);

    for particle in simulation.particles() {
        canvas.fill_circle(particle.position(), particle.radius(), hue, particle.opacity());
    }
}
