/*
 * Viewport Module
 *
 * This module tracks the drawable surface's pixel size and owns the resize
 * listener of one mounted view. When the surface first becomes available, or
 * whenever it is resized, the backing resolution is updated and the whole
 * particle population is regenerated for the new area.
 *
 * ResizeListeners is the host-side registry. Each mounted view registers
 * exactly one listener and must remove it on teardown, so the registry never
 * grows across mount/unmount cycles.
 */

use rand::Rng;

use crate::canvas::Canvas;
use crate::config::FieldConfig;
use crate::simulation::ParticleSimulation;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

#[derive(Debug, Default)]
pub struct ResizeListeners {
    next_id: u64,
    active: Vec<ListenerId>,
}

impl ResizeListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.active.push(id);
        id
    }

    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.active.len();
        self.active.retain(|&active| active != id);
        self.active.len() != before
    }

    pub fn is_registered(&self, id: ListenerId) -> bool {
        self.active.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct ViewportManager {
    width: u32,
    height: u32,
    listener: Option<ListenerId>,
}

impl ViewportManager {
    pub fn new() -> Self {
        Self::default()
    }

    // Register this view's resize listener; a second call reuses the first registration
    pub fn attach(&mut self, listeners: &mut ResizeListeners) -> ListenerId {
        if let Some(id) = self.listener {
            if listeners.is_registered(id) {
                return id;
            }
        }

        let id = listeners.add();
        self.listener = Some(id);
        id
    }

    pub fn detach(&mut self, listeners: &mut ResizeListeners) -> bool {
        match self.listener.take() {
            Some(id) => listeners.remove(id),
            None => false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.listener.is_some()
    }

    // Whether resize notifications from this registry still reach us
    pub fn accepts(&self, listeners: &ResizeListeners) -> bool {
        self.listener.map_or(false, |id| listeners.is_registered(id))
    }

    pub fn on_available<C, R>(
        &mut self,
        canvas: &mut C,
        simulation: &mut ParticleSimulation,
        rng: &mut R,
        config: &FieldConfig,
        width: u32,
        height: u32,
    ) where
        C: Canvas + ?Sized,
        R: Rng,
    {
        self.apply_size(canvas, width, height);
        simulation.populate(rng, width, height, config);
    }

    // Old particles are discarded, never rescaled into the new bounds
    pub fn on_resize<C, R>(
        &mut self,
        canvas: &mut C,
        simulation: &mut ParticleSimulation,
        rng: &mut R,
        config: &FieldConfig,
        width: u32,
        height: u32,
    ) where
        C: Canvas + ?Sized,
        R: Rng,
    {
        self.apply_size(canvas, width, height);
        simulation.populate(rng, width, height, config);
        log::debug!(
            "Surface resized to {}x{}, regenerated {} particles",
            width,
            height,
            simulation.len()
        );
    }

    fn apply_size<C: Canvas + ?Sized>(&mut self, canvas: &mut C, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        canvas.set_resolution(width, height);
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
