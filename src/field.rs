/*
 * Field Module
 *
 * ParticleField is the simulation context a host view owns. It bundles the
 * particle simulation, viewport manager, render loop, configuration and
 * random source, and maps the host lifecycle onto them:
 *
 * - mount:     surface became available
 * - on_resize: surface resized
 * - on_frame:  refresh tick delivered a scheduled frame
 * - teardown:  view torn down
 */

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::canvas::Canvas;
use crate::config::FieldConfig;
use crate::render_loop::{FrameRequest, FrameScheduler, RenderLoop};
use crate::simulation::ParticleSimulation;
use crate::viewport::{ResizeListeners, ViewportManager};

pub struct ParticleField<R = StdRng> {
    config: FieldConfig,
    simulation: ParticleSimulation,
    viewport: ViewportManager,
    render_loop: RenderLoop,
    rng: R,
}

impl ParticleField<StdRng> {
    pub fn mount<C, S>(
        canvas: Option<&mut C>,
        width: u32,
        height: u32,
        config: FieldConfig,
        listeners: &mut ResizeListeners,
        scheduler: &mut S,
    ) -> Option<Self>
    where
        C: Canvas + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        Self::mount_with_rng(StdRng::from_entropy(), canvas, width, height, config, listeners, scheduler)
    }
}

impl<R: Rng> ParticleField<R> {
    // Without a surface there is nothing to do; that is a valid state, not an error.
    // An invalid config is logged and replaced by the defaults.
    pub fn mount_with_rng<C, S>(
        mut rng: R,
        canvas: Option<&mut C>,
        width: u32,
        height: u32,
        mut config: FieldConfig,
        listeners: &mut ResizeListeners,
        scheduler: &mut S,
    ) -> Option<Self>
    where
        C: Canvas + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        let Some(canvas) = canvas else {
            log::debug!("No drawable surface available, particle field stays idle");
            return None;
        };

        if let Err(err) = config.validate() {
            log::warn!("{}, falling back to default settings", err);
            config = FieldConfig::default();
        }

        let mut simulation = ParticleSimulation::new();
        let mut viewport = ViewportManager::new();
        viewport.on_available(canvas, &mut simulation, &mut rng, &config, width, height);
        viewport.attach(listeners);

        let render_loop = RenderLoop::start(config.hue(), scheduler);

        log::info!(
            "Particle field mounted on {}x{} surface with {} particles",
            width,
            height,
            simulation.len()
        );

        Some(Self {
            config,
            simulation,
            viewport,
            render_loop,
            rng,
        })
    }

    // Returns false when this view's listener is no longer registered
    pub fn on_resize<C: Canvas + ?Sized>(
        &mut self,
        canvas: &mut C,
        width: u32,
        height: u32,
        listeners: &ResizeListeners,
    ) -> bool {
        if !self.viewport.accepts(listeners) {
            return false;
        }

        self.viewport.on_resize(
            canvas,
            &mut self.simulation,
            &mut self.rng,
            &self.config,
            width,
            height,
        );
        true
    }

    pub fn on_frame<C, S>(&mut self, request: FrameRequest, canvas: &mut C, scheduler: &mut S) -> bool
    where
        C: Canvas + ?Sized,
        S: FrameScheduler + ?Sized,
    {
        self.render_loop
            .run_frame(request, &mut self.simulation, canvas, scheduler)
    }

    pub fn teardown<S: FrameScheduler + ?Sized>(&mut self, listeners: &mut ResizeListeners, scheduler: &mut S) {
        self.viewport.detach(listeners);
        self.render_loop.cancel(scheduler);
        log::info!(
            "Particle field torn down after {} frames",
            self.render_loop.frames_rendered()
        );
    }

    pub fn is_active(&self) -> bool {
        self.render_loop.is_running() && self.viewport.is_attached()
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn simulation(&self) -> &ParticleSimulation {
        &self.simulation
    }

    pub fn viewport(&self) -> &ViewportManager {
        &self.viewport
    }

    pub fn render_loop(&self) -> &RenderLoop {
        &self.render_loop
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DisplayList;
    use crate::render_loop::RefreshScheduler;

    struct Host {
        canvas: DisplayList,
        listeners: ResizeListeners,
        scheduler: RefreshScheduler,
    }

    impl Host {
        fn new() -> Self {
            Self {
                canvas: DisplayList::new(),
                listeners: ResizeListeners::new(),
                scheduler: RefreshScheduler::new(),
            }
        }

        fn mount(&mut self, width: u32, height: u32) -> ParticleField<StdRng> {
            ParticleField::mount_with_rng(
                StdRng::seed_from_u64(99),
                Some(&mut self.canvas),
                width,
                height,
                FieldConfig::default(),
                &mut self.listeners,
                &mut self.scheduler,
            )
            .unwrap()
        }

        // Deliver one refresh tick
        fn tick(&mut self, field: &mut ParticleField<StdRng>) -> bool {
            match self.scheduler.take_due() {
                Some(request) => field.on_frame(request, &mut self.canvas, &mut self.scheduler),
                None => false,
            }
        }
    }

    #[test]
    fn mount_without_surface_is_quiet() {
        let mut listeners = ResizeListeners::new();
        let mut scheduler = RefreshScheduler::new();

        let field = ParticleField::mount::<DisplayList, _>(
            None,
            800,
            600,
            FieldConfig::default(),
            &mut listeners,
            &mut scheduler,
        );

        assert!(field.is_none());
        assert!(listeners.is_empty());
        assert!(!scheduler.has_pending());
    }

    #[test]
    fn mount_with_invalid_config_uses_defaults() {
        let mut canvas = DisplayList::new();
        let mut listeners = ResizeListeners::new();
        let mut scheduler = RefreshScheduler::new();
        let config = FieldConfig {
            radius_range: [3.0, 1.0],
            ..FieldConfig::default()
        };

        let field = ParticleField::mount_with_rng(
            StdRng::seed_from_u64(12),
            Some(&mut canvas),
            800,
            600,
            config,
            &mut listeners,
            &mut scheduler,
        )
        .unwrap();

        assert_eq!(field.config(), &FieldConfig::default());
        assert_eq!(field.simulation().len(), 48);
        assert!(field
            .simulation()
            .particles()
            .iter()
            .all(|p| (1.0..3.0).contains(&p.radius())));
    }

    #[test]
    fn mount_populates_and_schedules() {
        let mut host = Host::new();
        let field = host.mount(800, 600);

        assert!(field.is_active());
        assert_eq!(field.simulation().len(), 48);
        assert_eq!(host.canvas.resolution(), (800, 600));
        assert_eq!(host.listeners.len(), 1);
        assert!(host.scheduler.has_pending());
    }

    #[test]
    fn ticks_draw_current_population() {
        let mut host = Host::new();
        let mut field = host.mount(800, 600);

        for _ in 0..5 {
            assert!(host.tick(&mut field));
        }

        assert_eq!(host.canvas.circle_count(), 48);
        assert_eq!(field.render_loop().frames_rendered(), 5);
    }

    #[test]
    fn resize_discards_and_regenerates() {
        let mut host = Host::new();
        let mut field = host.mount(800, 600);
        host.tick(&mut field);
        let old = field.simulation().particles().to_vec();

        assert!(field.on_resize(&mut host.canvas, 1024, 768, &host.listeners));

        // floor(1024 * 768 / 10000) = 78
        assert_eq!(field.simulation().len(), 78);
        assert_eq!(field.viewport().size(), (1024, 768));
        assert!(field.simulation().particles().iter().all(|p| !old.contains(p)));

        // The loop keeps running on the new population
        assert!(host.tick(&mut field));
        assert_eq!(host.canvas.circle_count(), 78);
    }

    #[test]
    fn resize_to_zero_area_keeps_loop_running() {
        let mut host = Host::new();
        let mut field = host.mount(800, 600);

        field.on_resize(&mut host.canvas, 0, 0, &host.listeners);

        assert!(field.simulation().is_empty());
        assert!(host.tick(&mut field));
        assert_eq!(host.canvas.circle_count(), 0);
    }

    #[test]
    fn teardown_stops_frames_and_resize_handling() {
        let mut host = Host::new();
        let mut field = host.mount(800, 600);
        host.tick(&mut field);

        field.teardown(&mut host.listeners, &mut host.scheduler);

        assert!(!field.is_active());
        assert!(host.listeners.is_empty());
        assert!(!host.scheduler.has_pending());

        let frozen = field.simulation().particles().to_vec();
        let frames = field.render_loop().frames_rendered();
        let canvas_before = host.canvas.commands().to_vec();

        // A resize after teardown must leave everything untouched
        assert!(!field.on_resize(&mut host.canvas, 1920, 1080, &host.listeners));
        assert!(!host.tick(&mut field));

        assert_eq!(field.simulation().particles(), frozen.as_slice());
        assert_eq!(field.render_loop().frames_rendered(), frames);
        assert_eq!(host.canvas.resolution(), (800, 600));
        assert_eq!(host.canvas.commands(), canvas_before.as_slice());
    }

    #[test]
    fn remounting_reuses_a_single_listener_slot() {
        let mut host = Host::new();

        for _ in 0..3 {
            let mut field = host.mount(640, 480);
            assert_eq!(host.listeners.len(), 1);
            field.teardown(&mut host.listeners, &mut host.scheduler);
        }

        assert!(host.listeners.is_empty());
    }
}
