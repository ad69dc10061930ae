/*
 * Frame Statistics Module
 *
 * This module defines the FrameStats struct that holds performance metrics
 * and field state shown in the debug overlay.
 *
 * Includes metrics for:
 * - FPS (frames per second)
 * - Frame time
 * - Frames rendered by the particle loop
 * - Current particle count and surface size
 */

use std::time::Duration;

use rand::Rng;

use crate::field::ParticleField;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameStats {
    pub fps: f32,
    pub frame_time: Duration,
    pub frames_rendered: u64,
    pub particle_count: usize,
    pub surface: (u32, u32),
    pub loop_running: bool,
}

impl FrameStats {
    pub fn record<R: Rng>(&mut self, fps: f32, frame_time: Duration, field: Option<&ParticleField<R>>) {
        self.fps = fps;
        self.frame_time = frame_time;

        match field {
            Some(field) => {
                self.frames_rendered = field.render_loop().frames_rendered();
                self.particle_count = field.simulation().len();
                self.surface = field.viewport().size();
                self.loop_running = field.is_active();
            }
            None => {
                self.particle_count = 0;
                self.loop_running = false;
            }
        }
    }

    pub fn frame_time_ms(&self) -> f64 {
        self.frame_time.as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DisplayList;
    use crate::config::FieldConfig;
    use crate::render_loop::RefreshScheduler;
    use crate::viewport::ResizeListeners;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn records_field_state() {
        let mut canvas = DisplayList::new();
        let mut listeners = ResizeListeners::new();
        let mut scheduler = RefreshScheduler::new();
        let field = ParticleField::mount_with_rng(
            StdRng::seed_from_u64(4),
            Some(&mut canvas),
            800,
            600,
            FieldConfig::default(),
            &mut listeners,
            &mut scheduler,
        );

        let mut stats = FrameStats::default();
        stats.record(60.0, Duration::from_millis(16), field.as_ref());

        assert_eq!(stats.particle_count, 48);
        assert_eq!(stats.surface, (800, 600));
        assert!(stats.loop_running);
        assert!((stats.frame_time_ms() - 16.0).abs() < 1e-9);
    }

    #[test]
    fn missing_field_reports_idle() {
        let mut stats = FrameStats {
            particle_count: 12,
            loop_running: true,
            ..FrameStats::default()
        };
        stats.record::<StdRng>(30.0, Duration::from_millis(33), None);

        assert_eq!(stats.particle_count, 0);
        assert!(!stats.loop_running);
    }
}
