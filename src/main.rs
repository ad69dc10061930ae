/*
 * Particle Field
 *
 * Opens a window filled with slowly drifting points that bounce off the
 * window edges. The population is sized from the window area and rebuilt
 * whenever the window is resized.
 *
 * Set RUST_LOG=debug to see lifecycle and resize logging.
 */

use particle_field::app;

fn main() {
    env_logger::init();

    nannou::app(app::model)
        .update(app::update)
        .run();
}
