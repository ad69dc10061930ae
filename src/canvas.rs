/*
 * Canvas Module
 *
 * This module defines the drawing surface the render loop paints onto.
 * Coordinates are device pixels with the origin at the top-left corner and
 * y growing downward.
 *
 * DisplayList is the surface the desktop host uses: it records one frame of
 * draw commands, which the view function then replays onto a nannou Draw.
 * Replay converts pixels into nannou's centred, y-up point space.
 */

use nannou::prelude::*;

/// Map a device pixel (top-left origin, y down) into nannou's centred, y-up points
pub fn pixel_to_point(x: f32, y: f32, window_rect: Rect, scale_factor: f32) -> Point2 {
    let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
    pt2(window_rect.left() + x / scale, window_rect.top() - y / scale)
}

/// A 2D raster surface the particle field can draw onto
pub trait Canvas {
    /// Backing resolution in device pixels
    fn resolution(&self) -> (u32, u32);

    fn set_resolution(&mut self, width: u32, height: u32);

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);

    fn fill_circle(&mut self, center: Point2, radius: f32, color: Rgb<u8>, alpha: f32);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Clear {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Circle {
        center: Point2,
        radius: f32,
        color: Rgb<u8>,
        alpha: f32,
    },
}

#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::Circle { .. }))
            .count()
    }

    // A clear covering the whole surface makes every earlier command invisible
    fn covers_surface(&self, x: f32, y: f32, width: f32, height: f32) -> bool {
        x <= 0.0 && y <= 0.0 && x + width >= self.width as f32 && y + height >= self.height as f32
    }

    // Paint the recorded frame onto a nannou Draw
    pub fn replay(&self, draw: &Draw, window_rect: Rect, scale_factor: f32, background: Rgb<u8>) {
        let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        let to_points = |x: f32, y: f32| pixel_to_point(x, y, window_rect, scale);

        for command in &self.commands {
            match *command {
                DrawCommand::Clear { x, y, width, height } => {
                    let top_left = to_points(x, y);
                    let (w, h) = (width / scale, height / scale);
                    draw.rect()
                        .x_y(top_left.x + w / 2.0, top_left.y - h / 2.0)
                        .w_h(w, h)
                        .color(background);
                }
                DrawCommand::Circle { center, radius, color, alpha } => {
                    draw.ellipse()
                        .xy(to_points(center.x, center.y))
                        .radius(radius / scale)
                        .color(rgba(
                            color.red as f32 / 255.0,
                            color.green as f32 / 255.0,
                            color.blue as f32 / 255.0,
                            alpha,
                        ));
                }
            }
        }
    }
}

impl Canvas for DisplayList {
    fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_resolution(&mut self, width: u32, height: u32) {
        // Like a canvas element, changing the backing size wipes its contents
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if self.covers_surface(x, y, width, height) {
            self.commands.clear();
        }
        self.commands.push(DrawCommand::Clear { x, y, width, height });
    }

    fn fill_circle(&mut self, center: Point2, radius: f32, color: Rgb<u8>, alpha: f32) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }
}
