use raylib::prelude::Color;

use super::canvas::Canvas;

/// Number of boundary walls at the start of every wall list
pub const BOUNDARY_WALLS: usize = 4;

/// Immutable line segment in map coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Wall {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Draw the wall scaled and offset into a viewport
    pub fn draw<C: Canvas>(&self, canvas: &mut C, x_offset: f64, y_offset: f64, scale: f64, color: Color) {
        let x1 = (self.x1 as f64 * scale + x_offset).round() as i32;
        let y1 = (self.y1 as f64 * scale + y_offset).round() as i32;
        let x2 = (self.x2 as f64 * scale + x_offset).round() as i32;
        let y2 = (self.y2 as f64 * scale + y_offset).round() as i32;

        canvas.draw_line(x1, y1, x2, y2, color);
    }
}
