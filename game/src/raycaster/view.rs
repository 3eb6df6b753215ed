use raylib::prelude::Color;

use super::canvas::Canvas;

/// Border color shared by both views
pub const BORDER_COLOR: Color = Color::new(0, 50, 100, 255);

/// Screen rectangle a projector draws into, centered vertically
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(offset: i32, width: i32, height: i32, screen_height: i32) -> Self {
        Self {
            x: offset,
            y: (screen_height - height) / 2,
            width,
            height,
        }
    }

    pub fn draw_border<C: Canvas>(&self, canvas: &mut C) {
        canvas.draw_rect(self.x, self.y, self.width, self.height, BORDER_COLOR);
    }
}
