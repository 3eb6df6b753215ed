use raylib::prelude::Color;

use super::canvas::Canvas;
use super::caster::RayHit;
use super::geometry::gray;
use super::view::Viewport;
use super::{Wall, BOUNDARY_WALLS};

/// Fan line brightness in percent
const FAN_GRAY: u8 = 33;

/// Top-down projection of the map, the fan and the interior walls
pub struct View2D {
    viewport: Viewport,
    /// Map units to pixels, fixed at construction
    scale: f64,
}

impl View2D {
    pub fn new(viewport: Viewport, scale: f64) -> Self {
        Self { viewport, scale }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn to_screen(&self, x: f64, y: f64) -> (i32, i32) {
        (
            (x * self.scale + self.viewport.x as f64).round() as i32,
            (y * self.scale + self.viewport.y as f64).round() as i32,
        )
    }

    /// Draw the fan from the caster to each hit, then the interior walls
    /// (past the first `BOUNDARY_WALLS`), then the border. The boundary walls
    /// are not drawn, the border stands in for them.
    pub fn draw<C: Canvas>(&self, canvas: &mut C, caster_x: f64, caster_y: f64, walls: &[Wall], hits: &[Option<RayHit>]) {
        let (x1, y1) = self.to_screen(caster_x, caster_y);
        let fan_color = gray(FAN_GRAY);

        for hit in hits.iter().flatten() {
            let (x2, y2) = self.to_screen(hit.wall_x, hit.wall_y);
            canvas.draw_line(x1, y1, x2, y2, fan_color);
        }

        for wall in walls.iter().skip(BOUNDARY_WALLS) {
            wall.draw(canvas, self.viewport.x as f64, self.viewport.y as f64, self.scale, Color::WHITE);
        }

        self.viewport.draw_border(canvas);
    }
}
