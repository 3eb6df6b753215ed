use super::canvas::Canvas;
use super::caster::RayHit;
use super::geometry::{gray, remap};
use super::view::Viewport;

/// Brightness of a wall at distance 0, in percent
const NEAR_BRIGHTNESS: f64 = 100.0;

/// Strip height for a corrected hit distance.
///
/// Distance 0 fills the whole viewport, `map_width` and beyond give 0.
pub fn column_height(dist: f64, map_width: f64, view_height: i32) -> i32 {
    let h = remap(dist, 0.0, map_width, view_height as f64, 0.0) as i32;
    h.clamp(0, view_height)
}

/// Gray percentage for a corrected hit distance, falling off with its square
pub fn column_shade(dist: f64, map_width: f64) -> u8 {
    let b = remap(dist * dist, 0.0, map_width * map_width, NEAR_BRIGHTNESS, 0.0);
    b.clamp(0.0, NEAR_BRIGHTNESS) as u8
}

/// First-person projection: one column per ray, left to right
pub struct View3D {
    viewport: Viewport,
}

impl View3D {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Draw a vertically centered strip per hit. Rays without a hit leave
    /// their column empty.
    pub fn draw<C: Canvas>(&self, canvas: &mut C, hits: &[Option<RayHit>], map_width: i32) {
        // A fan wider than the viewport leaves no room for columns
        let col_width = match i32::try_from(hits.len()) {
            Ok(n) if n > 0 => self.viewport.width / n,
            _ => 0,
        };

        if col_width > 0 {
            let vp = self.viewport;
            let map_width = map_width as f64;

            for (i, hit) in hits.iter().enumerate() {
                let Some(hit) = hit else {
                    continue;
                };

                let h = column_height(hit.dist, map_width, vp.height);
                let color = gray(column_shade(hit.dist, map_width));

                canvas.fill_rect(vp.x + i as i32 * col_width, vp.y + (vp.height - h) / 2, col_width, h, color);
            }
        }

        self.viewport.draw_border(canvas);
    }
}
