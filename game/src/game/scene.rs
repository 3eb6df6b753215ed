use crate::map::WallMap;
use crate::raycaster::{Canvas, Caster, RayHit, View2D, View3D, Viewport};

use super::config::GameConfig;
use super::controls::MoveInput;

/// Owns the map, the caster and both projectors.
///
/// `hits` always matches the caster's current position and heading: every
/// accepted turn or move recomputes them before `move_by` returns.
pub struct Scene {
    map: WallMap,
    caster: Caster,
    top: View2D,
    scr: View3D,
    hits: Vec<Option<RayHit>>,
}

/// Split the screen: the top-down view gets a third of the width, the
/// first-person view the other two thirds at twice the height.
pub fn layout(screen_width: i32, screen_height: i32, map_width: i32, map_height: i32) -> (View2D, View3D) {
    let w = screen_width as f64 / 3.0;
    let scale = w / map_width as f64;
    let h = map_height as f64 * scale;

    let top = View2D::new(Viewport::new(0, (w + 1.0) as i32, h as i32, screen_height), scale);
    let scr = View3D::new(Viewport::new(w as i32, (w * 2.0) as i32, (h * 2.0) as i32, screen_height));

    (top, scr)
}

impl Scene {
    /// Generate the map from `seed` and spawn the caster at its center
    pub fn new(screen_width: i32, screen_height: i32, config: &GameConfig, seed: u64) -> Self {
        let map = WallMap::generate(config.map_width, config.map_height, config.interior_walls, seed);
        let center = map.center();
        let caster = Caster::with_fan(center.x, center.y, config.num_rays, config.fov_degrees);

        Self::with_parts(screen_width, screen_height, map, caster)
    }

    pub fn with_parts(screen_width: i32, screen_height: i32, map: WallMap, caster: Caster) -> Self {
        let (top, scr) = layout(screen_width, screen_height, map.width, map.height);
        let hits = caster.calc_ray_hits(map.walls());

        Self {
            map,
            caster,
            top,
            scr,
            hits,
        }
    }

    pub fn map(&self) -> &WallMap {
        &self.map
    }

    pub fn caster(&self) -> &Caster {
        &self.caster
    }

    pub fn hits(&self) -> &[Option<RayHit>] {
        &self.hits
    }

    /// Turn by `da` degrees, then step `dd` units along the new heading if
    /// that keeps the caster inside the map. Returns whether anything changed.
    pub fn move_by(&mut self, da: f64, dd: f64) -> bool {
        let mut dirty = false;

        if da != 0.0 {
            self.caster.rotate(da);
            dirty = true;
        }

        if dd != 0.0 && self.caster.try_advance(dd, self.map.width, self.map.height) {
            dirty = true;
        }

        if dirty {
            self.hits = self.caster.calc_ray_hits(self.map.walls());
        }

        dirty
    }

    /// Apply one frame of held input
    pub fn step(&mut self, input: &MoveInput) -> bool {
        self.move_by(input.turn, input.advance)
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) {
        self.top
            .draw(canvas, self.caster.x(), self.caster.y(), self.map.walls(), &self.hits);
        self.scr.draw(canvas, &self.hits, self.map.width);
    }
}
