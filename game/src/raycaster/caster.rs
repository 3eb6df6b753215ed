use super::geometry::{mix, Angle, Vector2};
use super::ray::Ray;
use super::Wall;

/// Default fan size, one ray per screen column of the 3D view
pub const NUM_RAYS: usize = 320;

/// Default field of view in degrees
pub const VIEW_ANGLE: f64 = 60.0;

/// Nearest wall hit of a single ray
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Fish-eye corrected (perpendicular) distance
    pub dist: f64,
    /// Hit point in map coordinates
    pub wall_x: f64,
    pub wall_y: f64,
}

/// The moving viewpoint and its fan of rays
pub struct Caster {
    pos: Vector2,
    heading: Angle,
    fov: f64,
    rays: Vec<Ray>,
}

impl Caster {
    /// Create a caster facing 0° with the default fan
    pub fn new(x: f64, y: f64) -> Self {
        Self::with_fan(x, y, NUM_RAYS, VIEW_ANGLE)
    }

    /// Create a caster with `num_rays` rays spread evenly over `fov` degrees.
    /// The first ray sits at -fov/2 from the heading.
    pub fn with_fan(x: f64, y: f64, num_rays: usize, fov: f64) -> Self {
        let pos = Vector2::new(x, y);
        let heading = Angle::default();
        let step = if num_rays > 0 { fov / num_rays as f64 } else { 0.0 };

        let rays = (0..num_rays)
            .map(|i| {
                let offset = Angle::from_degrees(i as f64 * step - fov / 2.0);
                Ray::new(pos, heading, offset)
            })
            .collect();

        Self {
            pos,
            heading,
            fov,
            rays,
        }
    }

    pub fn x(&self) -> f64 {
        self.pos.x
    }

    pub fn y(&self) -> f64 {
        self.pos.y
    }

    pub fn position(&self) -> Vector2 {
        self.pos
    }

    pub fn heading(&self) -> Angle {
        self.heading
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    pub fn num_rays(&self) -> usize {
        self.rays.len()
    }

    /// Turn by `da` degrees; every ray is re-aimed from the new heading
    pub fn rotate(&mut self, da: f64) {
        self.heading = self.heading.add_degrees(da);
        for ray in &mut self.rays {
            ray.aim(self.heading);
        }
    }

    /// Whether translating by `delta` keeps the rounded position at least
    /// one unit inside the map
    pub fn can_translate(&self, delta: Vector2, map_width: i32, map_height: i32) -> bool {
        let target = self.pos + delta;
        let new_x = target.x.round() as i32;
        let new_y = target.y.round() as i32;

        if new_x < 1 || new_y < 1 {
            return false;
        }

        if new_x >= map_width - 1 || new_y >= map_height - 1 {
            return false;
        }

        true
    }

    fn translate(&mut self, delta: Vector2) {
        self.pos = self.pos + delta;
        for ray in &mut self.rays {
            ray.move_to(self.pos);
        }
    }

    /// Translate only if the move stays inside the map. Rejected moves leave
    /// the caster untouched.
    pub fn try_translate(&mut self, delta: Vector2, map_width: i32, map_height: i32) -> bool {
        if !self.can_translate(delta, map_width, map_height) {
            return false;
        }
        self.translate(delta);
        true
    }

    /// Step `dd` units along the heading (negative steps back off), if the
    /// step keeps the caster inside the map
    pub fn try_advance(&mut self, dd: f64, map_width: i32, map_height: i32) -> bool {
        self.try_translate(self.heading.direction() * dd, map_width, map_height)
    }

    /// Nearest hit for every ray, in fan order.
    ///
    /// `None` marks a ray that crosses no wall. Ties go to the wall that
    /// appears first in `walls`.
    pub fn calc_ray_hits(&self, walls: &[Wall]) -> Vec<Option<RayHit>> {
        self.rays.iter().map(|ray| self.cast(ray, walls)).collect()
    }

    fn cast(&self, ray: &Ray, walls: &[Wall]) -> Option<RayHit> {
        let mut nearest: Option<(&Wall, f64, f64)> = None;

        for wall in walls {
            if let Some(hit) = ray.intersect(wall) {
                let closer = match nearest {
                    Some((_, _, t_ray)) => hit.t_ray < t_ray,
                    None => true,
                };
                if closer {
                    nearest = Some((wall, hit.t_wall, hit.t_ray));
                }
            }
        }

        nearest.map(|(wall, t_wall, t_ray)| RayHit {
            dist: t_ray * (ray.angle() - self.heading).cos(),
            wall_x: mix(wall.x1 as f64, wall.x2 as f64, t_wall),
            wall_y: mix(wall.y1 as f64, wall.y2 as f64, t_wall),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::WallMap;

    const MAP_W: i32 = 320;
    const MAP_H: i32 = 240;

    fn raw_distance(ray: &Ray, walls: &[Wall]) -> f64 {
        walls
            .iter()
            .filter_map(|w| ray.intersect(w))
            .map(|hit| hit.t_ray)
            .fold(f64::INFINITY, f64::min)
    }

    #[test]
    fn test_fan_layout() {
        let caster = Caster::new(10.0, 10.0);
        assert_eq!(caster.num_rays(), NUM_RAYS);

        let first = caster.rays()[0].offset().degrees();
        let last = caster.rays()[NUM_RAYS - 1].offset().degrees();
        let step = VIEW_ANGLE / NUM_RAYS as f64;

        assert!((first + VIEW_ANGLE / 2.0).abs() < 1e-9);
        assert!((last - (VIEW_ANGLE / 2.0 - step)).abs() < 1e-9);

        for pair in caster.rays().windows(2) {
            let gap = pair[1].offset().degrees() - pair[0].offset().degrees();
            assert!((gap - step).abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_ray_end_to_end() {
        let map = WallMap::boundary(MAP_W, MAP_H);
        let caster = Caster::with_fan(160.0, 120.0, 1, 0.0);

        let hits = caster.calc_ray_hits(map.walls());
        assert_eq!(hits.len(), 1);

        let hit = hits[0].expect("ray straight ahead should hit the right wall");
        assert!((hit.wall_x - 319.0).abs() < 1e-9);
        assert!((hit.wall_y - 120.0).abs() < 1e-9);
        assert!((hit.dist - 159.0).abs() < 1e-9);
    }

    #[test]
    fn test_nearest_wall_wins() {
        let walls = vec![
            Wall::new(50, 0, 50, 20),
            Wall::new(30, 0, 30, 20),
            Wall::new(40, 0, 40, 20),
        ];
        let caster = Caster::with_fan(0.0, 10.0, 1, 0.0);

        let hit = caster.calc_ray_hits(&walls)[0].expect("hit");
        assert!((hit.wall_x - 30.0).abs() < 1e-9);
        assert!((hit.dist - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_tie_goes_to_first_wall() {
        // Two walls crossing the ray at the same point, different slopes
        let walls = vec![Wall::new(20, 0, 20, 20), Wall::new(10, 0, 30, 20)];
        let caster = Caster::with_fan(0.0, 10.0, 1, 0.0);

        let hits = caster.calc_ray_hits(&walls);
        let hit = hits[0].expect("hit");
        assert!((hit.wall_x - 20.0).abs() < 1e-9);
        assert!((hit.wall_y - 10.0).abs() < 1e-9);

        // Same point either way; check the first wall's t_wall was the one kept
        let ray = &caster.rays()[0];
        let first = ray.intersect(&walls[0]).expect("hit");
        let second = ray.intersect(&walls[1]).expect("hit");
        assert_eq!(first.t_ray, second.t_ray);
        assert_eq!(hit.wall_y, mix(0.0, 20.0, first.t_wall));
    }

    #[test]
    fn test_no_hit_is_none() {
        let walls = vec![Wall::new(-10, -10, -10, -20)];
        let caster = Caster::with_fan(0.0, 0.0, 4, 60.0);

        let hits = caster.calc_ray_hits(&walls);
        assert_eq!(hits.len(), 4);
        assert!(hits.iter().all(|h| h.is_none()));
    }

    #[test]
    fn test_fisheye_correction() {
        let map = WallMap::boundary(MAP_W, MAP_H);
        let caster = Caster::new(160.0, 120.0);
        let hits = caster.calc_ray_hits(map.walls());

        // Center ray (offset 0) keeps its raw distance
        let center = NUM_RAYS / 2;
        assert!(caster.rays()[center].offset().radians().abs() < 1e-12);
        let raw = raw_distance(&caster.rays()[center], map.walls());
        let hit = hits[center].expect("hit");
        assert!((hit.dist - raw).abs() < 1e-9);

        // Outermost ray is shortened
        let raw = raw_distance(&caster.rays()[0], map.walls());
        let hit = hits[0].expect("hit");
        assert!(hit.dist < raw);
        let expected = raw * caster.rays()[0].offset().cos();
        assert!((hit.dist - expected).abs() < 1e-9);
    }

    #[test]
    fn test_flat_wall_has_flat_depth() {
        // Facing a wall perpendicular to the heading: every corrected
        // distance equals the perpendicular distance
        let map = WallMap::boundary(MAP_W, MAP_H);
        let caster = Caster::new(160.0, 120.0);

        for hit in caster.calc_ray_hits(map.walls()).into_iter().flatten() {
            assert!((hit.wall_x - 319.0).abs() < 1e-9);
            assert!((hit.dist - 159.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_hits_are_deterministic() {
        let map = WallMap::generate(MAP_W, MAP_H, 12, 99);
        let mut caster = Caster::new(100.0, 70.0);
        caster.rotate(33.0);

        let a = caster.calc_ray_hits(map.walls());
        let b = caster.calc_ray_hits(map.walls());
        assert_eq!(a, b);
    }

    #[test]
    fn test_rotate_keeps_fan_attached() {
        let mut caster = Caster::new(160.0, 120.0);
        for _ in 0..1000 {
            caster.rotate(0.5);
        }
        for _ in 0..400 {
            caster.rotate(-0.5);
        }
        assert!((caster.heading().degrees() - 300.0).abs() < 1e-6);

        for ray in caster.rays() {
            let rel = ray.angle().radians_between(caster.heading());
            assert!((rel - ray.offset().radians()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_move_rejected_at_margin() {
        let mut caster = Caster::new(1.0, 1.0);
        assert!(!caster.try_translate(Vector2::new(-1.0, -1.0), MAP_W, MAP_H));
        assert_eq!(caster.position(), Vector2::new(1.0, 1.0));
        for ray in caster.rays() {
            assert_eq!(ray.origin(), Vector2::new(1.0, 1.0));
        }
    }

    #[test]
    fn test_move_accepted_inside() {
        let mut caster = Caster::new(1.0, 1.0);
        assert!(caster.try_translate(Vector2::new(1.0, 0.0), MAP_W, MAP_H));
        assert_eq!(caster.position(), Vector2::new(2.0, 1.0));
        for ray in caster.rays() {
            assert_eq!(ray.origin(), Vector2::new(2.0, 1.0));
        }
    }

    #[test]
    fn test_move_rejected_at_far_edge() {
        let caster = Caster::new((MAP_W - 2) as f64, 100.0);
        // Staying at width-2 is fine, reaching width-1 is not
        assert!(caster.can_translate(Vector2::new(0.4, 0.0), MAP_W, MAP_H));
        assert!(!caster.can_translate(Vector2::new(1.0, 0.0), MAP_W, MAP_H));

        let caster = Caster::new(100.0, (MAP_H - 2) as f64);
        assert!(!caster.can_translate(Vector2::new(0.0, 0.6), MAP_W, MAP_H));
    }

    #[test]
    fn test_advance_uses_heading() {
        let mut caster = Caster::new(2.0, 100.0);
        // Facing +x: x = 0.4 rounds to 0 and is rejected
        assert!(!caster.try_advance(-1.6, MAP_W, MAP_H));
        assert_eq!(caster.position(), Vector2::new(2.0, 100.0));

        // x = 1.5 rounds to 2 and is fine
        assert!(caster.try_advance(-0.5, MAP_W, MAP_H));
        assert!((caster.x() - 1.5).abs() < 1e-9);

        caster.rotate(180.0);
        assert!(!caster.try_advance(1.6, MAP_W, MAP_H));
        assert!((caster.x() - 1.5).abs() < 1e-9);

        assert!(caster.try_advance(-10.0, MAP_W, MAP_H));
        assert!((caster.x() - 11.5).abs() < 1e-9);
        assert!((caster.y() - 100.0).abs() < 1e-9);
    }
}
