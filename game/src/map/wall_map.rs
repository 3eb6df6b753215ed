use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::raycaster::{Vector2, Wall, BOUNDARY_WALLS};

/// Static wall set of a run.
///
/// The first four walls are the map boundary (left, top, right, bottom),
/// everything after them is interior clutter. Nothing else tells them apart.
#[derive(Debug, Clone, PartialEq)]
pub struct WallMap {
    pub width: i32,
    pub height: i32,
    walls: Vec<Wall>,
}

impl WallMap {
    /// Map with only the four boundary walls
    pub fn boundary(width: i32, height: i32) -> Self {
        let w = width - 1;
        let h = height - 1;

        let walls = vec![
            Wall::new(0, 0, 0, h),
            Wall::new(0, 0, w, 0),
            Wall::new(w, 0, w, h),
            Wall::new(0, h, w, h),
        ];

        Self { width, height, walls }
    }

    /// Boundary plus `interior` random walls. The same seed always yields
    /// the same map. Needs `width` and `height` of at least 2.
    pub fn generate(width: i32, height: i32, interior: usize, seed: u64) -> Self {
        let mut map = Self::boundary(width, height);
        let mut rng = StdRng::seed_from_u64(seed);

        let w = width - 1;
        let h = height - 1;

        map.walls.extend((0..interior).map(|_| {
            Wall::new(
                rng.gen_range(0..w),
                rng.gen_range(0..h),
                rng.gen_range(0..w),
                rng.gen_range(0..h),
            )
        }));

        map
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    /// Walls past the boundary
    pub fn interior(&self) -> &[Wall] {
        &self.walls[BOUNDARY_WALLS.min(self.walls.len())..]
    }

    /// Map center, the default spawn point
    pub fn center(&self) -> Vector2 {
        Vector2::new((self.width / 2) as f64, (self.height / 2) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_layout() {
        let map = WallMap::boundary(320, 240);
        assert_eq!(
            map.walls(),
            &[
                Wall::new(0, 0, 0, 239),
                Wall::new(0, 0, 319, 0),
                Wall::new(319, 0, 319, 239),
                Wall::new(0, 239, 319, 239),
            ]
        );
        assert!(map.interior().is_empty());
        assert_eq!(map.center(), Vector2::new(160.0, 120.0));
    }

    #[test]
    fn test_generate_is_seeded() {
        let a = WallMap::generate(320, 240, 6, 42);
        let b = WallMap::generate(320, 240, 6, 42);
        assert_eq!(a, b);
        assert_eq!(a.walls().len(), 10);
        assert_eq!(a.interior().len(), 6);

        let c = WallMap::generate(320, 240, 6, 43);
        assert_ne!(a.interior(), c.interior());
    }

    #[test]
    fn test_generate_keeps_boundary_first() {
        let map = WallMap::generate(320, 240, 20, 7);
        assert_eq!(&map.walls()[..BOUNDARY_WALLS], WallMap::boundary(320, 240).walls());
    }

    #[test]
    fn test_interior_walls_stay_inside() {
        let map = WallMap::generate(50, 30, 200, 1);
        for wall in map.interior() {
            assert!((0..49).contains(&wall.x1) && (0..49).contains(&wall.x2));
            assert!((0..29).contains(&wall.y1) && (0..29).contains(&wall.y2));
        }
    }
}
