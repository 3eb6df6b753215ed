use super::geometry::{Angle, Vector2};
use super::Wall;

/// Parametric positions of a ray/wall crossing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Position along the wall, strictly inside (0, 1)
    pub t_wall: f64,
    /// Distance along the ray's unit direction, strictly positive
    pub t_ray: f64,
}

/// A half-line cast from the caster's position.
///
/// The ray keeps a fixed angular offset from the caster heading. Its absolute
/// angle and direction are rebuilt from `heading + offset` every time the
/// caster turns, so the fan never drifts away from the heading.
#[derive(Debug, Clone)]
pub struct Ray {
    origin: Vector2,
    offset: Angle,
    angle: Angle,
    dir: Vector2,
}

impl Ray {
    pub fn new(origin: Vector2, heading: Angle, offset: Angle) -> Self {
        let angle = heading + offset;
        Self {
            origin,
            offset,
            angle,
            dir: angle.direction(),
        }
    }

    pub fn origin(&self) -> Vector2 {
        self.origin
    }

    /// Offset from the caster heading, fixed at creation
    pub fn offset(&self) -> Angle {
        self.offset
    }

    /// Absolute angle in map space
    pub fn angle(&self) -> Angle {
        self.angle
    }

    pub fn direction(&self) -> Vector2 {
        self.dir
    }

    /// Re-aim the ray for a new caster heading
    pub fn aim(&mut self, heading: Angle) {
        self.angle = heading + self.offset;
        self.dir = self.angle.direction();
    }

    pub fn move_to(&mut self, origin: Vector2) {
        self.origin = origin;
    }

    /// Solve the ray/wall 2x2 system with Cramer's rule.
    ///
    /// A denominator of exactly zero means parallel lines and yields `None`.
    /// The hit must lie strictly inside the open segment and strictly in front
    /// of the origin; rays have no range limit.
    #[inline]
    pub fn intersect(&self, wall: &Wall) -> Option<Intersection> {
        let nwx = (wall.y2 - wall.y1) as f64;
        let nwy = (wall.x1 - wall.x2) as f64;
        let nrx = self.dir.y;
        let nry = -self.dir.x;

        let den = nry * nwx - nrx * nwy;
        if den == 0.0 {
            return None;
        }

        let dx = wall.x1 as f64 - self.origin.x;
        let dy = wall.y1 as f64 - self.origin.y;

        let t_wall = -(nrx * dx + nry * dy) / den;
        let t_ray = -(nwy * dy + nwx * dx) / den;

        if t_wall > 0.0 && t_wall < 1.0 && t_ray > 0.0 {
            Some(Intersection { t_wall, t_ray })
        } else {
            None
        }
    }
}
