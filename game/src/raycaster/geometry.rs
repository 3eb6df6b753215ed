use raylib::prelude::Color;
use std::f64::consts::PI;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Orientation stored in radians, built and adjusted in degrees.
/// No wraparound: the value may grow past ±2π, trig handles it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    pub fn from_degrees(deg: f64) -> Self {
        Self { rad: deg * PI / 180.0 }
    }

    pub fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    pub fn radians(self) -> f64 {
        self.rad
    }

    pub fn degrees(self) -> f64 {
        self.rad * 180.0 / PI
    }

    /// New angle turned by `deg` degrees
    pub fn add_degrees(self, deg: f64) -> Self {
        Self { rad: self.rad + deg * PI / 180.0 }
    }

    /// New angle turned back by `deg` degrees
    pub fn sub_degrees(self, deg: f64) -> Self {
        Self { rad: self.rad - deg * PI / 180.0 }
    }

    /// Raw radian difference `self - other`
    pub fn radians_between(self, other: Angle) -> f64 {
        self.rad - other.rad
    }

    pub fn sin(self) -> f64 {
        self.rad.sin()
    }

    pub fn cos(self) -> f64 {
        self.rad.cos()
    }

    /// Unit vector pointing along this angle
    pub fn direction(self) -> Vector2 {
        Vector2::new(self.cos(), self.sin()).normalized()
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, other: Angle) -> Angle {
        Angle { rad: self.rad + other.rad }
    }
}

/// Relative angle between two orientations
impl Sub for Angle {
    type Output = Angle;

    fn sub(self, other: Angle) -> Angle {
        Angle { rad: self.rad - other.rad }
    }
}

/// 2D vector in map space (f64 precision).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Divide by length. The caller must not pass a zero vector,
    /// the result would be NaN.
    pub fn normalized(self) -> Self {
        self / self.length()
    }

    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, k: f64) -> Vector2 {
        Vector2::new(self.x * k, self.y * k)
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;

    fn div(self, k: f64) -> Vector2 {
        Vector2::new(self.x / k, self.y / k)
    }
}

/// Linear interpolation between `start` and `end`
pub fn mix(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Map `x` from the input range onto the output range (no clamping)
pub fn remap(x: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Gray level from a brightness percentage (0 = black, 100 = white)
pub fn gray(percent: u8) -> Color {
    let level = (percent as f64 / 100.0 * 255.0 + 0.5) as i32;
    let w = level.min(255) as u8;
    Color::new(w, w, w, 255)
}
