pub mod canvas;
pub mod caster;
pub mod geometry;
pub mod map2d;
pub mod ray;
pub mod renderer;
pub mod view;
pub mod wall;

pub use canvas::Canvas;
pub use caster::{Caster, RayHit};
pub use geometry::{Angle, Vector2};
pub use map2d::View2D;
pub use renderer::View3D;
pub use view::Viewport;
pub use wall::{Wall, BOUNDARY_WALLS};
