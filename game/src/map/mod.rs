pub mod wall_map;

pub use wall_map::WallMap;
