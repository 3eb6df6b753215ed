//! Line-segment raycaster: a top-down map of walls next to a first-person
//! projection cast from a movable viewpoint.

pub mod game;
pub mod map;
pub mod raycaster;
