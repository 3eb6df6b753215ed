mod config;
mod controls;
mod scene;

pub use config::GameConfig;
pub use controls::{poll_events, Direction, KeyEvent, MoveInput};
pub use scene::{layout, Scene};
