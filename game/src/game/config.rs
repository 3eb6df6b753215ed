use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Startup settings, read from an optional JSON file.
/// Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Window size requested at startup
    pub window_width: i32,
    pub window_height: i32,

    /// Map extent in map units
    pub map_width: i32,
    pub map_height: i32,

    /// Random walls added inside the boundary
    pub interior_walls: usize,

    /// Fan size and field of view (degrees)
    pub num_rays: usize,
    pub fov_degrees: f64,

    /// Degrees turned per frame while Left/Right is held
    pub turn_step: f64,

    /// Map units moved per frame while Up/Down is held
    pub move_step: f64,

    pub target_fps: u32,

    /// Wall generator seed; time-based when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            map_width: 320,
            map_height: 240,
            interior_walls: 6,
            num_rays: 320,
            fov_degrees: 60.0,
            turn_step: 0.5,
            move_step: 0.5,
            target_fps: 100, // ~10ms per frame
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, String> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from file
    pub fn load(path: &str) -> Result<Self, String> {
        let json = std::fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.window_width < 3 || self.window_height < 1 {
            return Err(format!(
                "Window too small: {}x{}",
                self.window_width, self.window_height
            ));
        }
        if self.map_width < 3 || self.map_height < 3 {
            return Err(format!(
                "Map must be at least 3x3, got {}x{}",
                self.map_width, self.map_height
            ));
        }
        if self.num_rays == 0 {
            return Err("num_rays must be at least 1".to_string());
        }
        // Every ray needs at least one pixel column in the first-person view
        let columns = (self.window_width as f64 / 3.0 * 2.0) as usize;
        if self.num_rays > columns {
            return Err(format!(
                "num_rays must be at most {} for a {}px wide window, got {}",
                columns, self.window_width, self.num_rays
            ));
        }
        if !(0.0..180.0).contains(&self.fov_degrees) {
            return Err(format!("fov_degrees must be in [0, 180), got {}", self.fov_degrees));
        }
        if self.turn_step <= 0.0 || self.move_step <= 0.0 {
            return Err("turn_step and move_step must be positive".to_string());
        }
        if self.target_fps == 0 {
            return Err("target_fps must be at least 1".to_string());
        }
        Ok(())
    }

    /// Configured seed, or one taken from the clock
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
