//! Build-time settings for the simulator window and loop.

// Constants
pub const TITLE: &str = "Game Of Life";
pub const WINDOW_WIDTH: u32 = 1200;
pub const WINDOW_HEIGHT: u32 = 1200;
pub const CELL_SIZE: u32 = 20;
pub const FPS: u32 = 20;

/// RGBA colour as drawn by the renderer.
pub type Rgba = [u8; 4];

pub const BACKGROUND: Rgba = [30, 30, 30, 100];
pub const GRID_LINE: Rgba = [110, 110, 110, 50];
pub const BORDER: Rgba = [200, 200, 200, 255];
pub const BORDER_RADIUS: f32 = 16.0;

#[derive(Debug, Clone)]
pub struct Config {
    pub title: String,
    /// Logical window size in pixels.
    pub window_width: u32,
    pub window_height: u32,
    pub cell_size: u32,
    pub fps: u32,
    /// Seed for the initial random grid. `None` draws one at startup.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            cell_size: CELL_SIZE,
            fps: FPS,
            seed: None,
        }
    }
}

impl Config {
    /// The configured seed, or a fresh one from the thread RNG.
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
