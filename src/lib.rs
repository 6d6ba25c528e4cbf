//! Blockfall - a catch-the-falling-blocks arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddle, block, phase transitions)
//! - `render`: Per-phase drawing of the game state
//! - `assets`: Startup texture/music loading
//! - `audio`: Looping background music control

pub mod assets;
pub mod audio;
pub mod render;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Window dimensions (fixed, non-resizable)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Paddle geometry - sits just above the bottom edge
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    pub const PADDLE_BOTTOM_MARGIN: f32 = 10.0;
    /// Horizontal paddle speed in pixels per frame (keyboard control)
    pub const PADDLE_SPEED: f32 = 10.0;

    /// Falling block geometry and speed
    pub const BLOCK_SIZE: f32 = 30.0;
    /// Downward block speed in pixels per frame
    pub const BLOCK_SPEED: f32 = 5.0;

    /// Misses allowed before the run ends
    pub const MAX_MISTAKES: u32 = 5;

    /// Play button dimensions (centered on screen in the menu)
    pub const PLAY_BUTTON_WIDTH: f32 = 250.0;
    pub const PLAY_BUTTON_HEIGHT: f32 = 100.0;
}
