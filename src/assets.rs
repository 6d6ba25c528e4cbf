//! Asset loading
//!
//! All assets are loaded once before the game loop starts. A missing or
//! corrupt file is fatal; the caller reports it and exits.

use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::*;

/// File paths, relative to the working directory
pub const PLAY_BUTTON_PATH: &str = "assets/play_button.png";
pub const GAME_OVER_PATH: &str = "assets/game_over.png";
pub const MUSIC_PATH: &str = "assets/background_music.ogg";

/// Textures and music owned for the lifetime of the process.
///
/// Dropping this releases the GPU textures and the decoded sound, so
/// cleanup happens on every exit path.
pub struct Assets {
    pub play_button: Texture2D,
    pub game_over: Texture2D,
    pub music: Sound,
}

impl Assets {
    /// Load every asset, failing on the first missing file
    pub async fn load() -> Result<Self, macroquad::Error> {
        let play_button = load_texture(PLAY_BUTTON_PATH).await?;
        log::debug!("loaded {PLAY_BUTTON_PATH}");

        let game_over = load_texture(GAME_OVER_PATH).await?;
        log::debug!("loaded {GAME_OVER_PATH}");

        let music = load_sound(MUSIC_PATH).await?;
        log::debug!("loaded {MUSIC_PATH}");

        Ok(Self {
            play_button,
            game_over,
            music,
        })
    }
}
