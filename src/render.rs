//! Per-phase drawing
//!
//! Rendering is a pure function of the game state: the menu shows the play
//! button, gameplay shows the paddle and block as filled rectangles, and
//! game over fills the window with its texture.

use macroquad::prelude::*;

use crate::assets::Assets;
use crate::consts::*;
use crate::sim::{GamePhase, GameState};

const BACKGROUND: Color = Color::new(33.0 / 255.0, 33.0 / 255.0, 33.0 / 255.0, 1.0);
const PADDLE_COLOR: Color = Color::new(100.0 / 255.0, 180.0 / 255.0, 1.0, 1.0);
const BLOCK_COLOR: Color = Color::new(1.0, 220.0 / 255.0, 50.0 / 255.0, 1.0);

/// Draw one frame of the current state
pub fn draw(state: &GameState, assets: &Assets) {
    clear_background(BACKGROUND);

    match state.phase {
        GamePhase::Menu => {
            let button = GameState::play_button_rect();
            draw_texture_ex(
                &assets.play_button,
                button.x,
                button.y,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(button.w, button.h)),
                    ..Default::default()
                },
            );
        }
        GamePhase::Playing => {
            let paddle = &state.paddle.rect;
            draw_rectangle(paddle.x, paddle.y, paddle.w, paddle.h, PADDLE_COLOR);

            let block = &state.block.rect;
            draw_rectangle(block.x, block.y, block.w, block.h, BLOCK_COLOR);
        }
        GamePhase::GameOver => {
            draw_texture_ex(
                &assets.game_over,
                0.0,
                0.0,
                WHITE,
                DrawTextureParams {
                    dest_size: Some(vec2(SCREEN_WIDTH, SCREEN_HEIGHT)),
                    ..Default::default()
                },
            );
        }
    }
}
