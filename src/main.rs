//! Blockfall entry point
//!
//! Owns the window, samples input, drives the simulation one tick per
//! frame, and applies the sim's events (music, logging) at the edge.

use macroquad::prelude::*;

use blockfall::assets::Assets;
use blockfall::audio::Music;
use blockfall::consts::*;
use blockfall::render;
use blockfall::sim::{tick, GameEvent, GameState, TickInput};

fn window_conf() -> Conf {
    Conf {
        window_title: "Catch the Block".to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    log::info!("Blockfall starting...");

    let assets = match Assets::load().await {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("failed to load assets: {e}");
            std::process::exit(1);
        }
    };
    let music = Music::new(&assets.music);

    let seed = macroquad::miniquad::date::now() as u64;
    let mut state = GameState::new(seed);
    log::info!("game initialized with seed {seed}");

    let mut last_mouse = mouse_position();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        let mouse = mouse_position();
        let input = TickInput {
            // Only report the pointer on frames where it actually moved,
            // so keyboard control works while the mouse is at rest
            pointer_x: (mouse != last_mouse).then_some(mouse.0),
            pointer_down: is_mouse_button_pressed(MouseButton::Left).then_some(mouse),
            move_left: is_key_down(KeyCode::Left),
            move_right: is_key_down(KeyCode::Right),
        };
        last_mouse = mouse;

        tick(&mut state, &input);

        for event in state.drain_events() {
            match event {
                GameEvent::Started => {
                    log::info!("game started");
                    music.play();
                }
                GameEvent::Caught => log::info!("caught it!"),
                GameEvent::Missed { mistakes } => {
                    log::info!("missed! mistakes: {mistakes}/{MAX_MISTAKES}");
                }
                GameEvent::GameOver => {
                    log::info!("game over");
                    music.stop();
                }
            }
        }

        render::draw(&state, &assets);
        next_frame().await;
    }

    log::info!("Blockfall shutting down");
}
