//! Fixed-step game tick
//!
//! Advances the game by exactly one frame. The frame loop calls this once
//! per rendered frame (~60 Hz); speeds are expressed in pixels per frame,
//! so there is no delta time.

use super::collision::rects_intersect;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input sampled for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Absolute pointer x, present only on frames where the pointer moved;
    /// centers the paddle under the cursor
    pub pointer_x: Option<f32>,
    /// Pointer-down position this frame (menu play button)
    pub pointer_down: Option<(f32, f32)>,
    /// Left arrow held
    pub move_left: bool,
    /// Right arrow held
    pub move_right: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::Menu => update_menu(state, input),
        GamePhase::Playing => update_playing(state, input),
        GamePhase::GameOver => {}
    }
}

fn update_menu(state: &mut GameState, input: &TickInput) {
    if let Some((x, y)) = input.pointer_down {
        if GameState::play_button_rect().contains_point(x, y) {
            state.phase = GamePhase::Playing;
            state.push_event(GameEvent::Started);
        }
    }
}

fn update_playing(state: &mut GameState, input: &TickInput) {
    // Pointer positions the paddle, then keyboard adds on top of it.
    // Both can apply in the same frame; the additive behavior is intended.
    if let Some(x) = input.pointer_x {
        state.paddle.rect.x = x - state.paddle.rect.w / 2.0;
    }
    if input.move_left {
        state.paddle.rect.x -= PADDLE_SPEED;
    }
    if input.move_right {
        state.paddle.rect.x += PADDLE_SPEED;
    }
    state.paddle.clamp_to_screen();

    state.block.rect.y += BLOCK_SPEED;

    if rects_intersect(&state.paddle.rect, &state.block.rect) {
        state.push_event(GameEvent::Caught);
        state.respawn_block();
    }

    if state.block.rect.y > SCREEN_HEIGHT {
        state.mistakes += 1;
        state.push_event(GameEvent::Missed {
            mistakes: state.mistakes,
        });
        state.respawn_block();

        if state.mistakes >= MAX_MISTAKES {
            state.phase = GamePhase::GameOver;
            state.push_event(GameEvent::GameOver);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_menu_click_outside_button_ignored() {
        let mut state = GameState::new(12345);
        let input = TickInput {
            pointer_down: Some((500.0, 500.0)),
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_menu_click_on_button_starts_game() {
        let mut state = GameState::new(12345);
        let input = TickInput {
            pointer_down: Some((400.0, 300.0)),
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.drain_events(), vec![GameEvent::Started]);
    }

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        let input = TickInput {
            pointer_down: Some((400.0, 300.0)),
            ..Default::default()
        };
        tick(&mut state, &input);
        state.drain_events();
        state
    }

    #[test]
    fn test_block_falls_by_fixed_speed() {
        let mut state = playing_state(7);
        let y0 = state.block.rect.y;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.block.rect.y, y0 + BLOCK_SPEED);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.block.rect.y, y0 + 2.0 * BLOCK_SPEED);
    }

    #[test]
    fn test_pointer_centers_paddle() {
        let mut state = playing_state(7);
        let input = TickInput {
            pointer_x: Some(200.0),
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.paddle.rect.x, 200.0 - PADDLE_WIDTH / 2.0);
    }

    #[test]
    fn test_keyboard_adds_after_pointer() {
        let mut state = playing_state(7);
        let input = TickInput {
            pointer_x: Some(400.0),
            move_right: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(
            state.paddle.rect.x,
            400.0 - PADDLE_WIDTH / 2.0 + PADDLE_SPEED
        );
    }

    #[test]
    fn test_catch_resets_block() {
        let mut state = playing_state(7);
        // Place the block one step above the paddle's top edge
        state.block.rect.x = 380.0;
        state.block.rect.y = 560.0;
        state.paddle.rect.x = 350.0;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.drain_events(), vec![GameEvent::Caught]);
        assert_eq!(state.mistakes, 0);
        assert_eq!(state.block.rect.y, 0.0);
        assert!(state.block.rect.x >= 0.0);
        assert!(state.block.rect.x < SCREEN_WIDTH - BLOCK_SIZE);
    }

    #[test]
    fn test_miss_increments_mistakes_and_respawns() {
        let mut state = playing_state(7);
        // Keep the paddle out of the block's column
        state.paddle.rect.x = 0.0;
        state.block.rect.x = 700.0;
        state.block.rect.y = 596.0;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.mistakes, 1);
        assert_eq!(state.drain_events(), vec![GameEvent::Missed { mistakes: 1 }]);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.block.rect.y, 0.0);
    }

    #[test]
    fn test_final_miss_triggers_game_over() {
        let mut state = playing_state(7);
        state.mistakes = MAX_MISTAKES - 1;
        state.paddle.rect.x = 0.0;
        state.block.rect.x = 700.0;
        state.block.rect.y = 596.0;

        tick(&mut state, &TickInput::default());

        assert_eq!(state.mistakes, MAX_MISTAKES);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::Missed {
                    mistakes: MAX_MISTAKES
                },
                GameEvent::GameOver
            ]
        );
    }

    #[test]
    fn test_mistakes_never_exceed_limit() {
        let mut state = playing_state(7);
        // Park the paddle in a corner and let every block drop through
        state.paddle.rect.x = 0.0;

        for _ in 0..10_000 {
            if state.block.rect.x < PADDLE_WIDTH {
                // Would land on the paddle; push it clear
                state.block.rect.x = 700.0;
            }
            tick(&mut state, &TickInput::default());
            assert!(state.mistakes <= MAX_MISTAKES);
        }
        assert_eq!(state.mistakes, MAX_MISTAKES);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_game_over_freezes_state() {
        let mut state = playing_state(7);
        state.phase = GamePhase::GameOver;
        let block_y = state.block.rect.y;

        let input = TickInput {
            pointer_x: Some(100.0),
            move_left: true,
            ..Default::default()
        };
        tick(&mut state, &input);

        assert_eq!(state.block.rect.y, block_y);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut a = playing_state(555);
        let mut b = playing_state(555);

        let inputs = [
            TickInput {
                pointer_x: Some(120.0),
                ..Default::default()
            },
            TickInput {
                move_left: true,
                ..Default::default()
            },
            TickInput::default(),
        ];
        for _ in 0..500 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }

        assert_eq!(a.mistakes, b.mistakes);
        assert_eq!(a.block.rect.x, b.block.rect.x);
        assert_eq!(a.block.rect.y, b.block.rect.y);
    }

    proptest! {
        #[test]
        fn prop_paddle_stays_on_screen(
            pointer in proptest::option::of(-2000.0f32..2000.0),
            left in any::<bool>(),
            right in any::<bool>(),
        ) {
            let mut state = playing_state(1);
            let input = TickInput {
                pointer_x: pointer,
                move_left: left,
                move_right: right,
                ..Default::default()
            };
            tick(&mut state, &input);
            prop_assert!(state.paddle.rect.x >= 0.0);
            prop_assert!(state.paddle.rect.x <= SCREEN_WIDTH - state.paddle.rect.w);
        }
    }
}
