//! Game state and core simulation types

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting on the play button
    Menu,
    /// Active gameplay
    Playing,
    /// Run ended after too many misses
    GameOver,
}

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
}

impl Default for Paddle {
    fn default() -> Self {
        // Centered horizontally, just above the bottom edge
        Self {
            rect: Rect::new(
                (SCREEN_WIDTH - PADDLE_WIDTH) / 2.0,
                SCREEN_HEIGHT - PADDLE_HEIGHT - PADDLE_BOTTOM_MARGIN,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
        }
    }
}

impl Paddle {
    /// Keep the paddle within the screen's horizontal bounds
    pub fn clamp_to_screen(&mut self) {
        self.rect.x = self.rect.x.clamp(0.0, SCREEN_WIDTH - self.rect.w);
    }
}

/// The falling block
#[derive(Debug, Clone)]
pub struct Block {
    pub rect: Rect,
}

impl Block {
    /// Spawn at the top edge with a random horizontal position
    pub fn spawn(rng: &mut Pcg32) -> Self {
        let mut block = Self {
            rect: Rect::new(0.0, 0.0, BLOCK_SIZE, BLOCK_SIZE),
        };
        block.respawn(rng);
        block
    }

    /// Reset to y = 0 with a new random x in [0, SCREEN_WIDTH - BLOCK_SIZE)
    pub fn respawn(&mut self, rng: &mut Pcg32) {
        self.rect.x = rng.random_range(0.0..SCREEN_WIDTH - BLOCK_SIZE);
        self.rect.y = 0.0;
    }
}

/// Something the frame loop should react to (music, logging).
///
/// The simulation itself never touches audio or I/O; it reports what
/// happened and the loop applies the side effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Play button pressed, gameplay begins
    Started,
    /// Block caught by the paddle
    Caught,
    /// Block reached the bottom; carries the new mistake total
    Missed { mistakes: u32 },
    /// Mistake limit reached
    GameOver,
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Misses so far; never exceeds MAX_MISTAKES
    pub mistakes: u32,
    /// Player paddle
    pub paddle: Paddle,
    /// The single falling block
    pub block: Block,
    /// Events produced by the most recent ticks, drained by the frame loop
    events: Vec<GameEvent>,
    /// Block respawn RNG
    rng: Pcg32,
}

impl GameState {
    /// Create a new game state in the menu phase
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let block = Block::spawn(&mut rng);
        Self {
            seed,
            phase: GamePhase::Menu,
            mistakes: 0,
            paddle: Paddle::default(),
            block,
            events: Vec::new(),
            rng,
        }
    }

    /// The menu's play button, centered on screen
    pub fn play_button_rect() -> Rect {
        Rect::new(
            (SCREEN_WIDTH - PLAY_BUTTON_WIDTH) / 2.0,
            (SCREEN_HEIGHT - PLAY_BUTTON_HEIGHT) / 2.0,
            PLAY_BUTTON_WIDTH,
            PLAY_BUTTON_HEIGHT,
        )
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the pending events, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn respawn_block(&mut self) {
        let Self { block, rng, .. } = self;
        block.respawn(rng);
    }
}
