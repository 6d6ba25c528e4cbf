//! Background music control
//!
//! One looping track, started when gameplay begins and halted on game
//! over. Volume and track are fixed.

use macroquad::audio::{play_sound, stop_sound, PlaySoundParams, Sound};

/// Play/stop handle for the looping background track
pub struct Music<'a> {
    sound: &'a Sound,
}

impl<'a> Music<'a> {
    pub fn new(sound: &'a Sound) -> Self {
        Self { sound }
    }

    /// Start looping playback from the beginning
    pub fn play(&self) {
        play_sound(
            self.sound,
            PlaySoundParams {
                looped: true,
                volume: 1.0,
            },
        );
    }

    /// Halt playback
    pub fn stop(&self) {
        stop_sound(self.sound);
    }
}
