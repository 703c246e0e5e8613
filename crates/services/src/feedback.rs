use std::sync::Arc;

use quiz_core::SoundCue;

use crate::error::SoundError;
use crate::settings_service::SoundPreference;

/// Audio output capability.
pub trait SoundPlayer: Send + Sync {
    /// Start playing `cue` without waiting for it to finish.
    ///
    /// # Errors
    ///
    /// Returns `SoundError` if the output device rejects the cue.
    fn play(&self, cue: SoundCue) -> Result<(), SoundError>;
}

/// Player for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&self, _cue: SoundCue) -> Result<(), SoundError> {
        Ok(())
    }
}

/// Plays cues through a `SoundPlayer` when sound is enabled.
#[derive(Clone)]
pub struct FeedbackPresenter {
    player: Arc<dyn SoundPlayer>,
    sound: SoundPreference,
}

impl FeedbackPresenter {
    #[must_use]
    pub fn new(player: Arc<dyn SoundPlayer>, sound: SoundPreference) -> Self {
        Self { player, sound }
    }

    /// Play `cue` unless sound is disabled. Output failures are logged and
    /// swallowed. Returns whether the cue was handed to the player.
    pub fn play(&self, cue: SoundCue) -> bool {
        if !self.sound.is_enabled() {
            return false;
        }
        match self.player.play(cue) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(cue = cue.as_str(), error = %err, "sound playback failed");
                false
            }
        }
    }

    /// Navigation click.
    pub fn click(&self) -> bool {
        self.play(SoundCue::Click)
    }
}
