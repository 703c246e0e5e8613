use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use quiz_core::Difficulty;
use storage::repository::PreferenceStore;
use tokio::sync::watch;

use crate::error::SettingsError;

/// Preference key under which the sound toggle is persisted.
pub const SOUND_ENABLED_KEY: &str = "soundEnabled";

/// Shared, cheaply cloned view of the sound toggle.
#[derive(Debug, Clone)]
pub struct SoundPreference(Arc<AtomicBool>);

impl SoundPreference {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::Relaxed);
    }
}

impl Default for SoundPreference {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Process-wide difficulty and sound settings.
///
/// Difficulty lives only for the process and is broadcast to running rounds;
/// the sound toggle is persisted on every change.
#[derive(Clone)]
pub struct SettingsService {
    prefs: Arc<dyn PreferenceStore>,
    difficulty: Arc<watch::Sender<Difficulty>>,
    sound: SoundPreference,
}

impl SettingsService {
    #[must_use]
    pub fn new(prefs: Arc<dyn PreferenceStore>, difficulty: Difficulty) -> Self {
        let (tx, _rx) = watch::channel(difficulty);
        Self {
            prefs,
            difficulty: Arc::new(tx),
            sound: SoundPreference::default(),
        }
    }

    /// Read the persisted sound preference (default on) into memory.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the preference store cannot be read.
    pub async fn load(&self) -> Result<bool, SettingsError> {
        let enabled = self.prefs.get_bool(SOUND_ENABLED_KEY).await?.unwrap_or(true);
        self.sound.set(enabled);
        tracing::debug!(enabled, "loaded sound preference");
        Ok(enabled)
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        *self.difficulty.borrow()
    }

    /// Change the difficulty; running rounds pick it up immediately.
    pub fn set_difficulty(&self, difficulty: Difficulty) {
        let changed = self.difficulty.send_if_modified(|current| {
            if *current == difficulty {
                return false;
            }
            *current = difficulty;
            true
        });
        if changed {
            tracing::info!(%difficulty, "difficulty changed");
        }
    }

    #[must_use]
    pub fn subscribe_difficulty(&self) -> watch::Receiver<Difficulty> {
        self.difficulty.subscribe()
    }

    #[must_use]
    pub fn sound_enabled(&self) -> bool {
        self.sound.is_enabled()
    }

    #[must_use]
    pub fn sound_preference(&self) -> SoundPreference {
        self.sound.clone()
    }

    /// Force sound on or off for this process without persisting it.
    pub fn override_sound(&self, enabled: bool) {
        self.sound.set(enabled);
        tracing::info!(enabled, "sound overridden for this session");
    }

    /// Toggle sound and persist the new value.
    ///
    /// The in-memory value changes even if persisting fails.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the preference cannot be stored.
    pub async fn set_sound_enabled(&self, enabled: bool) -> Result<(), SettingsError> {
        self.sound.set(enabled);
        self.prefs.set_bool(SOUND_ENABLED_KEY, enabled).await?;
        tracing::info!(enabled, "sound preference saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use storage::repository::InMemoryPreferences;

    use super::*;

    fn service(prefs: &InMemoryPreferences) -> SettingsService {
        SettingsService::new(Arc::new(prefs.clone()), Difficulty::default())
    }

    #[tokio::test]
    async fn sound_defaults_to_enabled() {
        let prefs = InMemoryPreferences::new();
        let settings = service(&prefs);
        assert!(settings.load().await.unwrap());
        assert!(settings.sound_enabled());
    }

    #[tokio::test]
    async fn sound_toggle_is_persisted_and_reloaded() {
        let prefs = InMemoryPreferences::new();
        let settings = service(&prefs);
        settings.set_sound_enabled(false).await.unwrap();
        assert_eq!(prefs.get_bool(SOUND_ENABLED_KEY).await.unwrap(), Some(false));

        let reloaded = service(&prefs);
        assert!(!reloaded.load().await.unwrap());
        assert!(!reloaded.sound_enabled());
    }

    #[tokio::test]
    async fn sound_preference_handle_tracks_toggle() {
        let prefs = InMemoryPreferences::new();
        let settings = service(&prefs);
        let handle = settings.sound_preference();
        settings.set_sound_enabled(false).await.unwrap();
        assert!(!handle.is_enabled());
    }

    #[tokio::test]
    async fn difficulty_changes_are_broadcast_once() {
        let settings = service(&InMemoryPreferences::new());
        let mut rx = settings.subscribe_difficulty();
        assert_eq!(*rx.borrow_and_update(), Difficulty::Medium);

        settings.set_difficulty(Difficulty::Medium);
        assert!(!rx.has_changed().unwrap());

        settings.set_difficulty(Difficulty::Hard);
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Difficulty::Hard);
        assert_eq!(settings.difficulty(), Difficulty::Hard);
    }
}
