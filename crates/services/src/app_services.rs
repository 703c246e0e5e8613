use std::sync::Arc;

use quiz_core::{Difficulty, SoundCue};
use storage::repository::Storage;
use tokio::runtime::Handle;

use crate::error::{AppServicesError, SettingsError};
use crate::feedback::{FeedbackPresenter, SoundPlayer};
use crate::rounds::RoundLoopService;
use crate::settings_service::SettingsService;

/// Assembles app-facing services around one storage backend and one audio
/// output.
#[derive(Clone)]
pub struct AppServices {
    settings: SettingsService,
    feedback: FeedbackPresenter,
    rounds: RoundLoopService,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or loading the
    /// sound preference fails.
    pub async fn new_sqlite(
        db_url: &str,
        difficulty: Difficulty,
        player: Arc<dyn SoundPlayer>,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::from_storage(storage, difficulty, player).await
    }

    /// Build services backed by in-memory storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if loading the sound preference fails.
    pub async fn in_memory(
        difficulty: Difficulty,
        player: Arc<dyn SoundPlayer>,
    ) -> Result<Self, AppServicesError> {
        Self::from_storage(Storage::in_memory(), difficulty, player).await
    }

    /// # Errors
    ///
    /// Returns `AppServicesError` if loading the sound preference fails.
    pub async fn from_storage(
        storage: Storage,
        difficulty: Difficulty,
        player: Arc<dyn SoundPlayer>,
    ) -> Result<Self, AppServicesError> {
        let settings = SettingsService::new(Arc::clone(&storage.preferences), difficulty);
        settings.load().await?;
        let feedback = FeedbackPresenter::new(player, settings.sound_preference());
        let rounds = RoundLoopService::new(settings.clone(), feedback.clone());
        Ok(Self {
            settings,
            feedback,
            rounds,
        })
    }

    /// Run round drivers on `runtime`. See [`RoundLoopService::with_runtime`].
    #[must_use]
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.rounds = self.rounds.with_runtime(runtime);
        self
    }

    #[must_use]
    pub fn settings(&self) -> &SettingsService {
        &self.settings
    }

    #[must_use]
    pub fn feedback(&self) -> &FeedbackPresenter {
        &self.feedback
    }

    #[must_use]
    pub fn rounds(&self) -> &RoundLoopService {
        &self.rounds
    }

    /// Persist the sound toggle; turning sound on plays a preview cue.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the preference cannot be stored.
    pub async fn toggle_sound(&self, enabled: bool) -> Result<(), SettingsError> {
        self.settings.set_sound_enabled(enabled).await?;
        if enabled {
            self.feedback.play(SoundCue::Correct);
        }
        Ok(())
    }
}
