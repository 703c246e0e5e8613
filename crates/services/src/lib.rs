#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod feedback;
pub mod rounds;
pub mod settings_service;
pub mod sfx;

pub use app_services::AppServices;
pub use error::{AppServicesError, RoundLoopError, SettingsError, SoundError};
pub use feedback::{FeedbackPresenter, SilentPlayer, SoundPlayer};
pub use rounds::{ADVANCE_DELAY, RoundHandle, RoundLoopService, TICK_INTERVAL};
pub use settings_service::{SOUND_ENABLED_KEY, SettingsService, SoundPreference};
