use services::{AppServices, FeedbackPresenter, RoundLoopService, SettingsService};

/// Services shared with every view. Provided by the composition root
/// (e.g. `crates/app`) through `LaunchBuilder::with_context`.
#[derive(Clone)]
pub struct AppContext {
    services: AppServices,
}

impl AppContext {
    #[must_use]
    pub fn new(services: AppServices) -> Self {
        Self { services }
    }

    #[must_use]
    pub fn services(&self) -> &AppServices {
        &self.services
    }

    #[must_use]
    pub fn settings(&self) -> &SettingsService {
        self.services.settings()
    }

    #[must_use]
    pub fn feedback(&self) -> &FeedbackPresenter {
        self.services.feedback()
    }

    #[must_use]
    pub fn rounds(&self) -> &RoundLoopService {
        self.services.rounds()
    }

    /// Navigation click sound.
    pub fn click(&self) {
        self.services.feedback().click();
    }
}

/// Build an `AppContext` from assembled services.
#[must_use]
pub fn build_app_context(services: AppServices) -> AppContext {
    AppContext::new(services)
}
