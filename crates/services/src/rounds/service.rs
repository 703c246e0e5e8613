use quiz_core::{GameMode, QuestionSource, RandomQuestions, RoundController};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};

use super::driver::Driver;
use super::handle::RoundHandle;
use crate::feedback::FeedbackPresenter;
use crate::settings_service::SettingsService;

/// Starts one driver task per mode visit.
#[derive(Clone)]
pub struct RoundLoopService {
    settings: SettingsService,
    feedback: FeedbackPresenter,
    seed: Option<u64>,
    runtime: Option<Handle>,
}

impl RoundLoopService {
    #[must_use]
    pub fn new(settings: SettingsService, feedback: FeedbackPresenter) -> Self {
        Self {
            settings,
            feedback,
            seed: None,
            runtime: None,
        }
    }

    /// Use a fixed seed for question generation instead of OS entropy.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Spawn drivers on `runtime` rather than the caller's ambient runtime.
    /// Needed when rounds start from a thread that is not inside tokio.
    #[must_use]
    pub fn with_runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Start a round of `mode` at the current settings difficulty.
    ///
    /// # Panics
    ///
    /// Panics if no runtime was configured and this is called outside a
    /// tokio runtime.
    #[must_use]
    pub fn start(&self, mode: GameMode) -> RoundHandle {
        let rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.start_with_source(mode, RandomQuestions::new(rng))
    }

    /// Like [`start`](Self::start) with a caller-supplied question source.
    ///
    /// # Panics
    ///
    /// Same as [`start`](Self::start).
    #[must_use]
    pub fn start_with_source<S>(&self, mode: GameMode, source: S) -> RoundHandle
    where
        S: QuestionSource + Send + 'static,
    {
        let mut difficulty_rx = self.settings.subscribe_difficulty();
        let difficulty = *difficulty_rx.borrow_and_update();
        let mut controller = RoundController::new(mode, difficulty, source);
        if let Err(err) = controller.start() {
            tracing::warn!(%mode, error = %err, "first question unavailable; retrying after delay");
        }
        tracing::info!(%mode, %difficulty, "round started");

        let (snapshot_tx, snapshot_rx) = watch::channel(controller.snapshot());
        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let driver = Driver::new(
            controller,
            self.feedback.clone(),
            snapshot_tx,
            command_rx,
            difficulty_rx,
        );
        let task = match &self.runtime {
            Some(runtime) => runtime.spawn(driver.run()),
            None => tokio::spawn(driver.run()),
        };
        RoundHandle::new(mode, command_tx, snapshot_rx, task)
    }
}
