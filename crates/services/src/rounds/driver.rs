use std::pin::Pin;

use quiz_core::model::{Candidate, RoundPhase};
use quiz_core::{Difficulty, QuestionSource, Resolution, RoundController, RoundError, RoundSnapshot};
use tokio::sync::{mpsc, watch};
use tokio::time::{Sleep, sleep, sleep_until};

use super::{ADVANCE_DELAY, TICK_INTERVAL};
use crate::feedback::FeedbackPresenter;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Command {
    Submit(Candidate),
    SetDifficulty(Difficulty),
}

enum Event {
    Command(Option<Command>),
    Difficulty(bool),
    Tick,
    Advance,
}

type Timer = Option<Pin<Box<Sleep>>>;

/// Sole writer of one round controller.
pub(crate) struct Driver<S> {
    controller: RoundController<S>,
    feedback: FeedbackPresenter,
    snapshots: watch::Sender<RoundSnapshot>,
    commands: mpsc::UnboundedReceiver<Command>,
    difficulty: watch::Receiver<Difficulty>,
    follow_settings: bool,
    tick: Timer,
    advance: Timer,
}

impl<S: QuestionSource> Driver<S> {
    pub(crate) fn new(
        controller: RoundController<S>,
        feedback: FeedbackPresenter,
        snapshots: watch::Sender<RoundSnapshot>,
        commands: mpsc::UnboundedReceiver<Command>,
        difficulty: watch::Receiver<Difficulty>,
    ) -> Self {
        Self {
            controller,
            feedback,
            snapshots,
            commands,
            difficulty,
            follow_settings: true,
            tick: None,
            advance: None,
        }
    }

    pub(crate) async fn run(mut self) {
        self.rearm();
        loop {
            let event = tokio::select! {
                command = self.commands.recv() => Event::Command(command),
                changed = self.difficulty.changed(), if self.follow_settings => {
                    Event::Difficulty(changed.is_ok())
                }
                () = wait(&mut self.tick) => Event::Tick,
                () = wait(&mut self.advance) => Event::Advance,
            };

            let before = (self.controller.round(), self.controller.phase());
            match event {
                Event::Command(None) => break,
                Event::Command(Some(Command::Submit(candidate))) => {
                    if let Some(resolution) = self.controller.submit(candidate) {
                        self.announce(resolution);
                    }
                }
                Event::Command(Some(Command::SetDifficulty(difficulty))) => {
                    self.change_difficulty(difficulty);
                }
                Event::Difficulty(true) => {
                    let difficulty = *self.difficulty.borrow_and_update();
                    self.change_difficulty(difficulty);
                }
                Event::Difficulty(false) => self.follow_settings = false,
                Event::Tick => self.on_tick(),
                Event::Advance => {
                    self.advance = None;
                    if let Err(err) = self.controller.advance() {
                        self.load_failed(&err);
                    }
                    // A failed retry leaves phase and round untouched.
                    if self.controller.phase() == RoundPhase::Loading {
                        self.rearm();
                    }
                }
            }
            if before != (self.controller.round(), self.controller.phase()) {
                self.rearm();
            }
            self.publish();
        }
        tracing::debug!(mode = %self.controller.mode(), "round driver finished");
    }

    fn on_tick(&mut self) {
        let next = self
            .tick
            .take()
            .map(|timer| timer.deadline() + TICK_INTERVAL);
        if let Some(resolution) = self.controller.tick() {
            self.announce(resolution);
        } else if let Some(next) = next {
            self.tick = Some(Box::pin(sleep_until(next)));
        }
    }

    fn change_difficulty(&mut self, difficulty: Difficulty) {
        match self.controller.set_difficulty(difficulty) {
            Ok(true) => tracing::info!(
                mode = %self.controller.mode(),
                %difficulty,
                "round restarted for new difficulty"
            ),
            Ok(false) => {}
            Err(err) => self.load_failed(&err),
        }
    }

    /// Arms the timer that belongs to the current phase and drops the other.
    fn rearm(&mut self) {
        match self.controller.phase() {
            RoundPhase::AwaitingAnswer => {
                self.tick = Some(Box::pin(sleep(TICK_INTERVAL)));
                self.advance = None;
            }
            RoundPhase::Resolved | RoundPhase::Loading => {
                self.tick = None;
                self.advance = Some(Box::pin(sleep(ADVANCE_DELAY)));
            }
        }
    }

    fn announce(&self, resolution: Resolution) {
        tracing::debug!(
            mode = %self.controller.mode(),
            round = self.controller.round(),
            outcome = ?resolution.outcome,
            score_delta = resolution.score_delta,
            score = self.controller.state().score,
            "round resolved"
        );
        self.feedback.play(resolution.cue);
    }

    fn load_failed(&self, err: &RoundError) {
        tracing::warn!(
            mode = %self.controller.mode(),
            error = %err,
            "no question available; retrying after delay"
        );
    }

    fn publish(&self) {
        let next = self.controller.snapshot();
        self.snapshots.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            *current = next;
            true
        });
    }
}

async fn wait(timer: &mut Timer) {
    match timer {
        Some(timer) => timer.as_mut().await,
        None => std::future::pending().await,
    }
}
