use quiz_core::model::Candidate;
use quiz_core::{Difficulty, GameMode, RoundSnapshot};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::driver::Command;
use crate::error::RoundLoopError;

/// Owner of a running round. Dropping it stops the round and cancels every
/// pending tick and delay.
pub struct RoundHandle {
    mode: GameMode,
    commands: mpsc::UnboundedSender<Command>,
    snapshots: watch::Receiver<RoundSnapshot>,
    task: JoinHandle<()>,
}

impl RoundHandle {
    pub(crate) fn new(
        mode: GameMode,
        commands: mpsc::UnboundedSender<Command>,
        snapshots: watch::Receiver<RoundSnapshot>,
        task: JoinHandle<()>,
    ) -> Self {
        Self {
            mode,
            commands,
            snapshots,
            task,
        }
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Submit an answer for the question currently shown.
    ///
    /// # Errors
    ///
    /// Returns `RoundLoopError::Closed` if the driver has stopped.
    pub fn submit(&self, candidate: Candidate) -> Result<(), RoundLoopError> {
        self.send(Command::Submit(candidate))
    }

    /// Restart this round at another difficulty.
    ///
    /// # Errors
    ///
    /// Returns `RoundLoopError::Closed` if the driver has stopped.
    pub fn set_difficulty(&self, difficulty: Difficulty) -> Result<(), RoundLoopError> {
        self.send(Command::SetDifficulty(difficulty))
    }

    /// Latest published snapshot.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        self.snapshots.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RoundSnapshot> {
        self.snapshots.clone()
    }

    fn send(&self, command: Command) -> Result<(), RoundLoopError> {
        self.commands
            .send(command)
            .map_err(|_| RoundLoopError::Closed)
    }
}

impl Drop for RoundHandle {
    fn drop(&mut self) {
        self.task.abort();
        tracing::info!(mode = %self.mode, "round stopped");
    }
}
