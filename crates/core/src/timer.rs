/// Whole-second countdown for one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTimer {
    limit: u32,
    remaining: u32,
}

impl RoundTimer {
    #[must_use]
    pub fn new(limit_secs: u32) -> Self {
        Self {
            limit: limit_secs,
            remaining: limit_secs,
        }
    }

    pub fn reset(&mut self) {
        self.remaining = self.limit;
    }

    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_up(&self) -> bool {
        self.remaining == 0
    }

    /// Counts down one second if `running`. Returns `true` only on the tick
    /// that reaches zero.
    pub fn tick_if_running(&mut self, running: bool) -> bool {
        if !running || self.is_up() {
            return false;
        }
        self.remaining -= 1;
        self.is_up()
    }
}
