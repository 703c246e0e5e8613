//! Async driver for the round controller.
//!
//! One task per mode visit owns the controller and both timers. The UI talks
//! to it through a `RoundHandle`; dropping the handle aborts the task.

mod driver;
mod handle;
mod service;

use std::time::Duration;

pub use handle::RoundHandle;
pub use service::RoundLoopService;

/// Countdown step while a question awaits an answer.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Feedback pause between a resolution and the next question. Also the retry
/// interval after a failed load.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(1_500);
