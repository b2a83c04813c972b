//! Handshake configuration.

use core::time::Duration;

use super::timing;

/// Retry budget and timing for [`SyncHost`](crate::host::SyncHost).
///
/// `Default` gives the values the camera is known to sync with.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SyncConfig {
    /// SYNC frames sent before giving up with `SyncTimeout`.
    pub max_attempts: u32,
    /// Pause after the first unanswered SYNC.
    pub initial_retry_delay: Duration,
    /// Growth of the pause per further unanswered SYNC.
    pub retry_delay_step: Duration,
    /// Hardware settle time between echo validation and final confirmation.
    pub settle_time: Duration,
    /// Non-blocking reads used to assemble the echoed SYNC frame.
    pub echo_read_polls: u32,
    pub echo_poll_delay: Duration,
    /// Send ACK-for-SYNC back to the camera once the handshake is confirmed.
    pub send_final_ack: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        SyncConfig {
            max_attempts: timing::SYNC_MAX_ATTEMPTS,
            initial_retry_delay: timing::SYNC_RETRY_DELAY_INITIAL,
            retry_delay_step: timing::SYNC_RETRY_DELAY_STEP,
            settle_time: timing::SETTLE_TIME,
            echo_read_polls: timing::ECHO_READ_POLLS,
            echo_poll_delay: timing::ECHO_POLL_DELAY,
            send_final_ack: true,
        }
    }
}

impl SyncConfig {
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_retry_delay(mut self, initial: Duration, step: Duration) -> Self {
        self.initial_retry_delay = initial;
        self.retry_delay_step = step;
        self
    }

    pub fn with_settle_time(mut self, settle_time: Duration) -> Self {
        self.settle_time = settle_time;
        self
    }

    /// A poll count of zero is treated as one.
    pub fn with_echo_read_polls(mut self, polls: u32, delay: Duration) -> Self {
        self.echo_read_polls = polls.max(1);
        self.echo_poll_delay = delay;
        self
    }

    pub fn with_final_ack(mut self, send_final_ack: bool) -> Self {
        self.send_final_ack = send_final_ack;
        self
    }

    /// Pause after the unanswered SYNC with 0-based index `attempt`.
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        self.initial_retry_delay
            .saturating_add(self.retry_delay_step.saturating_mul(attempt))
    }
}
