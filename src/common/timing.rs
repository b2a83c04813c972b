// src/common/timing.rs

use core::time::Duration;

// Defaults taken from the bench tool that first brought up the camera link.
// They are deliberately aggressive: the camera may need dozens of probes
// after power-on before it answers.

// === SYNC probing ===

/// SYNC frames sent before the handshake gives up.
pub const SYNC_MAX_ATTEMPTS: u32 = 60;
/// Pause after the first unanswered SYNC.
pub const SYNC_RETRY_DELAY_INITIAL: Duration = Duration::from_micros(5);
/// Added to the pause after every further unanswered SYNC.
pub const SYNC_RETRY_DELAY_STEP: Duration = Duration::from_micros(1);

// === Echo read ===

/// Non-blocking reads spent assembling the echoed SYNC frame.
pub const ECHO_READ_POLLS: u32 = 1;
/// Pause between echo reads when more than one poll is allowed.
pub const ECHO_POLL_DELAY: Duration = Duration::from_micros(100);

// === After sync ===

/// Time the camera hardware needs to stabilize once synchronized.
pub const SETTLE_TIME: Duration = Duration::from_secs(2);
