// src/common/types.rs

use core::fmt;

/// Where a [`SyncHost`](crate::host::SyncHost) is in the handshake.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum SyncState {
    /// Nothing sent yet.
    Idle,
    /// Probing with SYNC frames.
    Syncing,
    /// A full frame arrived in reply to SYNC; about to check it is ACK-for-SYNC.
    SyncAckReceived,
    /// Reading the camera's echoed SYNC.
    SyncEchoReceived,
    /// Waiting for the camera hardware to settle.
    Stabilizing,
    Synchronized,
    Failed,
}

impl SyncState {
    /// `Synchronized` and `Failed` are terminal; no more I/O happens after them.
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, SyncState::Synchronized | SyncState::Failed)
    }
}

/// The validation step at which a received frame was rejected.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HandshakeStage {
    /// First reply must start with `AA 0E 0D`.
    AckValidation,
    /// Second reply must be the full SYNC frame.
    EchoValidation,
    /// Post-settle check of the ACK against a freshly built ACK-for-SYNC.
    FinalConfirmation,
}

impl fmt::Display for HandshakeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            HandshakeStage::AckValidation => "invalid ACK",
            HandshakeStage::EchoValidation => "expected echoed SYNC",
            HandshakeStage::FinalConfirmation => "sync ack failed",
        };
        f.write_str(reason)
    }
}
