// src/common/error.rs

#[cfg(feature = "std")]
use std::string::String;

use super::frame::Frame;
use super::types::{HandshakeStage, SyncState};

#[derive(Debug, thiserror::Error)]
pub enum UcamError<E = ()>
where
    E: core::fmt::Debug, // The channel error only needs Debug for formatting
{
    /// Underlying I/O error from the serial channel.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// The serial device could not be opened.
    #[cfg(feature = "std")]
    #[error("No connection with {path} interface: {reason}")]
    ChannelUnavailable { path: String, reason: String },

    /// The camera never answered a SYNC with a complete frame.
    #[error("Sync failed: no response after {attempts} attempts")]
    SyncTimeout { attempts: u32 },

    /// A received frame did not match what the current stage expects.
    /// Bytes past `received_len` were never read and are zero.
    #[error("{stage}: expected {expected}, received {received} ({received_len} bytes)")]
    ProtocolMismatch {
        stage: HandshakeStage,
        expected: Frame,
        received: Frame,
        received_len: usize,
    },

    /// The channel accepted fewer bytes than a full frame.
    /// Never fatal on its own; later validation catches a truncated frame.
    #[error("Not every byte was sent: {written} of {expected}")]
    ShortWrite { written: usize, expected: usize },

    /// The host is not in a state where the operation is allowed.
    #[error("Operation not allowed in state {0:?}")]
    InvalidState(SyncState),

    /// Byte 1 of a frame is not a known uCAM-III opcode.
    #[error("Unknown opcode: {0:#04x}")]
    UnknownOpcode(u8),
}

impl<E: core::fmt::Debug> UcamError<E> {
    /// True for the two outcomes that end a handshake attempt on protocol grounds.
    pub fn is_handshake_failure(&self) -> bool {
        matches!(self, UcamError::SyncTimeout { .. } | UcamError::ProtocolMismatch { .. })
    }
}
