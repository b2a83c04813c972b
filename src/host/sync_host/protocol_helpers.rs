// src/host/sync_host/protocol_helpers.rs

use super::io_helpers::{pad_frame, PartialFrame};
use super::SyncHost;
use crate::common::{
    command::{Opcode, SYNC},
    error::UcamError,
    frame::{CompareLen, Frame, FRAME_LEN},
    hal_traits::{UcamSerial, UcamTimer},
    types::HandshakeStage,
};

impl<IF> SyncHost<IF>
where
    IF: UcamSerial + UcamTimer,
{
    /// The first reply to SYNC must be an ACK naming SYNC: `AA 0E 0D ..`.
    /// Only sentinel, opcode and acknowledged opcode are checked.
    pub(super) fn validate_sync_ack(received: &Frame) -> Result<(), UcamError<IF::Error>> {
        let expected = Frame::ack_for(Opcode::Sync);
        if received.matches(&expected, CompareLen::ACK_PREFIX) {
            Ok(())
        } else {
            Err(UcamError::ProtocolMismatch {
                stage: HandshakeStage::AckValidation,
                expected,
                received: *received,
                received_len: FRAME_LEN,
            })
        }
    }

    /// The second reply must be the SYNC frame itself, complete and byte-exact.
    pub(super) fn validate_echo(received: &PartialFrame) -> Result<Frame, UcamError<IF::Error>> {
        let frame = pad_frame(received);
        if received.is_full() && frame.matches(&SYNC, CompareLen::FULL) {
            Ok(frame)
        } else {
            Err(UcamError::ProtocolMismatch {
                stage: HandshakeStage::EchoValidation,
                expected: SYNC,
                received: frame,
                received_len: received.len(),
            })
        }
    }

    /// Post-settle confirmation. The expected ACK is rebuilt here rather than
    /// reused from the first check.
    pub(super) fn confirm_sync_ack(ack: &Frame) -> Result<(), UcamError<IF::Error>> {
        let expected = Frame::ack_for(Opcode::Sync);
        if ack.matches(&expected, CompareLen::ACK_PREFIX) {
            Ok(())
        } else {
            Err(UcamError::ProtocolMismatch {
                stage: HandshakeStage::FinalConfirmation,
                expected,
                received: *ack,
                received_len: FRAME_LEN,
            })
        }
    }
}
