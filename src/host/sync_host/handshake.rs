// src/host/sync_host/handshake.rs

use super::io_helpers::pad_frame;
use super::{SyncHost, SyncReport};
use crate::common::{
    command::{Opcode, SYNC},
    error::UcamError,
    frame::Frame,
    hal_traits::{UcamSerial, UcamTimer},
    types::SyncState,
};
use core::time::Duration;
use tracing::{debug, info, trace};

impl<IF> SyncHost<IF>
where
    IF: UcamSerial + UcamTimer,
{
    /// Walks the states from `Syncing` through final confirmation. On error,
    /// `self.state` still names the stage that failed.
    pub(super) fn run_handshake(&mut self) -> Result<SyncReport, UcamError<IF::Error>> {
        self.state = SyncState::Syncing;
        let (attempts, ack) = self.probe_sync()?;

        self.state = SyncState::SyncAckReceived;
        Self::validate_sync_ack(&ack)?;
        debug!(frame = %ack, "Ack sync received");

        self.state = SyncState::SyncEchoReceived;
        let echo_bytes = self.read_frame(self.config.echo_read_polls, self.config.echo_poll_delay)?;
        let echo = Self::validate_echo(&echo_bytes)?;
        debug!(frame = %echo, "Echoed sync received");

        self.state = SyncState::Stabilizing;
        info!(settle = ?self.config.settle_time, "Waiting for camera to stabilize");
        self.delay(self.config.settle_time);

        Self::confirm_sync_ack(&ack)?;
        if self.config.send_final_ack {
            let final_ack = Frame::ack_for(Opcode::Sync);
            self.send_frame(&final_ack)?;
            debug!(frame = %final_ack, "Sent final ack");
        }

        Ok(SyncReport {
            attempts,
            ack,
            echo,
            short_writes: self.short_writes,
        })
    }

    /// Sends SYNC until one non-blocking read returns a whole frame.
    ///
    /// Returns the 1-based attempt that got an answer, and the answer.
    /// Partial reads are dropped; the pause after each miss grows by
    /// `retry_delay_step`.
    fn probe_sync(&mut self) -> Result<(u32, Frame), UcamError<IF::Error>> {
        for attempt in 0..self.config.max_attempts {
            self.send_frame(&SYNC)?;
            debug!(attempt, frame = %SYNC, "Sent sync");

            let received = self.read_frame(1, Duration::ZERO)?;
            if received.is_full() {
                let frame = pad_frame(&received);
                debug!(attempt, frame = %frame, "Read");
                return Ok((attempt + 1, frame));
            }
            if !received.is_empty() {
                trace!(attempt, len = received.len(), "Discarding partial frame");
            }

            self.delay(self.config.retry_delay(attempt));
        }

        Err(UcamError::SyncTimeout { attempts: self.config.max_attempts })
    }
}
