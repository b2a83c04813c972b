// src/host/sync_host/mod.rs

use crate::common::{
    config::SyncConfig,
    error::UcamError,
    frame::Frame,
    hal_traits::{UcamSerial, UcamTimer},
    types::SyncState,
};
use tracing::{info, warn};

mod handshake;
mod io_helpers;
mod protocol_helpers;

#[cfg(test)]
mod mock;

/// What a successful handshake saw on the link.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SyncReport {
    /// SYNC frames sent, counting the one that was answered.
    pub attempts: u32,
    /// The camera's ACK-for-SYNC.
    pub ack: Frame,
    /// The camera's echoed SYNC.
    pub echo: Frame,
    /// Writes the link only partially accepted.
    pub short_writes: u32,
}

/// Drives the uCAM-III synchronization handshake over a serial link.
///
/// A host runs the handshake once. It owns the link for the duration and
/// hands it back through [`SyncHost::into_inner`]; dropping the host drops
/// (and so closes) the link.
#[derive(Debug)]
pub struct SyncHost<IF>
where
    IF: UcamSerial + UcamTimer,
{
    interface: IF,
    config: SyncConfig,
    state: SyncState,
    short_writes: u32,
}

impl<IF> SyncHost<IF>
where
    IF: UcamSerial + UcamTimer,
{
    pub fn new(interface: IF) -> Self {
        Self::with_config(interface, SyncConfig::default())
    }

    pub fn with_config(interface: IF, config: SyncConfig) -> Self {
        SyncHost {
            interface,
            config,
            state: SyncState::Idle,
            short_writes: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> SyncState {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    pub fn interface(&self) -> &IF {
        &self.interface
    }

    /// Releases the link.
    pub fn into_inner(self) -> IF {
        self.interface
    }

    /// Runs the whole handshake to `Synchronized` or `Failed`.
    ///
    /// Only allowed from `Idle`. Any other state yields
    /// `UcamError::InvalidState` without touching the link.
    pub fn synchronize(&mut self) -> Result<SyncReport, UcamError<IF::Error>> {
        if self.state != SyncState::Idle {
            return Err(UcamError::InvalidState(self.state));
        }

        let result = self.run_handshake();
        match &result {
            Ok(report) => {
                self.state = SyncState::Synchronized;
                info!(attempts = report.attempts, "Synchronised!");
            }
            Err(e) => {
                let at = self.state;
                self.state = SyncState::Failed;
                warn!(state = ?at, error = %e, "Handshake failed");
            }
        }
        result
    }
}
