// src/lib.rs

//! Host side of the uCAM-III serial camera protocol: 6-byte command frames
//! and the SYNC/ACK handshake that has to succeed before any imaging command.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod common;
pub mod host;

// Re-export key types for convenience
pub use common::{Frame, Opcode, SyncConfig, SyncState, UcamError};
pub use host::{SyncHost, SyncReport};
