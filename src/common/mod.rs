// src/common/mod.rs

pub mod command;
pub mod config;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod timing;
pub mod types;

#[cfg(feature = "impl-native")]
pub mod hal_adapter;

#[cfg(feature = "serialport")]
pub mod serial_port;

// --- Re-export key types/traits/functions for easier access ---

pub use command::Opcode;
pub use config::SyncConfig;
pub use error::UcamError;
pub use frame::{build_frame, matches, CompareLen, Frame, FRAME_LEN, SENTINEL};
pub use hal_traits::{UcamSerial, UcamTimer};
pub use types::{HandshakeStage, SyncState};

// Timing constants stay under common::timing::*.

#[cfg(feature = "impl-native")]
pub use hal_adapter::HalInterface;

#[cfg(feature = "serialport")]
pub use serial_port::SerialPortInterface;
