//! uCAM-III command vocabulary.
//!
//! Only `SYNC`, `ACK` and `NAK` take part in the handshake. The remaining
//! opcodes and their frames are kept as inert constants for callers that
//! build the imaging commands on top of a synchronized link.

use core::convert::TryFrom;
use core::fmt;

use super::error::UcamError;
use super::frame::{build_frame, Frame};

/// Command/response identifier carried in byte 1 of every frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Opcode {
    /// Set image format and resolution.
    Initial = 0x01,
    /// Request a picture (snapshot, RAW preview or JPEG preview).
    GetPicture = 0x04,
    /// Capture a still into the camera buffer.
    Snapshot = 0x05,
    /// Set the JPEG package size.
    SetPackageSize = 0x06,
    SetBaudRate = 0x07,
    Reset = 0x08,
    /// Announces image data length ahead of a transfer.
    Data = 0x0A,
    /// Link probe. Also echoed back by the camera once it has locked on.
    Sync = 0x0D,
    /// Acknowledge. Byte 2 carries the opcode being acknowledged.
    Ack = 0x0E,
    /// Negative acknowledge.
    Nak = 0x0F,
    Light = 0x13,
    /// Contrast/brightness/exposure options.
    SetOption = 0x14,
    Sleep = 0x15,
}

impl Opcode {
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Opcode {
    type Error = UcamError<()>;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let opcode = match value {
            0x01 => Opcode::Initial,
            0x04 => Opcode::GetPicture,
            0x05 => Opcode::Snapshot,
            0x06 => Opcode::SetPackageSize,
            0x07 => Opcode::SetBaudRate,
            0x08 => Opcode::Reset,
            0x0A => Opcode::Data,
            0x0D => Opcode::Sync,
            0x0E => Opcode::Ack,
            0x0F => Opcode::Nak,
            0x13 => Opcode::Light,
            0x14 => Opcode::SetOption,
            0x15 => Opcode::Sleep,
            other => return Err(UcamError::UnknownOpcode(other)),
        };
        Ok(opcode)
    }
}

impl From<Opcode> for u8 {
    fn from(value: Opcode) -> Self {
        value.as_u8()
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Opcode::Initial => "INITIAL",
            Opcode::GetPicture => "GET_PICTURE",
            Opcode::Snapshot => "SNAPSHOT",
            Opcode::SetPackageSize => "SET_PACKAGE_SIZE",
            Opcode::SetBaudRate => "SET_BAUD_RATE",
            Opcode::Reset => "RESET",
            Opcode::Data => "DATA",
            Opcode::Sync => "SYNC",
            Opcode::Ack => "ACK",
            Opcode::Nak => "NAK",
            Opcode::Light => "LIGHT",
            Opcode::SetOption => "SET_OPTION",
            Opcode::Sleep => "SLEEP",
        };
        write!(f, "{}", name)
    }
}

// --- Well-known frames ---
//
// Parameter bytes are the ones the bench tool shipped with: JPEG 640x480
// for INITIAL, JPEG picture for GET_PICTURE, 512 byte packages, and so on.

pub const INITIAL: Frame = build_frame(0x01, 0x00, 0x06, 0x03, 0x07);
pub const GET_PICTURE: Frame = build_frame(0x04, 0x02, 0x00, 0x00, 0x00);
pub const SNAPSHOT: Frame = build_frame(0x05, 0x01, 0x00, 0x00, 0x00);
pub const SET_PACKAGE_SIZE: Frame = build_frame(0x06, 0x08, 0x00, 0x00, 0x00);
pub const SET_BAUD_RATE: Frame = build_frame(0x07, 0x00, 0x00, 0x00, 0x00);
pub const RESET: Frame = build_frame(0x08, 0x00, 0x00, 0x00, 0x00);
pub const DATA: Frame = build_frame(0x0A, 0x00, 0x00, 0x00, 0x00);
/// The link probe sent during synchronization.
pub const SYNC: Frame = build_frame(0x0D, 0x00, 0x00, 0x00, 0x00);
/// Bare ACK with no acknowledged opcode. Use [`Frame::ack_for`] to acknowledge a command.
pub const ACK: Frame = build_frame(0x0E, 0x00, 0x00, 0x00, 0x00);
pub const NAK: Frame = build_frame(0x0F, 0x00, 0x00, 0x00, 0x00);
pub const LIGHT: Frame = build_frame(0x13, 0x01, 0x00, 0x00, 0x00);
pub const SET_OPTION: Frame = build_frame(0x14, 0x02, 0x02, 0x02, 0x00);
pub const SLEEP: Frame = build_frame(0x15, 0x00, 0x00, 0x00, 0x00);
