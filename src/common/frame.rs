// src/common/frame.rs

use core::convert::TryFrom;
use core::fmt;

use super::command::Opcode;
use super::error::UcamError;

/// Every command and response on the wire is exactly this many bytes.
pub const FRAME_LEN: usize = 6;

/// Leading byte of every frame.
pub const SENTINEL: u8 = 0xAA;

/// A single 6-byte uCAM-III frame: `[0xAA, opcode, p1, p2, p3, p4]`.
///
/// Frames are plain values. Derived frames (such as the ACK for a given
/// opcode) are always built through a constructor, never by patching a
/// copy of a shared constant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Frame([u8; FRAME_LEN]);

/// Builds the canonical frame `[0xAA, opcode, p1, p2, p3, p4]`.
#[inline]
pub const fn build_frame(opcode: u8, p1: u8, p2: u8, p3: u8, p4: u8) -> Frame {
    Frame([SENTINEL, opcode, p1, p2, p3, p4])
}

/// Number of leading bytes a [`matches`] call compares.
///
/// Each protocol stage names the length it checks instead of passing a bare
/// integer around.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd)]
pub struct CompareLen(usize);

impl CompareLen {
    /// Sentinel, opcode and the acknowledged opcode of an ACK.
    pub const ACK_PREFIX: CompareLen = CompareLen(3);
    /// The whole frame.
    pub const FULL: CompareLen = CompareLen(FRAME_LEN);

    /// Returns `None` unless `len` is within `1..=6`.
    pub const fn new(len: usize) -> Option<Self> {
        if len >= 1 && len <= FRAME_LEN {
            Some(CompareLen(len))
        } else {
            None
        }
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }
}

/// Compares the first `len` bytes of `received` against `expected`.
pub fn matches(received: &[u8; FRAME_LEN], expected: &Frame, len: CompareLen) -> bool {
    received[..len.get()] == expected.0[..len.get()]
}

impl Frame {
    /// Builds a frame for a known opcode.
    pub const fn command(opcode: Opcode, params: [u8; 4]) -> Self {
        build_frame(opcode.as_u8(), params[0], params[1], params[2], params[3])
    }

    /// The ACK a camera sends (or expects) for `acknowledged`.
    pub const fn ack_for(acknowledged: Opcode) -> Self {
        build_frame(Opcode::Ack.as_u8(), acknowledged.as_u8(), 0x00, 0x00, 0x00)
    }

    /// Wraps bytes read from the link. No validation is performed.
    #[inline]
    pub const fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Frame(bytes)
    }

    #[inline]
    pub const fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }

    #[inline]
    pub const fn sentinel_ok(&self) -> bool {
        self.0[0] == SENTINEL
    }

    #[inline]
    pub const fn opcode_byte(&self) -> u8 {
        self.0[1]
    }

    pub fn opcode(&self) -> Result<Opcode, UcamError<()>> {
        Opcode::try_from(self.0[1])
    }

    pub const fn params(&self) -> [u8; 4] {
        [self.0[2], self.0[3], self.0[4], self.0[5]]
    }

    /// Shorthand for [`matches`] with `self` as the received frame.
    pub fn matches(&self, expected: &Frame, len: CompareLen) -> bool {
        matches(&self.0, expected, len)
    }
}

impl From<[u8; FRAME_LEN]> for Frame {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        Frame(bytes)
    }
}

impl From<Frame> for [u8; FRAME_LEN] {
    fn from(frame: Frame) -> Self {
        frame.0
    }
}

impl AsRef<[u8]> for Frame {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [b0, b1, b2, b3, b4, b5] = self.0;
        write!(f, "{:02X} {:02X} {:02X} {:02X} {:02X} {:02X}", b0, b1, b2, b3, b4, b5)
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame[{}]", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::command::{ACK, SYNC};

    #[test]
    fn test_build_frame_layout() {
        let samples = [
            (0x00, [0x00, 0x00, 0x00, 0x00]),
            (0x0D, [0x00, 0x00, 0x00, 0x00]),
            (0x0E, [0x0D, 0x01, 0x02, 0x03]),
            (0xFF, [0xFF, 0xFE, 0x80, 0x7F]),
        ];
        for (opcode, [p1, p2, p3, p4]) in samples {
            let frame = build_frame(opcode, p1, p2, p3, p4);
            assert_eq!(frame.as_bytes().len(), FRAME_LEN);
            assert_eq!(frame.as_bytes(), &[0xAA, opcode, p1, p2, p3, p4]);
            assert!(frame.sentinel_ok());
            assert_eq!(frame.opcode_byte(), opcode);
            assert_eq!(frame.params(), [p1, p2, p3, p4]);
        }
    }

    #[test]
    fn test_matches_independent_copies() {
        let a = build_frame(0x0E, 0x0D, 0, 0, 0);
        let b = build_frame(0x0E, 0x0D, 0, 0, 0);
        assert!(matches(a.as_bytes(), &b, CompareLen::FULL));
        assert!(a.matches(&b, CompareLen::ACK_PREFIX));
    }

    #[test]
    fn test_matches_respects_length() {
        let received = [0xAA, 0x0E, 0x0D, 0x00, 0x00, 0x01];
        let expected = Frame::ack_for(Opcode::Sync);
        assert!(matches(&received, &expected, CompareLen::ACK_PREFIX));
        assert!(!matches(&received, &expected, CompareLen::FULL));

        let wrong_ack = [0xAA, 0x0E, 0xFF, 0x00, 0x00, 0x00];
        assert!(matches(&wrong_ack, &expected, CompareLen::new(2).unwrap()));
        assert!(!matches(&wrong_ack, &expected, CompareLen::ACK_PREFIX));
    }

    #[test]
    fn test_compare_len_bounds() {
        assert!(CompareLen::new(0).is_none());
        assert!(CompareLen::new(7).is_none());
        assert_eq!(CompareLen::new(1).unwrap().get(), 1);
        assert_eq!(CompareLen::new(6), Some(CompareLen::FULL));
        assert_eq!(CompareLen::new(3), Some(CompareLen::ACK_PREFIX));
    }

    #[test]
    fn test_ack_for_leaves_constant_untouched() {
        let ack_sync = Frame::ack_for(Opcode::Sync);
        assert_eq!(ack_sync.as_bytes(), &[0xAA, 0x0E, 0x0D, 0x00, 0x00, 0x00]);
        // The bare ACK constant is unaffected by deriving ACK-for-SYNC.
        assert_eq!(ACK.as_bytes(), &[0xAA, 0x0E, 0x00, 0x00, 0x00, 0x00]);
        assert_eq!(Frame::ack_for(Opcode::Sync), ack_sync);
    }

    #[test]
    fn test_command_matches_constant() {
        assert_eq!(Frame::command(Opcode::Sync, [0; 4]), SYNC);
    }

    #[test]
    fn test_display_is_hex() {
        let frame = Frame::ack_for(Opcode::Sync);
        assert_eq!(format!("{}", frame), "AA 0E 0D 00 00 00");
        assert_eq!(format!("{:?}", frame), "Frame[AA 0E 0D 00 00 00]");
    }

    #[test]
    fn test_unvalidated_received_bytes() {
        let frame = Frame::from_bytes([0x55, 0x02, 0, 0, 0, 0]);
        assert!(!frame.sentinel_ok());
        assert!(matches!(frame.opcode(), Err(UcamError::UnknownOpcode(0x02))));
    }
}
