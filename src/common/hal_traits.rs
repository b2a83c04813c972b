// src/common/hal_traits.rs

use core::fmt::Debug;

/// Abstraction for the delays the handshake needs.
///
/// With the `impl-native` feature, [`HalInterface`](super::hal_adapter::HalInterface)
/// provides this from any `embedded_hal::delay::DelayNs`.
pub trait UcamTimer {
    /// Delay for at least the specified number of microseconds.
    fn delay_us(&mut self, us: u32);

    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Abstraction for the camera's duplex serial link.
///
/// Both operations are non-blocking. The link carries fixed 6-byte frames,
/// so callers always pass buffers of at most one frame.
pub trait UcamSerial {
    /// Associated error type for communication errors.
    type Error: Debug;

    /// Writes as many bytes of `bytes` as the link accepts right now.
    ///
    /// Returns the number of bytes accepted, which may be less than
    /// `bytes.len()`. `Err(nb::Error::WouldBlock)` means nothing was accepted.
    fn write(&mut self, bytes: &[u8]) -> nb::Result<usize, Self::Error>;

    /// Reads whatever is already available, up to `buffer.len()` bytes.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` (or `Ok(0)`) if no data has
    /// arrived yet. Never waits for data.
    fn try_read(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error>;
}
