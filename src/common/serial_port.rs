//! Desktop serial link backed by the `serialport` crate.
//!
//! The port is opened with a zero read timeout so reads never wait, which
//! is what [`UcamSerial::try_read`] promises. Dropping the interface (or
//! calling [`SerialPortInterface::close`]) closes the device.

use std::io::{self, Read, Write};
use std::string::{String, ToString};
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use tracing::{debug, info};

use super::error::UcamError;
use super::hal_traits::{UcamSerial, UcamTimer};

/// Rate the camera auto-detects from the SYNC stream.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Device used when none is given on the command line.
#[cfg(windows)]
pub const DEFAULT_DEVICE: &str = "COM1";
#[cfg(not(windows))]
pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB1";

pub struct SerialPortInterface {
    port: Box<dyn SerialPort>,
    path: String,
}

impl SerialPortInterface {
    /// Opens `path` as 8N1 without flow control.
    pub fn open(path: &str, baud_rate: u32) -> Result<Self, UcamError<io::Error>> {
        let port = serialport::new(path, baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(Duration::ZERO)
            .open()
            .map_err(|e| UcamError::ChannelUnavailable {
                path: path.to_string(),
                reason: e.to_string(),
            })?;

        info!(path, baud_rate, "Connection to interface established");
        Ok(SerialPortInterface {
            port,
            path: path.to_string(),
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn close(self) {
        debug!(path = %self.path, "Closing interface");
        drop(self);
    }
}

impl core::fmt::Debug for SerialPortInterface {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SerialPortInterface").field("path", &self.path).finish()
    }
}

/// Errors that only mean "nothing to do yet" on a non-blocking port.
fn is_would_block(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut | io::ErrorKind::Interrupted
    )
}

fn to_nb(e: io::Error) -> nb::Error<io::Error> {
    if is_would_block(&e) {
        nb::Error::WouldBlock
    } else {
        nb::Error::Other(e)
    }
}

impl UcamSerial for SerialPortInterface {
    type Error = io::Error;

    fn write(&mut self, bytes: &[u8]) -> nb::Result<usize, Self::Error> {
        self.port.write(bytes).map_err(to_nb)
    }

    fn try_read(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error> {
        self.port.read(buffer).map_err(to_nb)
    }
}

impl UcamTimer for SerialPortInterface {
    fn delay_us(&mut self, us: u32) {
        std::thread::sleep(Duration::from_micros(u64::from(us)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
