// src/host/sync_host/mock.rs
//
// Scripted camera link shared by the sync_host unit tests.

use std::collections::VecDeque;

use core::time::Duration;

use crate::common::hal_traits::{UcamSerial, UcamTimer};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) struct MockCommError;

/// One scripted outcome of a `try_read` call.
#[derive(Debug, Clone)]
pub(super) enum ReadStep {
    /// Bytes available. Whatever does not fit the caller's buffer stays queued.
    Data(Vec<u8>),
    /// Nothing available yet.
    Empty,
    /// The link reports an error.
    Fail,
}

pub(super) struct MockInterface {
    script: VecDeque<ReadStep>,
    /// Bytes accepted per write call, one entry per call.
    pub writes: Vec<Vec<u8>>,
    pub read_calls: usize,
    /// Accept at most this many bytes per write.
    pub write_limit: Option<usize>,
    pub fail_write: bool,
    /// Simulated clock, advanced only by delays.
    pub elapsed: Duration,
}

impl MockInterface {
    pub fn new() -> Self {
        MockInterface {
            script: VecDeque::new(),
            writes: Vec::new(),
            read_calls: 0,
            write_limit: None,
            fail_write: false,
            elapsed: Duration::ZERO,
        }
    }

    pub fn then_data(mut self, bytes: &[u8]) -> Self {
        self.script.push_back(ReadStep::Data(bytes.to_vec()));
        self
    }

    pub fn then_empty(mut self, count: usize) -> Self {
        for _ in 0..count {
            self.script.push_back(ReadStep::Empty);
        }
        self
    }

    pub fn then_fail(mut self) -> Self {
        self.script.push_back(ReadStep::Fail);
        self
    }

    /// A camera that answers the first SYNC with ACK-for-SYNC plus the echo.
    pub fn camera_ok() -> Self {
        MockInterface::new()
            .then_data(&[0xAA, 0x0E, 0x0D, 0x00, 0x00, 0x00])
            .then_data(&[0xAA, 0x0D, 0x00, 0x00, 0x00, 0x00])
    }
}

impl UcamTimer for MockInterface {
    fn delay_us(&mut self, us: u32) {
        self.elapsed += Duration::from_micros(us as u64);
    }
    fn delay_ms(&mut self, ms: u32) {
        self.elapsed += Duration::from_millis(ms as u64);
    }
}

impl UcamSerial for MockInterface {
    type Error = MockCommError;

    fn write(&mut self, bytes: &[u8]) -> nb::Result<usize, Self::Error> {
        if self.fail_write {
            return Err(nb::Error::Other(MockCommError));
        }
        let accepted = self.write_limit.map_or(bytes.len(), |limit| limit.min(bytes.len()));
        self.writes.push(bytes[..accepted].to_vec());
        if accepted == 0 {
            Err(nb::Error::WouldBlock)
        } else {
            Ok(accepted)
        }
    }

    fn try_read(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error> {
        self.read_calls += 1;
        match self.script.pop_front() {
            None | Some(ReadStep::Empty) => Err(nb::Error::WouldBlock),
            Some(ReadStep::Fail) => Err(nb::Error::Other(MockCommError)),
            Some(ReadStep::Data(mut bytes)) => {
                let n = bytes.len().min(buffer.len());
                buffer[..n].copy_from_slice(&bytes[..n]);
                if n < bytes.len() {
                    let rest = bytes.split_off(n);
                    self.script.push_front(ReadStep::Data(rest));
                }
                Ok(n)
            }
        }
    }
}
