// src/common/hal_adapter.rs

use embedded_hal::delay::DelayNs;

use super::hal_traits::{UcamSerial, UcamTimer};

/// Pairs a serial link with an `embedded-hal` delay provider.
///
/// Useful on targets where the UART driver and the timer are separate
/// peripherals.
#[derive(Debug)]
pub struct HalInterface<S, D> {
    serial: S,
    delay: D,
}

impl<S, D> HalInterface<S, D>
where
    S: UcamSerial,
    D: DelayNs,
{
    pub fn new(serial: S, delay: D) -> Self {
        HalInterface { serial, delay }
    }

    /// Gives back the serial link and the delay provider.
    pub fn release(self) -> (S, D) {
        (self.serial, self.delay)
    }
}

impl<S: UcamSerial, D> UcamSerial for HalInterface<S, D> {
    type Error = S::Error;

    fn write(&mut self, bytes: &[u8]) -> nb::Result<usize, Self::Error> {
        self.serial.write(bytes)
    }

    fn try_read(&mut self, buffer: &mut [u8]) -> nb::Result<usize, Self::Error> {
        self.serial.try_read(buffer)
    }
}

impl<S, D: DelayNs> UcamTimer for HalInterface<S, D> {
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
