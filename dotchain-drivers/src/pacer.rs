//! Pacer backed by an `embedded-hal` delay

use dotchain_core::traits::Pacer;
use embedded_hal::delay::DelayNs;

/// Blocking pacer over any `DelayNs` implementation
pub struct DelayPacer<D> {
    delay: D,
}

impl<D: DelayNs> DelayPacer<D> {
    /// Wrap a delay provider
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    /// Give back the delay provider
    pub fn release(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> Pacer for DelayPacer<D> {
    fn pause_ms(&mut self, ms: u32) {
        if ms > 0 {
            self.delay.delay_ms(ms);
        }
    }
}
