//! Link over an `SpiDevice`
//!
//! The device's chip select is the LOAD line: it drops before the first byte
//! and rises after the last one, which latches the whole frame.

use core::convert::Infallible;

use dotchain_core::traits::CommandLink;
use dotchain_protocol::{ChainFrame, MAX_FRAME_SIZE};
use embedded_hal::spi::SpiDevice;

use super::LinkError;

/// MAX7219 chain on an SPI device with LOAD as chip select
pub struct SpiLink<SPI> {
    spi: SPI,
}

impl<SPI: SpiDevice> SpiLink<SPI> {
    /// Wrap an SPI device
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Give back the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }
}

impl<SPI: SpiDevice> CommandLink for SpiLink<SPI> {
    type Error = LinkError<SPI::Error, Infallible>;

    fn transmit(&mut self, frame: &ChainFrame) -> Result<(), Self::Error> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = frame.encode(&mut buffer).map_err(LinkError::Frame)?;

        // One write keeps CS (LOAD) low for every pair
        self.spi.write(&buffer[..len]).map_err(LinkError::Spi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotchain_core::config::{ChainConfig, DisplayConfig};
    use dotchain_core::ChainDisplay;
    use dotchain_protocol::{reg, Command};
    use embedded_hal::spi::{ErrorKind, ErrorType, Operation};
    use heapless::Vec;

    /// Mock SPI device recording each transaction
    #[derive(Default)]
    struct MockSpiDevice {
        transactions: Vec<Vec<u8, MAX_FRAME_SIZE>, 32>,
        fail: bool,
    }

    impl ErrorType for MockSpiDevice {
        type Error = ErrorKind;
    }

    impl SpiDevice for MockSpiDevice {
        fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Self::Error> {
            if self.fail {
                return Err(ErrorKind::Other);
            }

            let mut bytes = Vec::new();
            for op in operations.iter() {
                if let Operation::Write(data) = op {
                    bytes.extend_from_slice(data).map_err(|_| ErrorKind::Other)?;
                }
            }
            self.transactions.push(bytes).map_err(|_| ErrorKind::Other)
        }
    }

    #[test]
    fn test_frame_in_one_transaction() {
        let mut link = SpiLink::new(MockSpiDevice::default());
        let frame = ChainFrame::targeted(3, 1, Command::new(reg::DIGIT0, 0x81)).unwrap();
        link.transmit(&frame).unwrap();

        let spi = link.release();
        assert_eq!(spi.transactions.len(), 1);
        assert_eq!(spi.transactions[0], [0, 0, reg::DIGIT0, 0x81, 0, 0]);
    }

    #[test]
    fn test_spi_error_propagates() {
        let mut link = SpiLink::new(MockSpiDevice {
            fail: true,
            ..Default::default()
        });
        let frame = ChainFrame::broadcast(2, Command::power(true)).unwrap();
        assert_eq!(link.transmit(&frame), Err(LinkError::Spi(ErrorKind::Other)));
    }

    #[test]
    fn test_display_init_over_spi() {
        let config = DisplayConfig {
            chain: ChainConfig::with_modules(4).unwrap(),
            ..DisplayConfig::default()
        };
        let mut display = ChainDisplay::new(SpiLink::new(MockSpiDevice::default()), config).unwrap();
        display.init().unwrap();

        let spi = display.release().release();
        assert_eq!(spi.transactions.len(), 14);
        assert!(spi.transactions.iter().all(|t| t.len() == 8));
        // First transaction shuts every chip down
        assert_eq!(
            spi.transactions[0],
            [reg::SHUTDOWN, 0, reg::SHUTDOWN, 0, reg::SHUTDOWN, 0, reg::SHUTDOWN, 0]
        );
    }
}
