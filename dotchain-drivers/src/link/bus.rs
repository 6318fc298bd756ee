//! Link over a raw `SpiBus` with a separate LOAD pin
//!
//! Useful when the bus is shared with other peripherals or the LOAD line is
//! not on a hardware chip-select pin.

use dotchain_core::traits::CommandLink;
use dotchain_protocol::ChainFrame;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use super::LinkError;

/// MAX7219 chain on an SPI bus with an explicit LOAD pin
pub struct BusLink<SPI, LOAD> {
    spi: SPI,
    load: LOAD,
}

impl<SPI: SpiBus, LOAD: OutputPin> BusLink<SPI, LOAD> {
    /// Wrap a bus and LOAD pin; LOAD is driven high (idle)
    pub fn new(spi: SPI, mut load: LOAD) -> Result<Self, LinkError<SPI::Error, LOAD::Error>> {
        load.set_high().map_err(LinkError::Load)?;
        Ok(Self { spi, load })
    }

    /// Give back the bus and the pin
    pub fn release(self) -> (SPI, LOAD) {
        (self.spi, self.load)
    }
}

impl<SPI: SpiBus, LOAD: OutputPin> CommandLink for BusLink<SPI, LOAD> {
    type Error = LinkError<SPI::Error, LOAD::Error>;

    fn transmit(&mut self, frame: &ChainFrame) -> Result<(), Self::Error> {
        self.load.set_low().map_err(LinkError::Load)?;

        for command in frame.commands() {
            self.spi
                .write(&command.to_bytes())
                .map_err(LinkError::Spi)?;
        }

        // Every bit must be on the wire before the latch edge
        self.spi.flush().map_err(LinkError::Spi)?;
        self.load.set_high().map_err(LinkError::Load)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use dotchain_protocol::{ChainEmulator, Command};
    use embedded_hal::digital::ErrorType as PinErrorType;
    use embedded_hal::spi::ErrorType as SpiErrorType;

    /// Bus and LOAD pin feeding an emulated chain, wire by wire
    struct Wire {
        chain: ChainEmulator,
        flushed: bool,
    }

    struct MockBus<'a> {
        wire: &'a core::cell::RefCell<Wire>,
    }

    struct MockLoad<'a> {
        wire: &'a core::cell::RefCell<Wire>,
        high: bool,
    }

    impl SpiErrorType for MockBus<'_> {
        type Error = Infallible;
    }

    impl SpiBus for MockBus<'_> {
        fn read(&mut self, _words: &mut [u8]) -> Result<(), Self::Error> {
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            let mut wire = self.wire.borrow_mut();
            wire.flushed = false;
            for &byte in words {
                wire.chain.clock_byte(byte);
            }
            Ok(())
        }

        fn transfer(&mut self, _read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
            self.write(write)
        }

        fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            self.write(words)
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.wire.borrow_mut().flushed = true;
            Ok(())
        }
    }

    impl PinErrorType for MockLoad<'_> {
        type Error = Infallible;
    }

    impl OutputPin for MockLoad<'_> {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            self.wire.borrow_mut().chain.begin();
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            let mut wire = self.wire.borrow_mut();
            assert!(self.high || wire.flushed, "latched before flush");
            self.high = true;
            wire.chain.latch();
            Ok(())
        }
    }

    fn wire(chain_len: usize) -> core::cell::RefCell<Wire> {
        core::cell::RefCell::new(Wire {
            chain: ChainEmulator::new(chain_len).unwrap(),
            flushed: true,
        })
    }

    #[test]
    fn test_load_idles_high() {
        let wire = wire(2);
        let link = BusLink::new(
            MockBus { wire: &wire },
            MockLoad {
                wire: &wire,
                high: false,
            },
        )
        .unwrap();

        let (_, load) = link.release();
        assert!(load.high);
        assert_eq!(wire.borrow().chain.transactions(), 0);
    }

    #[test]
    fn test_targeted_frame_latches_one_chip() {
        let wire = wire(3);
        let mut link = BusLink::new(
            MockBus { wire: &wire },
            MockLoad {
                wire: &wire,
                high: false,
            },
        )
        .unwrap();

        link.transmit(&ChainFrame::targeted(3, 2, Command::intensity(9)).unwrap())
            .unwrap();

        let wire = wire.borrow();
        assert_eq!(wire.chain.transactions(), 1);
        assert_eq!(wire.chain.last_transaction_pairs(), 3);
        assert_eq!(wire.chain.chip(0).unwrap().intensity(), 0);
        assert_eq!(wire.chain.chip(1).unwrap().intensity(), 0);
        assert_eq!(wire.chain.chip(2).unwrap().intensity(), 9);
    }

    #[test]
    fn test_broadcast_frame() {
        let wire = wire(2);
        let mut link = BusLink::new(
            MockBus { wire: &wire },
            MockLoad {
                wire: &wire,
                high: false,
            },
        )
        .unwrap();

        link.transmit(&ChainFrame::broadcast(2, Command::power(true)).unwrap())
            .unwrap();

        let wire = wire.borrow();
        assert!(wire.chain.chip(0).unwrap().is_powered());
        assert!(wire.chain.chip(1).unwrap().is_powered());
    }
}
