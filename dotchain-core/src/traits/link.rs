//! Command link trait

use core::convert::Infallible;

use dotchain_protocol::{ChainEmulator, ChainFrame};

/// Trait for the physical command bus of a chain
///
/// One call to `transmit` is one bus transaction: LOAD goes low, the frame's
/// pairs are shifted out in index order, LOAD goes high and every chip
/// latches the pair it holds.
pub trait CommandLink {
    /// Bus error
    type Error;

    /// Shift out one frame and latch it
    fn transmit(&mut self, frame: &ChainFrame) -> Result<(), Self::Error>;
}

impl<L: CommandLink + ?Sized> CommandLink for &mut L {
    type Error = L::Error;

    fn transmit(&mut self, frame: &ChainFrame) -> Result<(), Self::Error> {
        (**self).transmit(frame)
    }
}

/// The emulated chain never fails
impl CommandLink for ChainEmulator {
    type Error = Infallible;

    fn transmit(&mut self, frame: &ChainFrame) -> Result<(), Self::Error> {
        self.apply_frame(frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotchain_protocol::Command;

    #[test]
    fn test_emulator_link() {
        let mut chain = ChainEmulator::new(2).unwrap();
        let frame = ChainFrame::targeted(2, 1, Command::power(true)).unwrap();
        chain.transmit(&frame).unwrap();

        assert!(!chain.chip(0).unwrap().is_powered());
        assert!(chain.chip(1).unwrap().is_powered());
    }

    #[test]
    fn test_link_through_reference() {
        fn send<L: CommandLink>(mut link: L) -> Result<(), L::Error> {
            link.transmit(&ChainFrame::broadcast(1, Command::intensity(4)).unwrap())
        }

        let mut chain = ChainEmulator::new(1).unwrap();
        send(&mut chain).unwrap();
        assert_eq!(chain.chip(0).unwrap().intensity(), 4);
    }
}
