//! Device chain transport
//!
//! Turns single register writes into whole-chain transactions. Every
//! transaction carries exactly one pair per chip; chips that should keep
//! their state receive the no-op pair.

use dotchain_protocol::{ChainFrame, Command};

use crate::traits::CommandLink;

/// A command link bound to a chain length
#[derive(Debug)]
pub struct DeviceChain<L> {
    link: L,
    modules: usize,
}

impl<L: CommandLink> DeviceChain<L> {
    /// Wrap a link driving `modules` chips
    ///
    /// The caller guarantees `modules` is a valid chain length (see
    /// `ChainConfig`).
    pub fn new(link: L, modules: usize) -> Self {
        Self { link, modules }
    }

    /// Number of chips addressed per transaction
    pub fn modules(&self) -> usize {
        self.modules
    }

    /// Change the chain length used for subsequent transactions
    pub fn set_modules(&mut self, modules: usize) {
        self.modules = modules;
    }

    /// Write the same register on every chip in one transaction
    pub fn broadcast(&mut self, address: u8, data: u8) -> Result<(), L::Error> {
        match ChainFrame::broadcast(self.modules, Command::new(address, data)) {
            Ok(frame) => self.link.transmit(&frame),
            Err(_) => Ok(()),
        }
    }

    /// Write a register on chip `index` only
    ///
    /// Indices outside the chain are ignored without touching the bus.
    pub fn send_to(&mut self, address: u8, data: u8, index: usize) -> Result<(), L::Error> {
        match ChainFrame::targeted(self.modules, index, Command::new(address, data)) {
            Ok(frame) => self.link.transmit(&frame),
            Err(_) => Ok(()),
        }
    }

    /// Send a prepared command to every chip
    pub fn broadcast_command(&mut self, command: Command) -> Result<(), L::Error> {
        self.broadcast(command.address, command.data)
    }

    /// Send a prepared command to chip `index`
    pub fn send_command_to(&mut self, command: Command, index: usize) -> Result<(), L::Error> {
        self.send_to(command.address, command.data, index)
    }

    /// Access the underlying link
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Mutable access to the underlying link
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Give back the link
    pub fn release(self) -> L {
        self.link
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dotchain_protocol::{reg, ChainEmulator};

    #[test]
    fn test_broadcast_reaches_every_chip() {
        let mut chain = DeviceChain::new(ChainEmulator::new(3).unwrap(), 3);
        chain.broadcast(reg::INTENSITY, 5).unwrap();

        let emu = chain.link();
        assert_eq!(emu.transactions(), 1);
        assert_eq!(emu.last_transaction_pairs(), 3);
        for i in 0..3 {
            assert_eq!(emu.chip(i).unwrap().intensity(), 5);
        }
    }

    #[test]
    fn test_send_to_single_chip() {
        let mut chain = DeviceChain::new(ChainEmulator::new(3).unwrap(), 3);
        chain.send_to(reg::DIGIT0, 0xAA, 0).unwrap();

        let emu = chain.link();
        assert_eq!(emu.last_transaction_pairs(), 3);
        assert_eq!(emu.chip(0).unwrap().row(0), Some(0xAA));
        assert_eq!(emu.chip(1).unwrap().row(0), Some(0));
        assert_eq!(emu.chip(2).unwrap().row(0), Some(0));
    }

    #[test]
    fn test_send_to_out_of_range_is_silent() {
        let mut chain = DeviceChain::new(ChainEmulator::new(2).unwrap(), 2);
        chain.send_to(reg::DIGIT0, 0xFF, 2).unwrap();
        chain.send_to(reg::DIGIT0, 0xFF, 99).unwrap();

        assert_eq!(chain.link().transactions(), 0);
    }

    #[test]
    fn test_command_helpers() {
        let mut chain = DeviceChain::new(ChainEmulator::new(2).unwrap(), 2);
        chain.broadcast_command(Command::power(true)).unwrap();
        chain.send_command_to(Command::intensity(2), 1).unwrap();

        let emu = chain.release();
        assert!(emu.chip(0).unwrap().is_powered());
        assert!(emu.chip(1).unwrap().is_powered());
        assert_eq!(emu.chip(0).unwrap().intensity(), 0);
        assert_eq!(emu.chip(1).unwrap().intensity(), 2);
    }
}
