//! Chain frames
//!
//! A chain frame is the payload of one LOAD-low/LOAD-high transaction:
//! exactly one command per chip, in chain-index order. Index 0 is transmitted
//! first and therefore ends up in the chip farthest from the controller.
//!
//! Wire format (2 bytes per chip):
//! - ADDRESS (1 byte): register address for chain index i
//! - DATA (1 byte): register data for chain index i

use heapless::Vec;

use crate::command::Command;

/// Maximum number of chips in one chain
pub const MAX_CHAIN_LEN: usize = 16;

/// Maximum encoded frame size (two bytes per chip)
pub const MAX_FRAME_SIZE: usize = MAX_CHAIN_LEN * 2;

/// Errors that can occur while building or encoding a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Chain length is zero or exceeds `MAX_CHAIN_LEN`
    InvalidChainLength,
    /// Target index is not inside the chain
    IndexOutOfRange,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// One command per chip, in transmission order
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChainFrame {
    commands: Vec<Command, MAX_CHAIN_LEN>,
}

impl ChainFrame {
    /// The same command for every chip
    pub fn broadcast(chain_len: usize, command: Command) -> Result<Self, FrameError> {
        Self::check_len(chain_len)?;

        let mut commands = Vec::new();
        for _ in 0..chain_len {
            commands
                .push(command)
                .map_err(|_| FrameError::InvalidChainLength)?;
        }
        Ok(Self { commands })
    }

    /// `command` for chip `index`, no-op for every other chip
    pub fn targeted(chain_len: usize, index: usize, command: Command) -> Result<Self, FrameError> {
        Self::check_len(chain_len)?;
        if index >= chain_len {
            return Err(FrameError::IndexOutOfRange);
        }

        let mut commands = Vec::new();
        for i in 0..chain_len {
            let cmd = if i == index { command } else { Command::noop() };
            commands.push(cmd).map_err(|_| FrameError::InvalidChainLength)?;
        }
        Ok(Self { commands })
    }

    fn check_len(chain_len: usize) -> Result<(), FrameError> {
        if chain_len == 0 || chain_len > MAX_CHAIN_LEN {
            return Err(FrameError::InvalidChainLength);
        }
        Ok(())
    }

    /// Number of pairs (always the chain length)
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Frames are never empty; provided for API symmetry
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands in transmission order
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Command latched by chip `index`
    pub fn command_for(&self, index: usize) -> Option<Command> {
        self.commands.get(index).copied()
    }

    /// Encode into a byte buffer
    ///
    /// Returns the number of bytes written (`2 * len()`).
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, FrameError> {
        let frame_len = self.commands.len() * 2;
        if buffer.len() < frame_len {
            return Err(FrameError::BufferTooSmall);
        }

        for (pair, cmd) in buffer.chunks_exact_mut(2).zip(self.commands.iter()) {
            pair.copy_from_slice(&cmd.to_bytes());
        }

        Ok(frame_len)
    }

    /// Encode into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| FrameError::BufferTooSmall)?;
        Ok(vec)
    }
}
