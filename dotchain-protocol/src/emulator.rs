//! Software model of a MAX7219 chain
//!
//! Models what the physical chain does with the bytes on DIN: each chip is a
//! 16-bit shift register feeding the next chip, and a LOAD rising edge makes
//! every chip latch the pair it currently holds. Used on the host to check
//! that a sequence of transactions leaves each chip in the expected state.

use crate::command::{reg, Command, DIGITS};
use crate::frame::{ChainFrame, FrameError, MAX_CHAIN_LEN, MAX_FRAME_SIZE};

/// Register file of one emulated chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipState {
    registers: [u8; 16],
}

impl ChipState {
    /// Raw register value
    pub fn register(&self, address: u8) -> u8 {
        self.registers[(address & 0x0F) as usize]
    }

    /// Column mask held by row plane `row`
    pub fn row(&self, row: usize) -> Option<u8> {
        DIGITS.get(row).map(|&address| self.register(address))
    }

    /// All eight row planes in row order
    pub fn rows(&self) -> [u8; 8] {
        core::array::from_fn(|row| self.register(DIGITS[row]))
    }

    /// Current intensity setting
    pub fn intensity(&self) -> u8 {
        self.register(reg::INTENSITY)
    }

    /// True when the chip is in normal operation
    pub fn is_powered(&self) -> bool {
        self.register(reg::SHUTDOWN) & 0x01 != 0
    }

    fn apply(&mut self, command: Command) {
        if !command.is_noop() {
            self.registers[(command.address & 0x0F) as usize] = command.data;
        }
    }
}

/// Emulated chain of MAX7219 chips
///
/// Chip 0 is the farthest from the controller; bytes enter at chip `len-1`.
#[derive(Debug, Clone)]
pub struct ChainEmulator {
    chain_len: usize,
    /// Concatenated shift registers, oldest byte (farthest chip) first
    shift: [u8; MAX_FRAME_SIZE],
    chips: [ChipState; MAX_CHAIN_LEN],
    load_low: bool,
    clocked: usize,
    transactions: usize,
    last_transaction_pairs: usize,
}

impl ChainEmulator {
    /// Create an emulated chain of `chain_len` chips, all registers zero
    pub fn new(chain_len: usize) -> Result<Self, FrameError> {
        if chain_len == 0 || chain_len > MAX_CHAIN_LEN {
            return Err(FrameError::InvalidChainLength);
        }

        Ok(Self {
            chain_len,
            shift: [0; MAX_FRAME_SIZE],
            chips: [ChipState::default(); MAX_CHAIN_LEN],
            load_low: false,
            clocked: 0,
            transactions: 0,
            last_transaction_pairs: 0,
        })
    }

    /// Number of chips
    pub fn len(&self) -> usize {
        self.chain_len
    }

    /// Chains always have at least one chip
    pub fn is_empty(&self) -> bool {
        self.chain_len == 0
    }

    /// Drive LOAD low; chips start accepting bytes
    pub fn begin(&mut self) {
        self.load_low = true;
        self.clocked = 0;
    }

    /// Clock one byte into the nearest chip
    ///
    /// Bytes clocked while LOAD is high are ignored.
    pub fn clock_byte(&mut self, byte: u8) {
        if !self.load_low {
            return;
        }

        let width = self.chain_len * 2;
        self.shift.copy_within(1..width, 0);
        self.shift[width - 1] = byte;
        self.clocked += 1;
    }

    /// Drive LOAD high; every chip latches the pair it holds
    pub fn latch(&mut self) {
        if !self.load_low {
            return;
        }

        for (index, chip) in self.chips[..self.chain_len].iter_mut().enumerate() {
            let pair = [self.shift[index * 2], self.shift[index * 2 + 1]];
            chip.apply(Command::from_bytes(pair));
        }

        self.load_low = false;
        self.transactions += 1;
        self.last_transaction_pairs = self.clocked / 2;
    }

    /// Run a complete transaction for `frame`
    pub fn apply_frame(&mut self, frame: &ChainFrame) {
        self.begin();
        for cmd in frame.commands() {
            for byte in cmd.to_bytes() {
                self.clock_byte(byte);
            }
        }
        self.latch();
    }

    /// Register state of chip `index`
    pub fn chip(&self, index: usize) -> Option<&ChipState> {
        self.chips[..self.chain_len].get(index)
    }

    /// Number of completed transactions
    pub fn transactions(&self) -> usize {
        self.transactions
    }

    /// Pairs clocked during the most recent transaction
    pub fn last_transaction_pairs(&self) -> usize {
        self.last_transaction_pairs
    }
}
