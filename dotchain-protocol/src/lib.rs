//! MAX7219 Daisy-Chain Wire Protocol
//!
//! This crate defines what travels over the shared command bus of a chain of
//! MAX7219 LED-matrix drivers. Every chip has a 16-bit shift register; a byte
//! pair clocked in pushes the previously held pair out of DOUT into the next
//! chip. When LOAD rises, every chip latches whatever pair it currently holds.
//!
//! # Transaction Overview
//!
//! One transaction always carries exactly one pair per chip:
//! ```text
//!  LOAD ‾‾\____________________________________/‾‾
//!  DIN      [addr0 data0] [addr1 data1] ... [addrN-1 dataN-1]
//!            └─ ends in chip 0 (farthest)      └─ ends in chip N-1 (nearest)
//! ```
//!
//! Chips that should stay untouched receive the no-op pair `(0, 0)`.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod emulator;
pub mod frame;
pub mod pattern;

pub use command::{reg, Command, DIGITS, MAX_INTENSITY, SCAN_ALL_DIGITS};
pub use emulator::{ChainEmulator, ChipState};
pub use frame::{ChainFrame, FrameError, MAX_CHAIN_LEN, MAX_FRAME_SIZE};
pub use pattern::{parse_pattern, MAX_PATTERN_COLUMNS};
