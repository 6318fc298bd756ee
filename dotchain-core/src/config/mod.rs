//! Configuration types
//!
//! Board-agnostic configuration structures plus a small parser for the
//! `chain.toml` file embedded in the firmware.

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ParseError};
pub use types::*;
