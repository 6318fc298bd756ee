//! Board-agnostic core logic for MAX7219 LED-matrix chains
//!
//! This crate contains everything that turns text and bit patterns into
//! register writes, without depending on a specific bus implementation:
//!
//! - Configuration types and the `chain.toml` parser
//! - Link and pacing traits implemented by drivers
//! - Device chain transport (broadcast / single-chip addressing)
//! - Frame buffer with entry/exit margins
//! - Glyph table, static layout and the scroll engine
//! - 8×8 matrix rotation and chain order mapping
//! - Projection of the visible window onto the chips
//!
//! [`ChainDisplay`] ties these together into a single owned context.

#![no_std]
#![deny(unsafe_code)]

pub mod chain;
pub mod config;
pub mod display;
pub mod glyph;
pub mod matrix;
pub mod render;
pub mod traits;

pub use display::ChainDisplay;
