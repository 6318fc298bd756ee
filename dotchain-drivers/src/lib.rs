//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in dotchain-core on top of `embedded-hal` 1.0:
//!
//! - Command links for the MAX7219 chain (SPI device, raw SPI bus + LOAD pin)
//! - A pacer backed by any `DelayNs` timer

#![no_std]
#![deny(unsafe_code)]

pub mod link;
pub mod pacer;

pub use link::{BusLink, LinkError, SpiLink};
pub use pacer::DelayPacer;
