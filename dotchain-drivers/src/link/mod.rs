//! Command links for MAX7219 chains
//!
//! The chips sample DIN on the rising clock edge (SPI mode 0) and latch on
//! the rising edge of LOAD. LOAD behaves like an active-low chip select held
//! for the whole transaction, so either an `SpiDevice` whose CS is wired to
//! LOAD or a bare `SpiBus` with a separate LOAD pin can drive the chain.

pub mod bus;
pub mod device;

pub use bus::BusLink;
pub use device::SpiLink;

use dotchain_protocol::FrameError;

/// Errors raised while shifting a frame out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError<S, P> {
    /// SPI transfer failed
    Spi(S),
    /// LOAD pin could not be driven
    Load(P),
    /// Frame could not be encoded
    Frame(FrameError),
}
