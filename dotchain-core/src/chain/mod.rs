//! Chain addressing
//!
//! Transport of register writes along the daisy chain and the mapping from
//! logical display groups to chain indices.

pub mod order;
pub mod transport;

pub use order::physical_index;
pub use transport::DeviceChain;
