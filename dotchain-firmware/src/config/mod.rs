//! Configuration loading
//!
//! The chain configuration is compiled into the firmware from `chain.toml`
//! and parsed at boot by the no_std parser in dotchain-core.

pub mod loader;

pub use loader::load_config;
