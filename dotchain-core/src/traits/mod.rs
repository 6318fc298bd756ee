//! Hardware abstraction traits
//!
//! These traits define the interface between the display logic and the
//! board-specific bus and timer implementations.

pub mod link;
pub mod pacer;

pub use link::CommandLink;
pub use pacer::Pacer;
