//! 8×8 module patterns and their rotation

pub mod grid;
pub mod rotate;

pub use grid::Matrix8x8;
pub use rotate::{rotate, rotate_columns};
