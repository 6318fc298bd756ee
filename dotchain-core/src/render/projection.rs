//! Projection of the frame buffer onto the chain
//!
//! Each logical 8-column group of the visible window is written to the row
//! planes of one chip, after the chain order mapping and the module
//! rotation are applied.

use dotchain_protocol::DIGITS;

use super::framebuffer::FrameBuffer;
use crate::chain::{physical_index, DeviceChain};
use crate::config::{ChainConfig, Rotation, MODULE_COLUMNS};
use crate::matrix::{rotate, rotate_columns, Matrix8x8};
use crate::traits::CommandLink;

/// Column bytes of `matrix` as seen on a module mounted with `rotation`
pub fn pattern_columns(matrix: &Matrix8x8, rotation: Rotation) -> [u8; MODULE_COLUMNS] {
    rotate(matrix, rotation).to_columns()
}

/// Write 8 columns to chip `index`, rotating first when configured
pub fn write_module<L: CommandLink>(
    chain: &mut DeviceChain<L>,
    columns: &[u8; MODULE_COLUMNS],
    index: usize,
    rotation: Rotation,
) -> Result<(), L::Error> {
    let columns = match rotation {
        Rotation::None => *columns,
        mode => rotate_columns(columns, mode),
    };

    for (&address, &data) in DIGITS.iter().zip(columns.iter()) {
        chain.send_to(address, data, index)?;
    }
    Ok(())
}

/// Push the visible window of `buffer` to every chip
pub fn project<L: CommandLink>(
    chain: &mut DeviceChain<L>,
    buffer: &FrameBuffer,
    config: &ChainConfig,
) -> Result<(), L::Error> {
    let modules = config.modules();

    for group in 0..modules {
        let Some(columns) = buffer.group(group) else {
            break;
        };
        let physical = physical_index(group, modules, config.reversed());
        write_module(chain, &columns, physical, config.rotation())?;
    }
    Ok(())
}
