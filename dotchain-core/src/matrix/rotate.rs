//! Quarter-turn rotation of 8×8 grids
//!
//! Rotation works ring by ring from the outside in, cycling four cells at a
//! time, on a copy of the input.

use super::grid::{Matrix8x8, SIZE};
use crate::config::Rotation;

const LAST: usize = SIZE - 1;

/// Rotate `matrix` according to `mode`
pub fn rotate(matrix: &Matrix8x8, mode: Rotation) -> Matrix8x8 {
    let mut out = *matrix;
    let m = out.cells_mut();

    match mode {
        Rotation::None => {}
        Rotation::Clockwise => {
            for i in 0..SIZE / 2 {
                for j in i..LAST - i {
                    let tmp = m[i][j];
                    m[i][j] = m[LAST - j][i];
                    m[LAST - j][i] = m[LAST - i][LAST - j];
                    m[LAST - i][LAST - j] = m[j][LAST - i];
                    m[j][LAST - i] = tmp;
                }
            }
        }
        Rotation::CounterClockwise => {
            for i in 0..SIZE / 2 {
                for j in i..LAST - i {
                    let tmp = m[i][j];
                    m[i][j] = m[j][LAST - i];
                    m[j][LAST - i] = m[LAST - i][LAST - j];
                    m[LAST - i][LAST - j] = m[LAST - j][i];
                    m[LAST - j][i] = tmp;
                }
            }
        }
        Rotation::HalfTurn => {
            for i in 0..SIZE / 2 {
                for j in i..LAST - i {
                    let tmp = m[i][j];
                    m[i][j] = m[LAST - i][LAST - j];
                    m[LAST - i][LAST - j] = tmp;

                    let tmp = m[j][LAST - i];
                    m[j][LAST - i] = m[LAST - j][i];
                    m[LAST - j][i] = tmp;
                }
            }
        }
    }

    out
}

/// Rotate column bytes through the grid representation
pub fn rotate_columns(columns: &[u8; SIZE], mode: Rotation) -> [u8; SIZE] {
    rotate(&Matrix8x8::from_columns(columns), mode).to_columns()
}
