//! 8×8 binary grid

/// Side length of a module
pub const SIZE: usize = 8;

/// An 8×8 grid of cells, each 0 or 1
///
/// Indexed `[x][y]`. When built from column bytes, `x` is the column and `y`
/// the bit (row) within that column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Matrix8x8 {
    cells: [[u8; SIZE]; SIZE],
}

impl Matrix8x8 {
    /// All cells off
    pub const fn empty() -> Self {
        Self {
            cells: [[0; SIZE]; SIZE],
        }
    }

    /// All cells on
    pub const fn full() -> Self {
        Self {
            cells: [[1; SIZE]; SIZE],
        }
    }

    /// Build from raw cells; any non-zero value counts as on
    pub fn from_cells(cells: [[u8; SIZE]; SIZE]) -> Self {
        let mut matrix = Self::empty();
        for (x, row) in cells.iter().enumerate() {
            for (y, &value) in row.iter().enumerate() {
                matrix.cells[x][y] = u8::from(value != 0);
            }
        }
        matrix
    }

    /// Unpack column bytes: cell `[c][b]` is bit `b` of column `c`
    pub fn from_columns(columns: &[u8; SIZE]) -> Self {
        let mut matrix = Self::empty();
        for (c, &column) in columns.iter().enumerate() {
            for b in 0..SIZE {
                matrix.cells[c][b] = (column >> b) & 1;
            }
        }
        matrix
    }

    /// Pack back into column bytes: bit `j` of column `i` is cell `[i][j]`
    pub fn to_columns(&self) -> [u8; SIZE] {
        let mut columns = [0u8; SIZE];
        for (i, column) in columns.iter_mut().enumerate() {
            for j in 0..SIZE {
                *column |= self.cells[i][j] << j;
            }
        }
        columns
    }

    /// Cell value, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        self.cells.get(x).and_then(|row| row.get(y)).copied()
    }

    /// Set a cell; out-of-range coordinates are ignored
    pub fn set(&mut self, x: usize, y: usize, on: bool) {
        if let Some(cell) = self.cells.get_mut(x).and_then(|row| row.get_mut(y)) {
            *cell = u8::from(on);
        }
    }

    /// Flip a cell; out-of-range coordinates are ignored
    pub fn toggle(&mut self, x: usize, y: usize) {
        if let Some(cell) = self.cells.get_mut(x).and_then(|row| row.get_mut(y)) {
            *cell ^= 1;
        }
    }

    /// Raw cells
    pub fn cells(&self) -> &[[u8; SIZE]; SIZE] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [[u8; SIZE]; SIZE] {
        &mut self.cells
    }
}
