//! Column frame buffer
//!
//! Holds `(N + 2) * 8` column bytes: an 8-column margin on each side of the
//! visible `N * 8` window. Text is written into the right margin before it
//! scrolls into view and leaves through the left margin.

use heapless::Vec;

use crate::config::{ConfigError, MAX_MODULES, MODULE_COLUMNS};

/// Width of each off-screen margin in columns
pub const MARGIN: usize = MODULE_COLUMNS;

/// Largest buffer the chain can need
pub const MAX_BUFFER_LEN: usize = (MAX_MODULES + 2) * MODULE_COLUMNS;

/// Column buffer covering the visible window plus both margins
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameBuffer {
    columns: Vec<u8, MAX_BUFFER_LEN>,
    modules: usize,
}

impl FrameBuffer {
    /// Zeroed buffer for a chain of `modules` chips
    pub fn new(modules: usize) -> Result<Self, ConfigError> {
        if modules == 0 || modules > MAX_MODULES {
            return Err(ConfigError::ModuleCount);
        }

        let mut columns = Vec::new();
        columns
            .resize((modules + 2) * MODULE_COLUMNS, 0)
            .map_err(|_| ConfigError::ModuleCount)?;

        Ok(Self { columns, modules })
    }

    /// Number of chips the buffer is sized for
    pub fn modules(&self) -> usize {
        self.modules
    }

    /// Total length including margins
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Buffers always hold at least the two margins
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Index of the first column of the right margin
    pub fn tail(&self) -> usize {
        self.len() - MARGIN
    }

    /// Column at `index`
    pub fn get(&self, index: usize) -> Option<u8> {
        self.columns.get(index).copied()
    }

    /// Overwrite column `index`; out-of-range writes are ignored
    pub fn set(&mut self, index: usize, value: u8) {
        if let Some(column) = self.columns.get_mut(index) {
            *column = value;
        }
    }

    /// Copy `data` starting at `start`, stopping at the buffer end
    ///
    /// Returns the number of columns written.
    pub fn write_columns(&mut self, start: usize, data: &[u8]) -> usize {
        let Some(dest) = self.columns.get_mut(start..) else {
            return 0;
        };
        let count = dest.len().min(data.len());
        dest[..count].copy_from_slice(&data[..count]);
        count
    }

    /// Zero every column
    pub fn clear(&mut self) {
        self.columns.iter_mut().for_each(|c| *c = 0);
    }

    /// Move every column one step toward index 0 and blank the last one
    pub fn shift_left(&mut self) {
        self.columns.rotate_left(1);
        if let Some(last) = self.columns.last_mut() {
            *last = 0;
        }
    }

    /// Visible window (margins excluded)
    pub fn window(&self) -> &[u8] {
        &self.columns[MARGIN..self.tail()]
    }

    /// The 8 columns of logical group `group`
    pub fn group(&self, group: usize) -> Option<[u8; MODULE_COLUMNS]> {
        let start = group.checked_mul(MODULE_COLUMNS)?;
        let slice = self.window().get(start..start + MODULE_COLUMNS)?;
        let mut columns = [0u8; MODULE_COLUMNS];
        columns.copy_from_slice(slice);
        Some(columns)
    }

    /// Whole buffer including margins
    pub fn as_slice(&self) -> &[u8] {
        &self.columns
    }
}
