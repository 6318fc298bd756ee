//! Static text placement
//!
//! Offsets are measured in columns from the left edge of the visible window
//! and may be negative to start text partly off-screen.

use super::framebuffer::{FrameBuffer, MARGIN};
use crate::config::MODULE_COLUMNS;
use crate::glyph::GlyphTable;

/// Buffer index for a window offset, clamped to `[-8, N*8 - 1]`
pub fn cursor_for_offset(offset: i32, modules: usize) -> usize {
    let min = -(MARGIN as i32);
    let width = i32::try_from(modules.saturating_mul(MODULE_COLUMNS)).unwrap_or(i32::MAX);
    let max = (width - 1).max(min);
    offset.clamp(min, max).abs_diff(min) as usize
}

/// Offset that puts the right edge of `text` on the right edge of the window
pub fn align_right_offset(table: &GlyphTable, text: &str, modules: usize) -> i32 {
    let width = table.text_width(text).min(i32::MAX as usize) as i32;
    (modules * MODULE_COLUMNS) as i32 - width
}

/// Write the glyphs of `text` starting at `offset`
///
/// A glyph is started only while the cursor is left of the right margin;
/// glyphs running past the end of the buffer are truncated. Characters
/// missing from the table are skipped.
pub fn place_text(buffer: &mut FrameBuffer, table: &GlyphTable, text: &str, offset: i32) {
    let mut cursor = cursor_for_offset(offset, buffer.modules());

    for glyph in table.resolve(text) {
        if cursor >= buffer.tail() {
            break;
        }
        buffer.write_columns(cursor, glyph);
        cursor += glyph.len();
    }
}

/// Write literal column bytes starting at `offset`, truncated at the buffer end
pub fn place_columns(buffer: &mut FrameBuffer, columns: &[u8], offset: i32) {
    let cursor = cursor_for_offset(offset, buffer.modules());
    buffer.write_columns(cursor, columns);
}
