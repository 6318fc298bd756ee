//! Scroll state machine
//!
//! Text enters through the right margin one glyph at a time and the whole
//! buffer shifts one column left per tick. A run lasts exactly
//! `W + N * 8` ticks, where `W` is the width of the resolvable text, so the
//! last column has left the visible window when it ends.

use core::str::Chars;

use super::framebuffer::FrameBuffer;
use crate::config::MODULE_COLUMNS;
use crate::glyph::GlyphTable;

/// Progress of one scroll run
#[derive(Debug, Clone)]
pub struct Scroller<'a> {
    table: &'a GlyphTable,
    chars: Chars<'a>,
    /// Ticks until the next glyph is injected
    countdown: i32,
    total_ticks: usize,
    elapsed: usize,
}

impl<'a> Scroller<'a> {
    /// Prepare to scroll `text` across `modules` chips
    pub fn new(table: &'a GlyphTable, text: &'a str, modules: usize) -> Self {
        Self {
            table,
            chars: text.chars(),
            countdown: 1,
            total_ticks: table.text_width(text) + modules * MODULE_COLUMNS,
            elapsed: 0,
        }
    }

    /// Number of ticks in the whole run
    pub fn total_ticks(&self) -> usize {
        self.total_ticks
    }

    /// Ticks left before the run is over
    pub fn remaining(&self) -> usize {
        self.total_ticks - self.elapsed
    }

    /// True once every tick has run
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.total_ticks
    }

    fn next_glyph(&mut self) -> Option<&'a [u8]> {
        let table = self.table;
        self.chars.by_ref().find_map(|c| table.lookup(c))
    }

    /// Advance one column
    ///
    /// Injects the next glyph at the right margin when its turn has come,
    /// then shifts the buffer. Returns `false` without touching the buffer
    /// once the run is over.
    pub fn tick(&mut self, buffer: &mut FrameBuffer) -> bool {
        if self.is_finished() {
            return false;
        }

        self.countdown -= 1;
        if self.countdown == 0 {
            if let Some(glyph) = self.next_glyph() {
                buffer.write_columns(buffer.tail(), glyph);
                self.countdown = glyph.len() as i32;
            }
        }

        buffer.shift_left();
        self.elapsed += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::framebuffer::MARGIN;

    #[test]
    fn test_tick_count() {
        let table = GlyphTable::new();
        let mut buffer = FrameBuffer::new(2).unwrap();
        let mut scroller = Scroller::new(&table, "Hi", 2);
        assert_eq!(scroller.total_ticks(), 9 + 16);

        let mut ticks = 0;
        while scroller.tick(&mut buffer) {
            ticks += 1;
        }
        assert_eq!(ticks, 25);
        assert!(scroller.is_finished());
        assert_eq!(scroller.remaining(), 0);
    }

    #[test]
    fn test_first_column_enters_window() {
        let table = GlyphTable::new();
        let mut buffer = FrameBuffer::new(1).unwrap();
        let mut scroller = Scroller::new(&table, "H", 1);

        scroller.tick(&mut buffer);
        let h = table.lookup('H').unwrap();
        // Injected at the margin, then shifted one left
        assert_eq!(buffer.get(buffer.tail() - 1), Some(h[0]));
        assert!(buffer.window()[..MARGIN - 1].iter().all(|&c| c == 0));
    }

    #[test]
    fn test_text_has_left_when_finished() {
        let table = GlyphTable::new();
        let mut buffer = FrameBuffer::new(2).unwrap();
        let mut scroller = Scroller::new(&table, "Hello", 2);
        while scroller.tick(&mut buffer) {}

        assert!(buffer.window().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_glyphs_injected_back_to_back() {
        let table = GlyphTable::new();
        let mut buffer = FrameBuffer::new(2).unwrap();
        let mut scroller = Scroller::new(&table, "Hi", 2);

        // After W ticks the whole text sits just inside the right edge
        for _ in 0..9 {
            scroller.tick(&mut buffer);
        }
        let start = buffer.tail() - 9;
        assert_eq!(&buffer.as_slice()[start..start + 5], table.lookup('H').unwrap());
        assert_eq!(
            &buffer.as_slice()[start + 5..start + 9],
            table.lookup('i').unwrap()
        );
    }

    #[test]
    fn test_unknown_characters_skipped() {
        let table = GlyphTable::new();
        let scroller = Scroller::new(&table, "H\u{2603}i", 1);
        assert_eq!(scroller.total_ticks(), 9 + 8);
    }

    #[test]
    fn test_empty_text_still_clears_window() {
        let table = GlyphTable::new();
        let mut buffer = FrameBuffer::new(1).unwrap();
        buffer.write_columns(MARGIN, &[0xFF; 8]);
        let mut scroller = Scroller::new(&table, "", 1);
        while scroller.tick(&mut buffer) {}

        assert!(buffer.window().iter().all(|&c| c == 0));
        // Shifted into the left margin
        assert!(buffer.as_slice()[..MARGIN].iter().all(|&c| c == 0xFF));
    }

    #[test]
    fn test_zero_width_glyph_stops_injection() {
        let mut table = GlyphTable::new();
        table.append("\u{2205}", &[]);
        assert_eq!(table.lookup('\u{2205}'), Some(&[][..]));

        let mut buffer = FrameBuffer::new(1).unwrap();
        let mut scroller = Scroller::new(&table, "\u{2205}H", 1);
        // Width of 'H' plus the window; the empty glyph adds nothing
        assert_eq!(scroller.total_ticks(), 5 + 8);

        let mut ticks = 0;
        while scroller.tick(&mut buffer) {
            ticks += 1;
            assert!(buffer.as_slice().iter().all(|&c| c == 0));
        }
        assert_eq!(ticks, 13);
    }
}
