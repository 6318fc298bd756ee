//! Glyph table
//!
//! Character to column-bitmap lookup. The table starts with the built-in
//! ASCII font and grows with custom glyphs registered at runtime. Lookup
//! returns the first entry for a character, so a custom glyph for a
//! character the font already covers is stored but never found.

pub mod font;

use heapless::Vec;

pub use font::BUILTIN_GLYPHS;

/// Maximum number of runtime-registered glyphs
pub const MAX_CUSTOM_GLYPHS: usize = 32;

/// Maximum width of a runtime-registered glyph in columns
pub const MAX_GLYPH_COLUMNS: usize = 32;

/// A runtime-registered glyph
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CustomGlyph {
    chr: char,
    columns: Vec<u8, MAX_GLYPH_COLUMNS>,
}

impl CustomGlyph {
    /// Character this glyph is registered for
    pub fn chr(&self) -> char {
        self.chr
    }

    /// Column bytes
    pub fn columns(&self) -> &[u8] {
        &self.columns
    }
}

/// Ordered, append-only glyph table
#[derive(Debug, Clone, Default)]
pub struct GlyphTable {
    custom: Vec<CustomGlyph, MAX_CUSTOM_GLYPHS>,
}

impl GlyphTable {
    /// Table holding only the built-in font
    pub fn new() -> Self {
        Self { custom: Vec::new() }
    }

    /// Columns of the first glyph registered for `chr`
    pub fn lookup(&self, chr: char) -> Option<&[u8]> {
        self.iter()
            .find(|&(c, _)| c == chr)
            .map(|(_, columns)| columns)
    }

    /// Register a custom glyph at the end of the table
    ///
    /// Ignored unless `chr` is exactly one character, or when the table or
    /// the glyph exceeds its capacity.
    pub fn append(&mut self, chr: &str, columns: &[u8]) {
        let mut chars = chr.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return;
        };

        let Ok(columns) = Vec::from_slice(columns) else {
            return;
        };

        let _ = self.custom.push(CustomGlyph { chr: c, columns });
    }

    /// Every entry in lookup order: built-ins first, then custom glyphs
    pub fn iter(&self) -> impl Iterator<Item = (char, &[u8])> + '_ {
        BUILTIN_GLYPHS
            .iter()
            .map(|&(c, columns)| (c, columns))
            .chain(self.custom.iter().map(|g| (g.chr, g.columns())))
    }

    /// Total number of entries
    pub fn len(&self) -> usize {
        BUILTIN_GLYPHS.len() + self.custom.len()
    }

    /// The built-in font is never empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Runtime-registered glyphs in append order
    pub fn custom_glyphs(&self) -> &[CustomGlyph] {
        &self.custom
    }

    /// Columns of every resolvable character of `text`, in order
    pub fn resolve<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a [u8]> + 'a {
        text.chars().filter_map(move |c| self.lookup(c))
    }

    /// Total column width of the resolvable characters of `text`
    pub fn text_width(&self, text: &str) -> usize {
        self.resolve(text).map(<[u8]>::len).sum()
    }
}
