//! Custom-pattern text encoding
//!
//! Column bytes written as comma-joined binary tokens, one prefix character
//! followed by 8 digits:
//! ```text
//! B00100000,B01000000,B10000110
//! ```
//! The parser walks fixed 10-character windows (prefix, 8 bits, separator)
//! from the start of the text and reads the 8 characters after each window's
//! first character. Anything other than '0' or '1' in a bit position reads as
//! 0; a window cut short by the end of the text yields the value of the digits
//! that are present.

use heapless::Vec;

/// Maximum number of columns decoded from one pattern string
pub const MAX_PATTERN_COLUMNS: usize = 64;

/// Characters per token window
const WINDOW: usize = 10;

/// Bit characters per token
const BITS: usize = 8;

/// Parse a pattern string into column bytes
///
/// Windows beyond `MAX_PATTERN_COLUMNS` are dropped.
pub fn parse_pattern(text: &str) -> Vec<u8, MAX_PATTERN_COLUMNS> {
    let mut columns = Vec::new();
    let mut current: Option<u8> = None;

    for (position, ch) in text.chars().enumerate() {
        let offset = position % WINDOW;

        if offset == 0 {
            if let Some(value) = current.take() {
                if columns.push(value).is_err() {
                    return columns;
                }
            }
            current = Some(0);
        } else if offset <= BITS {
            if let Some(value) = current.as_mut() {
                let bit = u8::from(ch == '1');
                *value = (*value << 1) | bit;
            }
        }
    }

    if let Some(value) = current {
        let _ = columns.push(value);
    }

    columns
}
