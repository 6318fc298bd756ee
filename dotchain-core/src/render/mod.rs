//! Rendering pipeline
//!
//! Glyphs are laid out into the frame buffer, animated by the scroller and
//! projected onto the chain.

pub mod framebuffer;
pub mod layout;
pub mod projection;
pub mod scroll;

pub use framebuffer::{FrameBuffer, MARGIN, MAX_BUFFER_LEN};
pub use layout::{align_right_offset, cursor_for_offset, place_columns, place_text};
pub use projection::{pattern_columns, project, write_module};
pub use scroll::Scroller;
