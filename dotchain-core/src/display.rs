//! Display context
//!
//! `ChainDisplay` owns everything needed to drive one chain: the transport,
//! the configuration, the frame buffer and the glyph table. All drawing goes
//! through `&mut self`, so transactions and buffer updates never interleave.

use dotchain_protocol::{Command, DIGITS};

use crate::chain::DeviceChain;
use crate::config::{ChainConfig, ConfigError, DisplayConfig, Rotation, MODULE_COLUMNS};
use crate::glyph::GlyphTable;
use crate::matrix::Matrix8x8;
use crate::render::{
    align_right_offset, pattern_columns, place_columns, place_text, project, write_module,
    FrameBuffer, Scroller,
};
use crate::traits::{CommandLink, Pacer};

/// A chain of LED matrix modules presented as one horizontal display
#[derive(Debug)]
pub struct ChainDisplay<L> {
    chain: DeviceChain<L>,
    config: DisplayConfig,
    buffer: FrameBuffer,
    glyphs: GlyphTable,
}

impl<L: CommandLink> ChainDisplay<L> {
    /// Create a display context; nothing is sent until `init`
    pub fn new(link: L, config: DisplayConfig) -> Result<Self, ConfigError> {
        let modules = config.chain.modules();
        Ok(Self {
            chain: DeviceChain::new(link, modules),
            buffer: FrameBuffer::new(modules)?,
            config,
            glyphs: GlyphTable::new(),
        })
    }

    /// Current configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Chain configuration in effect
    pub fn chain_config(&self) -> &ChainConfig {
        &self.config.chain
    }

    /// Frame buffer contents
    pub fn frame_buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    /// Glyph table
    pub fn glyphs(&self) -> &GlyphTable {
        &self.glyphs
    }

    /// Underlying link
    pub fn link(&self) -> &L {
        self.chain.link()
    }

    /// Give back the link
    pub fn release(self) -> L {
        self.chain.release()
    }

    /// Bring every chip into a known state and blank it
    ///
    /// Shutdown, display test off, no BCD decode, all 8 row planes scanned,
    /// configured intensity, power on, then all row planes cleared.
    pub fn init(&mut self) -> Result<(), L::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "init chain: {} modules, intensity {}",
            self.config.chain.modules(),
            self.config.intensity
        );

        for command in Command::init_sequence(self.config.intensity) {
            self.chain.broadcast_command(command)?;
        }
        self.clear_all()
    }

    /// Change module rotation and wiring order
    ///
    /// Takes effect at the next projection.
    pub fn set_orientation(&mut self, rotation: Rotation, reversed: bool) {
        self.config.chain.set_orientation(rotation, reversed);
    }

    /// Change the chip count; the frame buffer is reallocated blank
    pub fn set_module_count(&mut self, modules: usize) -> Result<(), ConfigError> {
        let buffer = FrameBuffer::new(modules)?;
        self.config.chain.set_modules(modules)?;
        self.chain.set_modules(modules);
        self.buffer = buffer;

        #[cfg(feature = "defmt")]
        defmt::debug!("chain resized to {} modules", modules);

        Ok(())
    }

    /// Register a custom glyph for `chr` (a single character)
    pub fn add_custom_char(&mut self, chr: &str, columns: &[u8]) {
        self.glyphs.append(chr, columns);
    }

    /// Draw `text` with its left edge at window column `offset`
    pub fn display_text(&mut self, text: &str, offset: i32, clear: bool) -> Result<(), L::Error> {
        if clear {
            self.clear_buffer_and_display()?;
        }
        place_text(&mut self.buffer, &self.glyphs, text, offset);
        self.project()
    }

    /// Draw `text` flush against the right edge of the display
    pub fn display_text_align_right(&mut self, text: &str, clear: bool) -> Result<(), L::Error> {
        let offset = align_right_offset(&self.glyphs, text, self.config.chain.modules());
        self.display_text(text, offset, clear)
    }

    /// Draw literal column bytes at window column `offset`
    pub fn display_custom_character(
        &mut self,
        columns: &[u8],
        offset: i32,
        clear: bool,
    ) -> Result<(), L::Error> {
        if clear {
            self.clear_buffer_and_display()?;
        }
        place_columns(&mut self.buffer, columns, offset);
        self.project()
    }

    /// Scroll `text` from right to left across the display
    ///
    /// Pauses `delay_ms` after each column shift and `end_delay_ms` once the
    /// text has left the display.
    pub fn scroll_text<P: Pacer>(
        &mut self,
        text: &str,
        delay_ms: u32,
        end_delay_ms: u32,
        pacer: &mut P,
    ) -> Result<(), L::Error> {
        self.clear_buffer_and_display()?;

        let mut scroller = Scroller::new(&self.glyphs, text, self.config.chain.modules());

        #[cfg(feature = "defmt")]
        defmt::debug!("scroll: {} ticks", scroller.total_ticks());

        while scroller.tick(&mut self.buffer) {
            project(&mut self.chain, &self.buffer, &self.config.chain)?;
            pacer.pause_ms(delay_ms);
        }

        pacer.pause_ms(end_delay_ms);
        Ok(())
    }

    /// Scroll `text` using the configured timing
    pub fn scroll<P: Pacer>(&mut self, text: &str, pacer: &mut P) -> Result<(), L::Error> {
        let timing = self.config.scroll;
        self.scroll_text(text, timing.delay_ms, timing.end_delay_ms, pacer)
    }

    /// Show every glyph in the table, one module at a time
    pub fn font_demo<P: Pacer>(&mut self, delay_ms: u32, pacer: &mut P) -> Result<(), L::Error> {
        self.clear_all()?;

        let modules = self.config.chain.modules();
        let mut glyphs = self.glyphs.iter();
        let Some((_, blank)) = glyphs.next() else {
            return Ok(());
        };

        let mut module = 0;
        for (_, glyph) in glyphs {
            let offset = (module * MODULE_COLUMNS) as i32;

            // Two blanks wipe whatever the previous glyph on this module left
            for (columns, at) in [(blank, offset), (blank, offset + 4), (glyph, offset)] {
                place_columns(&mut self.buffer, columns, at);
                project(&mut self.chain, &self.buffer, &self.config.chain)?;
            }

            module = if module == modules - 1 { 0 } else { module + 1 };
            pacer.pause_ms(delay_ms);
        }

        pacer.pause_ms(delay_ms);
        self.clear_all()
    }

    /// Leave or enter shutdown on every chip
    pub fn set_power(&mut self, on: bool) -> Result<(), L::Error> {
        self.chain.broadcast_command(Command::power(on))
    }

    /// Set the intensity (0-15) of every chip
    pub fn set_brightness(&mut self, level: u8) -> Result<(), L::Error> {
        self.chain.broadcast_command(Command::intensity(level))
    }

    /// Set the intensity (0-15) of chip `index`
    pub fn set_brightness_for(&mut self, level: u8, index: usize) -> Result<(), L::Error> {
        self.chain.send_command_to(Command::intensity(level), index)
    }

    /// Light every LED on every chip, regardless of row planes
    pub fn set_display_test(&mut self, on: bool) -> Result<(), L::Error> {
        self.chain.broadcast_command(Command::display_test(on))
    }

    /// Turn on every LED of every chip
    pub fn fill_all(&mut self) -> Result<(), L::Error> {
        self.broadcast_rows(|| 0xFF)
    }

    /// Turn on every LED of chip `index`
    pub fn fill_one(&mut self, index: usize) -> Result<(), L::Error> {
        self.rows_for(index, || 0xFF)
    }

    /// Turn off every LED of every chip; the frame buffer is left as is
    pub fn clear_all(&mut self) -> Result<(), L::Error> {
        self.broadcast_rows(|| 0x00)
    }

    /// Turn off every LED of chip `index`
    pub fn clear_one(&mut self, index: usize) -> Result<(), L::Error> {
        self.rows_for(index, || 0x00)
    }

    /// Fill every row plane with bytes from `rng`, same pattern on all chips
    pub fn randomize_all<R: FnMut() -> u8>(&mut self, rng: R) -> Result<(), L::Error> {
        self.broadcast_rows(rng)
    }

    /// Fill the row planes of chip `index` with bytes from `rng`
    pub fn randomize_one<R: FnMut() -> u8>(&mut self, index: usize, rng: R) -> Result<(), L::Error> {
        self.rows_for(index, rng)
    }

    /// Show an 8×8 pattern on every chip
    pub fn show_pattern_all(&mut self, pattern: &Matrix8x8) -> Result<(), L::Error> {
        let columns = pattern_columns(pattern, self.config.chain.rotation());
        for (&address, &data) in DIGITS.iter().zip(columns.iter()) {
            self.chain.broadcast(address, data)?;
        }
        Ok(())
    }

    /// Show an 8×8 pattern on chip `index`
    pub fn show_pattern_on(&mut self, pattern: &Matrix8x8, index: usize) -> Result<(), L::Error> {
        write_module(
            &mut self.chain,
            &pattern.to_columns(),
            index,
            self.config.chain.rotation(),
        )
    }

    fn project(&mut self) -> Result<(), L::Error> {
        project(&mut self.chain, &self.buffer, &self.config.chain)
    }

    fn clear_buffer_and_display(&mut self) -> Result<(), L::Error> {
        self.buffer.clear();
        self.clear_all()
    }

    fn broadcast_rows<R: FnMut() -> u8>(&mut self, mut data: R) -> Result<(), L::Error> {
        for address in DIGITS {
            self.chain.broadcast(address, data())?;
        }
        Ok(())
    }

    fn rows_for<R: FnMut() -> u8>(&mut self, index: usize, mut data: R) -> Result<(), L::Error> {
        for address in DIGITS {
            self.chain.send_to(address, data(), index)?;
        }
        Ok(())
    }
}
