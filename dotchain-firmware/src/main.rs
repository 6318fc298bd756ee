//! dotchain - MAX7219 LED-matrix chain firmware
//!
//! Main firmware binary for RP2040 boards driving a daisy chain of 8×8
//! LED-matrix modules. The chain geometry comes from `chain.toml`, compiled
//! into the image.
//!
//! Wiring (SPI0):
//! - GPIO18: CLK
//! - GPIO19: DIN
//! - GPIO17: LOAD (CS)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Level, Output};
use embassy_rp::spi::{self, Phase, Polarity, Spi};
use embassy_time::{Delay, Timer};
use {defmt_rtt as _, panic_probe as _};

use dotchain_core::matrix::Matrix8x8;
use dotchain_core::traits::CommandLink;
use dotchain_core::ChainDisplay;
use dotchain_drivers::{BusLink, DelayPacer};
use dotchain_protocol::parse_pattern;

mod config;

/// Embedded chain configuration (compiled into firmware)
/// Edit chain.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../chain.toml");

/// Bus clock (the chips accept up to 10 MHz)
const SPI_FREQUENCY_HZ: u32 = 1_000_000;

/// Heart glyph in custom-pattern notation
const HEART_PATTERN: &str =
    "B00001100,B00011110,B00111100,B01111000,B00111100,B00011110,B00001100,B00000000";

const GREETING: &str = "Hello from dotchain \u{2665}";

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("dotchain firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = config::load_config(EMBEDDED_CONFIG);

    // SPI mode 0: the chips sample DIN on the rising clock edge
    let mut spi_config = spi::Config::default();
    spi_config.frequency = SPI_FREQUENCY_HZ;
    spi_config.phase = Phase::CaptureOnFirstTransition;
    spi_config.polarity = Polarity::IdleLow;

    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let load = Output::new(p.PIN_17, Level::High);

    let link = match BusLink::new(spi, load) {
        Ok(link) => link,
        Err(e) => {
            error!("LOAD pin setup failed: {:?}", e);
            return;
        }
    };

    let mut display = match ChainDisplay::new(link, config) {
        Ok(display) => display,
        Err(e) => {
            error!("Invalid chain configuration: {:?}", e);
            return;
        }
    };

    if let Err(e) = display.init() {
        error!("Chain init failed: {:?}", e);
        return;
    }
    info!("Chain initialized");

    display.add_custom_char("\u{2665}", &parse_pattern(HEART_PATTERN));

    let mut pacer = DelayPacer::new(Delay);

    loop {
        if let Err(e) = run_demo(&mut display, &mut pacer).await {
            warn!("Bus error: {:?}, re-initializing chain", e);
            if let Err(e) = display.init() {
                error!("Chain init failed: {:?}", e);
            }
            Timer::after_secs(1).await;
        }
    }
}

/// One pass of the attract loop
async fn run_demo<L: CommandLink>(
    display: &mut ChainDisplay<L>,
    pacer: &mut DelayPacer<Delay>,
) -> Result<(), L::Error> {
    display.scroll(GREETING, pacer)?;

    display.display_text_align_right("12:34", true)?;
    Timer::after_secs(2).await;

    let mut checker = Matrix8x8::empty();
    for x in 0..8 {
        for y in 0..8 {
            checker.set(x, y, (x + y) % 2 == 0);
        }
    }
    display.show_pattern_all(&checker)?;
    Timer::after_secs(1).await;

    for level in (0..=15).rev() {
        display.set_brightness(level)?;
        Timer::after_millis(60).await;
    }
    display.set_brightness(display.config().intensity)?;
    display.clear_all()?;

    display.font_demo(150, pacer)
}
