//! Chain configuration loader
//!
//! Parses the embedded `chain.toml`. Falls back to defaults if the text
//! cannot be parsed; build.rs already rejects invalid files, so this only
//! happens when the two parsers disagree.

use defmt::*;

use dotchain_core::config::{parse_config, DisplayConfig};

/// Parse `source`, or return the default configuration
pub fn load_config(source: &str) -> DisplayConfig {
    info!("Loading chain configuration...");

    match parse_config(source) {
        Ok(config) => {
            log_config_summary(&config);
            config
        }
        Err(e) => {
            warn!("chain.toml parse error: {:?}, using defaults", e);
            DisplayConfig::default()
        }
    }
}

/// Log a summary of the loaded configuration
fn log_config_summary(config: &DisplayConfig) {
    info!("Configuration loaded successfully");
    debug!("  {} modules", config.chain.modules());
    debug!("  rotation {:?}", config.chain.rotation());
    debug!("  reversed {}", config.chain.reversed());
    debug!("  intensity {}", config.intensity);
    debug!(
        "  scroll {}ms / {}ms",
        config.scroll.delay_ms, config.scroll.end_delay_ms
    );
}
