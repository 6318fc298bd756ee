//! Simple TOML parser for chain configuration
//!
//! This is a minimal TOML parser that handles only the subset needed for
//! `chain.toml`. It does NOT support full TOML and never allocates.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - [section] headers
//! - Comments (# ...), including trailing comments after a value
//!
//! Unknown keys are ignored so newer files still load on older firmware.

use super::types::{ConfigError, DisplayConfig, Rotation};
use dotchain_protocol::MAX_INTENSITY;

/// Parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Module count outside the supported range
    ModuleCount,
}

impl From<ConfigError> for ParseError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ModuleCount => ParseError::ModuleCount,
        }
    }
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Chain,
    Scroll,
}

/// Parse TOML configuration into a `DisplayConfig`
///
/// Keys missing from the input keep their default values.
pub fn parse_config(input: &str) -> Result<DisplayConfig, ParseError> {
    let mut config = DisplayConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        if let Some((key, value)) = parse_key_value(line) {
            apply_value(section, key, value, &mut config)?;
        }
    }

    Ok(config)
}

/// Parse a section header like "chain" or "scroll"
fn parse_section_header(header: &str) -> Result<Section, ParseError> {
    match header.trim() {
        "chain" => Ok(Section::Chain),
        "scroll" => Ok(Section::Scroll),
        _ => Err(ParseError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> &str {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ParseError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseError::InvalidValue),
    }
}

/// Parse a rotation mode
fn parse_rotation(value: &str) -> Result<Rotation, ParseError> {
    match parse_string(value) {
        "none" | "None" => Ok(Rotation::None),
        "clockwise" | "cw" | "Clockwise" => Ok(Rotation::Clockwise),
        "counterclockwise" | "ccw" | "CounterClockwise" => Ok(Rotation::CounterClockwise),
        "half_turn" | "180" | "HalfTurn" => Ok(Rotation::HalfTurn),
        _ => Err(ParseError::InvalidValue),
    }
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut DisplayConfig,
) -> Result<(), ParseError> {
    match section {
        Section::Chain => match key {
            "modules" => config.chain.set_modules(parse_int(value)?)?,
            "rotation" => {
                let rotation = parse_rotation(value)?;
                let reversed = config.chain.reversed();
                config.chain.set_orientation(rotation, reversed);
            }
            "reversed" => {
                let rotation = config.chain.rotation();
                config.chain.set_orientation(rotation, parse_bool(value)?);
            }
            "intensity" => {
                let level: u8 = parse_int(value)?;
                if level > MAX_INTENSITY {
                    return Err(ParseError::InvalidValue);
                }
                config.intensity = level;
            }
            _ => {} // Ignore unknown keys
        },
        Section::Scroll => match key {
            "delay_ms" => config.scroll.delay_ms = parse_int(value)?,
            "end_delay_ms" => config.scroll.end_delay_ms = parse_int(value)?,
            _ => {}
        },
        Section::Root => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_section_header() {
        assert_eq!(parse_section_header("chain"), Ok(Section::Chain));
        assert_eq!(parse_section_header(" scroll "), Ok(Section::Scroll));
        assert_eq!(
            parse_section_header("stepper"),
            Err(ParseError::InvalidSection)
        );
    }

    #[test]
    fn test_parse_key_value_strips_comment() {
        assert_eq!(
            parse_key_value("rotation = \"clockwise\"   # mounted sideways"),
            Some(("rotation", "\"clockwise\""))
        );
        assert_eq!(parse_key_value("modules ="), None);
        assert_eq!(parse_key_value("no equals sign"), None);
    }

    #[test]
    fn test_parse_rotation() {
        assert_eq!(parse_rotation("\"none\""), Ok(Rotation::None));
        assert_eq!(parse_rotation("clockwise"), Ok(Rotation::Clockwise));
        assert_eq!(
            parse_rotation("\"counterclockwise\""),
            Ok(Rotation::CounterClockwise)
        );
        assert_eq!(parse_rotation("\"half_turn\""), Ok(Rotation::HalfTurn));
        assert_eq!(parse_rotation("\"sideways\""), Err(ParseError::InvalidValue));
    }

    #[test]
    fn test_parse_full_config() {
        let config_str = r#"
# Four modules mounted sideways
[chain]
modules = 4
rotation = "clockwise"   # none | clockwise | counterclockwise | half_turn
reversed = true
intensity = 8

[scroll]
delay_ms = 40
end_delay_ms = 1000
"#;

        let config = parse_config(config_str).unwrap();
        assert_eq!(config.chain.modules(), 4);
        assert_eq!(config.chain.rotation(), Rotation::Clockwise);
        assert!(config.chain.reversed());
        assert_eq!(config.intensity, 8);
        assert_eq!(config.scroll.delay_ms, 40);
        assert_eq!(config.scroll.end_delay_ms, 1000);
    }

    #[test]
    fn test_missing_keys_keep_defaults() {
        let config = parse_config("[chain]\nmodules = 2\n").unwrap();
        assert_eq!(config.chain.modules(), 2);
        assert_eq!(config.chain.rotation(), Rotation::None);
        assert_eq!(config.intensity, 15);
        assert_eq!(config.scroll.delay_ms, 75);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let config = parse_config("[chain]\nmodules = 3\ncolor = \"red\"\n").unwrap();
        assert_eq!(config.chain.modules(), 3);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            parse_config("[chain]\nmodules = 0\n"),
            Err(ParseError::ModuleCount)
        );
        assert_eq!(
            parse_config("[chain]\nmodules = 17\n"),
            Err(ParseError::ModuleCount)
        );
        assert_eq!(
            parse_config("[chain]\nmodules = four\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[chain]\nintensity = 16\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(
            parse_config("[chain]\nreversed = yes\n"),
            Err(ParseError::InvalidValue)
        );
        assert_eq!(parse_config("[motor]\n"), Err(ParseError::InvalidSection));
    }
}
