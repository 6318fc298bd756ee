//! Configuration type definitions
//!
//! These types describe the physical chain: how many modules, how they are
//! mounted, and the timing used when animating text.

use dotchain_protocol::{MAX_CHAIN_LEN, MAX_INTENSITY};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum modules in one chain
pub const MAX_MODULES: usize = MAX_CHAIN_LEN;

/// Columns (and rows) per module
pub const MODULE_COLUMNS: usize = 8;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Module count is zero or exceeds `MAX_MODULES`
    ModuleCount,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ModuleCount => write!(f, "module count must be 1..={}", MAX_MODULES),
        }
    }
}

/// How each 8×8 module is mounted relative to the logical display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rotation {
    /// Upright; column bytes go straight to the row planes
    #[default]
    None,
    /// Quarter turn clockwise
    Clockwise,
    /// Quarter turn counter-clockwise
    CounterClockwise,
    /// Upside down
    HalfTurn,
}

/// Chain geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "UncheckedChainConfig")
)]
pub struct ChainConfig {
    /// Number of chips (1..=MAX_MODULES)
    modules: u8,
    /// Mounting rotation applied to every module
    rotation: Rotation,
    /// Wiring order is reversed (leftmost module is nearest the controller)
    reversed: bool,
}

/// Wire shape of `ChainConfig` before the module count is checked
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct UncheckedChainConfig {
    modules: u8,
    rotation: Rotation,
    reversed: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedChainConfig> for ChainConfig {
    type Error = ConfigError;

    fn try_from(raw: UncheckedChainConfig) -> Result<Self, Self::Error> {
        Self::new(raw.modules as usize, raw.rotation, raw.reversed)
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            modules: 1,
            rotation: Rotation::None,
            reversed: false,
        }
    }
}

impl ChainConfig {
    /// Create a chain configuration
    pub fn new(modules: usize, rotation: Rotation, reversed: bool) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.set_modules(modules)?;
        config.set_orientation(rotation, reversed);
        Ok(config)
    }

    /// Upright, normally wired chain of `modules` chips
    pub fn with_modules(modules: usize) -> Result<Self, ConfigError> {
        Self::new(modules, Rotation::None, false)
    }

    /// Number of chips
    pub fn modules(&self) -> usize {
        self.modules as usize
    }

    /// Mounting rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Whether the wiring order is reversed
    pub fn reversed(&self) -> bool {
        self.reversed
    }

    /// Width of the visible window in columns
    pub fn visible_width(&self) -> usize {
        self.modules() * MODULE_COLUMNS
    }

    /// Change rotation and wiring order
    pub fn set_orientation(&mut self, rotation: Rotation, reversed: bool) {
        self.rotation = rotation;
        self.reversed = reversed;
    }

    /// Change the chip count
    pub fn set_modules(&mut self, modules: usize) -> Result<(), ConfigError> {
        if modules == 0 || modules > MAX_MODULES {
            return Err(ConfigError::ModuleCount);
        }
        self.modules = modules as u8;
        Ok(())
    }
}

/// Scroll timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScrollConfig {
    /// Pause between column shifts (ms)
    pub delay_ms: u32,
    /// Pause after the text has left the display (ms)
    pub end_delay_ms: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            delay_ms: 75,
            end_delay_ms: 500,
        }
    }
}

/// Complete display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Chain geometry
    pub chain: ChainConfig,
    /// Intensity written during initialization (0-15)
    pub intensity: u8,
    /// Scroll timing
    pub scroll: ScrollConfig,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            chain: ChainConfig::default(),
            intensity: MAX_INTENSITY,
            scroll: ScrollConfig::default(),
        }
    }
}
