//! MAX7219 register commands
//!
//! A command is one `(register address, data)` byte pair. Only the low nibble
//! of the address byte is decoded by the chip.

/// MAX7219 register addresses
pub mod reg {
    /// No-op (chip keeps its current state)
    pub const NOOP: u8 = 0x00;
    /// Row plane 0 ("digit 0")
    pub const DIGIT0: u8 = 0x01;
    /// Row plane 1
    pub const DIGIT1: u8 = 0x02;
    /// Row plane 2
    pub const DIGIT2: u8 = 0x03;
    /// Row plane 3
    pub const DIGIT3: u8 = 0x04;
    /// Row plane 4
    pub const DIGIT4: u8 = 0x05;
    /// Row plane 5
    pub const DIGIT5: u8 = 0x06;
    /// Row plane 6
    pub const DIGIT6: u8 = 0x07;
    /// Row plane 7
    pub const DIGIT7: u8 = 0x08;
    /// BCD decode mode (7-segment only, always off for matrices)
    pub const DECODE_MODE: u8 = 0x09;
    /// LED intensity (0-15)
    pub const INTENSITY: u8 = 0x0A;
    /// Number of scanned digits minus one (0-7)
    pub const SCAN_LIMIT: u8 = 0x0B;
    /// Shutdown register (0 = off, 1 = normal operation)
    pub const SHUTDOWN: u8 = 0x0C;
    /// Display test (all LEDs on)
    pub const DISPLAY_TEST: u8 = 0x0F;
}

/// Row-plane register addresses in row order
pub const DIGITS: [u8; 8] = [
    reg::DIGIT0,
    reg::DIGIT1,
    reg::DIGIT2,
    reg::DIGIT3,
    reg::DIGIT4,
    reg::DIGIT5,
    reg::DIGIT6,
    reg::DIGIT7,
];

/// Highest intensity level accepted by the chip
pub const MAX_INTENSITY: u8 = 15;

/// Scan-limit value that enables all 8 row planes
pub const SCAN_ALL_DIGITS: u8 = 7;

/// One register write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Command {
    /// Register address (0-15)
    pub address: u8,
    /// Register data
    pub data: u8,
}

impl Command {
    /// Create a command; the address is masked to the 4 decoded bits
    pub const fn new(address: u8, data: u8) -> Self {
        Self {
            address: address & 0x0F,
            data,
        }
    }

    /// The no-op pair `(0, 0)`
    pub const fn noop() -> Self {
        Self::new(reg::NOOP, 0)
    }

    /// Write a column mask to row plane `row` (0-7)
    pub fn digit(row: usize, data: u8) -> Option<Self> {
        DIGITS.get(row).map(|&address| Self::new(address, data))
    }

    /// Set LED intensity, clamped to `MAX_INTENSITY`
    pub fn intensity(level: u8) -> Self {
        Self::new(reg::INTENSITY, level.min(MAX_INTENSITY))
    }

    /// Power the display on (normal operation) or off (shutdown)
    pub const fn power(on: bool) -> Self {
        Self::new(reg::SHUTDOWN, on as u8)
    }

    /// Enable or disable display-test mode
    pub const fn display_test(on: bool) -> Self {
        Self::new(reg::DISPLAY_TEST, on as u8)
    }

    /// Enable or disable BCD decoding on all digits
    pub const fn decode_mode(on: bool) -> Self {
        Self::new(reg::DECODE_MODE, if on { 0xFF } else { 0x00 })
    }

    /// Set how many row planes are scanned (value is the last plane index)
    pub fn scan_limit(last_digit: u8) -> Self {
        Self::new(reg::SCAN_LIMIT, last_digit.min(SCAN_ALL_DIGITS))
    }

    /// True for the no-op register
    pub const fn is_noop(&self) -> bool {
        self.address == reg::NOOP
    }

    /// Wire representation: address byte first
    pub const fn to_bytes(self) -> [u8; 2] {
        [self.address, self.data]
    }

    /// Parse from wire bytes
    pub const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self::new(bytes[0], bytes[1])
    }

    /// Power-up sequence
    ///
    /// The order matters: registers are written with the chip shut down and
    /// display test cleared before scan limit and intensity, then the chip is
    /// switched on. Row planes are cleared by the caller afterwards.
    pub fn init_sequence(intensity: u8) -> [Self; 6] {
        [
            Self::power(false),
            Self::display_test(false),
            Self::decode_mode(false),
            Self::scan_limit(SCAN_ALL_DIGITS),
            Self::intensity(intensity),
            Self::power(true),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_masked_to_nibble() {
        let cmd = Command::new(0xF3, 0x42);
        assert_eq!(cmd.address, 0x03);
        assert_eq!(cmd.data, 0x42);
    }

    #[test]
    fn test_digit_addresses() {
        assert_eq!(Command::digit(0, 0xAA), Some(Command::new(1, 0xAA)));
        assert_eq!(Command::digit(7, 0x01), Some(Command::new(8, 0x01)));
        assert_eq!(Command::digit(8, 0x01), None);
    }

    #[test]
    fn test_intensity_clamped() {
        assert_eq!(Command::intensity(7).data, 7);
        assert_eq!(Command::intensity(200).data, MAX_INTENSITY);
    }

    #[test]
    fn test_init_sequence_order() {
        let seq = Command::init_sequence(15);
        let addresses: [u8; 6] = core::array::from_fn(|i| seq[i].address);
        assert_eq!(
            addresses,
            [
                reg::SHUTDOWN,
                reg::DISPLAY_TEST,
                reg::DECODE_MODE,
                reg::SCAN_LIMIT,
                reg::INTENSITY,
                reg::SHUTDOWN
            ]
        );
        assert_eq!(seq[0].data, 0);
        assert_eq!(seq[3].data, 7);
        assert_eq!(seq[4].data, 15);
        assert_eq!(seq[5].data, 1);
    }

    #[test]
    fn test_noop() {
        assert!(Command::noop().is_noop());
        assert_eq!(Command::noop().to_bytes(), [0, 0]);
        assert!(!Command::power(true).is_noop());
    }
}
