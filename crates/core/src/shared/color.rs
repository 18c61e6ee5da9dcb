use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("color must be 6 hex digits, got {0:?}")]
    Length(String),
    #[error("color contains a non-hex digit: {0:?}")]
    Digit(String),
}

/// Three 8-bit channel intensities, stored in the same channel order as the
/// frames the host supplies.
///
/// The library never interprets the bytes as red/green/blue; it writes them
/// positionally. Under an RGB host the default crosshair color `(0xFF, 0, 0)`
/// renders red, under a BGR capture path the same bytes render blue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const CHANNELS: u8 = 3;

    pub fn channels(&self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Parses `"rrggbb"` with an optional `#` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 {
            return Err(ParseColorError::Length(s.to_string()));
        }
        let byte = |range| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseColorError::Digit(s.to_string()))
        };
        Ok(Color(byte(0..2)?, byte(2..4)?, byte(4..6)?))
    }
}
