//! # Conversion Model
//!
//! [`ConversionMode`] picks how a committed address is turned into binary and
//! [`ConversionResult`] is what comes back.

use std::fmt;
use std::str::FromStr;

/// Marker shown in the binary display when a conversion fails.
pub const FAILURE_MARKER: &str = "N/A";

/// How a committed address is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConversionMode {
    /// Separators are stripped on commit and only the first `.`-separated
    /// element is converted. This is how the converter has always behaved.
    #[default]
    FirstOctet,
    /// The dotted address is kept and all four octets are converted into
    /// 8-bit groups.
    AllOctets,
}

impl ConversionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionMode::FirstOctet => "first-octet",
            ConversionMode::AllOctets => "all-octets",
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first-octet" | "first" | "parity" => Ok(ConversionMode::FirstOctet),
            "all-octets" | "all" | "full" => Ok(ConversionMode::AllOctets),
            _ => Err(format!(
                "invalid mode: {s} (expected 'first-octet' or 'all-octets')"
            )),
        }
    }
}

/// Outcome of a single commit. Produced once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    Success(String),
    Failure,
}

impl ConversionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionResult::Success(_))
    }

    /// Text for the binary display.
    pub fn as_display(&self) -> &str {
        match self {
            ConversionResult::Success(binary) => binary,
            ConversionResult::Failure => FAILURE_MARKER,
        }
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_display())
    }
}
