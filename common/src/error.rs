use std::num::ParseIntError;

use thiserror::Error;

/// Why a committed address could not be converted.
///
/// Never leaves the converter: it is logged and then collapsed into
/// [`ConversionResult::Failure`](crate::conversion::ConversionResult::Failure).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("input contains no octets")]
    NoOctets,
    #[error("octet '{0}' contains a character that is not a decimal digit")]
    NotDigits(String),
    #[error("octet '{octet}' is not a valid number: {source}")]
    InvalidOctet {
        octet: String,
        #[source]
        source: ParseIntError,
    },
    #[error("expected 4 octets, found {0}")]
    OctetCount(usize),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    #[error("unknown key name '<{0}>'")]
    UnknownKey(String),
    #[error("unterminated key name starting at position {position}")]
    Unterminated { position: usize },
}
