//! # Binary Converter
//!
//! Pure functions from a committed address to its binary text.
//!
//! In [`ConversionMode::FirstOctet`] only the first `.`-separated element is
//! converted, with no zero padding. Since the accumulator strips separators
//! before committing in that mode, the whole typed digit string ends up being
//! read as one number. [`ConversionMode::AllOctets`] keeps the separators and
//! renders each of the four octets as an 8-bit group.

use std::borrow::Cow;

use ipconv_common::conversion::{ConversionMode, ConversionResult};
use ipconv_common::error::ConvertError;
use tracing::debug;

/// Prepares a buffer for conversion the way a commit does.
pub fn prepare_commit(buffer: &str, mode: ConversionMode) -> Cow<'_, str> {
    match mode {
        ConversionMode::FirstOctet if buffer.contains('.') => Cow::Owned(buffer.replace('.', "")),
        ConversionMode::FirstOctet | ConversionMode::AllOctets => Cow::Borrowed(buffer),
    }
}

/// Converts `input`, folding any failure into [`ConversionResult::Failure`].
///
/// A failure is an ordinary outcome shown as the failure marker, so it is only
/// logged at debug level.
pub fn convert(input: &str, mode: ConversionMode) -> ConversionResult {
    match try_convert(input, mode) {
        Ok(binary) => ConversionResult::Success(binary),
        Err(e) => {
            debug!(input, %mode, "conversion failed: {e}");
            ConversionResult::Failure
        }
    }
}

pub fn try_convert(input: &str, mode: ConversionMode) -> Result<String, ConvertError> {
    match mode {
        ConversionMode::FirstOctet => first_octet_to_binary(input),
        ConversionMode::AllOctets => all_octets_to_binary(input),
    }
}

fn first_octet_to_binary(input: &str) -> Result<String, ConvertError> {
    let octets: Vec<&str> = split_octets(input);
    let first: &str = octets.first().ok_or(ConvertError::NoOctets)?;
    // signed like the 64-bit integer the converter always used; digits only,
    // so the value is never negative
    let value: i64 = parse_decimal(first)?;

    Ok(format!("{value:b}"))
}

fn all_octets_to_binary(input: &str) -> Result<String, ConvertError> {
    let octets: Vec<&str> = input.split('.').collect();
    if octets.len() != 4 {
        return Err(ConvertError::OctetCount(octets.len()));
    }

    let groups: Vec<String> = octets
        .into_iter()
        .map(|octet| parse_decimal::<u8>(octet).map(|value| format!("{value:08b}")))
        .collect::<Result<Vec<String>, ConvertError>>()?;

    Ok(groups.join("."))
}

/// Splits on `.` and drops trailing empty elements.
///
/// Input without any separator is a single element, even when empty. Input
/// made only of separators has no elements at all.
fn split_octets(input: &str) -> Vec<&str> {
    if !input.contains('.') {
        return vec![input];
    }

    let mut octets: Vec<&str> = input.split('.').collect();
    while octets.last().is_some_and(|octet| octet.is_empty()) {
        octets.pop();
    }
    octets
}

fn parse_decimal<T>(octet: &str) -> Result<T, ConvertError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    // `FromStr` for integers accepts a leading sign, which is not a digit
    if !octet.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConvertError::NotDigits(octet.to_string()));
    }

    octet.parse::<T>().map_err(|source| ConvertError::InvalidOctet {
        octet: octet.to_string(),
        source,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
