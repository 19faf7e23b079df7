use colored::*;

use crate::terminal::{colors, print};
use ipconv_common::{config::Config, conversion::ConversionResult, success, warn};
use ipconv_core::converter;

/// Converts `address` exactly as committing it in a session would.
pub fn convert(address: &str, cfg: &Config) -> anyhow::Result<()> {
    print::header("conversion", cfg.quiet);

    let input = converter::prepare_commit(address, cfg.mode);
    let result: ConversionResult = converter::convert(&input, cfg.mode);

    if cfg.quiet > 1 {
        print::print(result.as_display());
        return Ok(());
    }

    print::aligned_line("Address", address.color(colors::IPV4_ADDR));
    print::aligned_line("Mode", cfg.mode.to_string());
    print::aligned_line("Binary", colored_result(&result));

    match result {
        ConversionResult::Success(_) => success!("conversion complete"),
        ConversionResult::Failure => warn!("'{address}' could not be converted"),
    }

    Ok(())
}

pub fn colored_result(result: &ConversionResult) -> ColoredString {
    match result {
        ConversionResult::Success(binary) => binary.color(colors::BINARY).bold(),
        ConversionResult::Failure => result.as_display().color(colors::FAILURE).bold(),
    }
}
