use colored::*;

use crate::commands::convert::colored_result;
use crate::mprint;
use crate::terminal::{colors, print};
use ipconv_common::{config::Config, conversion::FAILURE_MARKER, key::RawKey};
use ipconv_core::accumulator::{Accumulator, KeyOutcome, PLACEHOLDER};

type Detail = (String, ColoredString);

/// Replays a key script through a fresh accumulator.
pub fn replay(keys: &str, final_only: bool, cfg: &Config) -> anyhow::Result<()> {
    let keys: Vec<RawKey> = RawKey::parse_sequence(keys)?;
    let mut accumulator: Accumulator = Accumulator::new(cfg.mode);

    print::header("replaying keys", cfg.quiet);

    for (idx, key) in keys.iter().enumerate() {
        let outcome: KeyOutcome = accumulator.handle_key(*key);
        if final_only || cfg.quiet > 1 {
            continue;
        }

        print::tree_head(idx, &key_label(key));
        print::as_tree_one_level(step_details(&accumulator, &outcome));
        if idx + 1 != keys.len() {
            mprint!();
        }
    }

    if cfg.quiet > 1 {
        print::print(accumulator.address_text());
        print::print(accumulator.binary_text());
        return Ok(());
    }

    if final_only || keys.is_empty() {
        print::aligned_line("Address", address_value(&accumulator));
        print::aligned_line("Binary", binary_value(&accumulator));
    }

    if cfg.quiet == 0 {
        print::fat_separator();
        print::centerln(&format!(
            "{} keys replayed in {} mode",
            keys.len().to_string().color(colors::ACCENT).bold(),
            cfg.mode
        ));
    }

    Ok(())
}

fn key_label(key: &RawKey) -> String {
    match key {
        RawKey::Char(c) => format!("'{c}'"),
        RawKey::Backspace => "<backspace>".to_string(),
        RawKey::Delete => "<delete>".to_string(),
        RawKey::Enter => "<enter>".to_string(),
        RawKey::Other => "<other>".to_string(),
    }
}

fn step_details(accumulator: &Accumulator, outcome: &KeyOutcome) -> Vec<Detail> {
    let status: ColoredString = match outcome {
        KeyOutcome::Ignored => "ignored".bright_black(),
        KeyOutcome::Updated => "updated".normal(),
        KeyOutcome::Committed(result) => format!("committed ({})", colored_result(result)).normal(),
    };

    vec![
        ("Key".to_string(), status),
        ("Address".to_string(), address_value(accumulator)),
        ("Binary".to_string(), binary_value(accumulator)),
    ]
}

fn address_value(accumulator: &Accumulator) -> ColoredString {
    match accumulator.address_text() {
        PLACEHOLDER => PLACEHOLDER.color(colors::PLACEHOLDER).italic(),
        text => text.color(colors::IPV4_ADDR),
    }
}

fn binary_value(accumulator: &Accumulator) -> ColoredString {
    match accumulator.binary_text() {
        FAILURE_MARKER => FAILURE_MARKER.color(colors::FAILURE).bold(),
        text => text.color(colors::BINARY),
    }
}
