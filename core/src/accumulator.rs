//! # Input Accumulator
//!
//! Collects allow-listed key presses into an address buffer and keeps the two
//! strings a front-end shows:
//!
//! * the address display: the buffer, or [`PLACEHOLDER`] while it is empty.
//! * the binary display: empty, or the outcome of the last commit.
//!
//! The accumulator does not validate the shape of an address. Runs of periods,
//! a leading period or long digit groups are all accepted while typing; only
//! the digit ceiling and the allow-list constrain input. Shape problems show
//! up at commit time as [`FAILURE_MARKER`](ipconv_common::conversion::FAILURE_MARKER).

use ipconv_common::conversion::{ConversionMode, ConversionResult};
use ipconv_common::key::{AddressKey, RawKey};
use tracing::{debug, trace};

use crate::converter;

/// Most digits the buffer may hold. Periods do not count.
pub const MAX_DIGITS: usize = 15;

/// Address display text while the buffer is empty.
pub const PLACEHOLDER: &str = "Enter IP Address...";

/// What a single key press did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not on the allow-list, or rejected by a rule. Nothing changed.
    Ignored,
    Updated,
    Committed(ConversionResult),
}

#[derive(Debug, Clone, Default)]
pub struct Accumulator {
    buffer: String,
    binary: String,
    mode: ConversionMode,
}

impl Accumulator {
    pub fn new(mode: ConversionMode) -> Self {
        Self {
            buffer: String::with_capacity(MAX_DIGITS + 3),
            binary: String::new(),
            mode,
        }
    }

    pub fn mode(&self) -> ConversionMode {
        self.mode
    }

    /// The characters typed so far.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn address_text(&self) -> &str {
        if self.buffer.is_empty() {
            PLACEHOLDER
        } else {
            &self.buffer
        }
    }

    pub fn binary_text(&self) -> &str {
        &self.binary
    }

    /// Number of digits in the buffer, separators excluded.
    pub fn digit_count(&self) -> usize {
        self.buffer.chars().filter(|c| *c != '.').count()
    }

    /// Applies one key press. Keys are expected one at a time, in the order
    /// they were pressed.
    pub fn handle_key(&mut self, raw: RawKey) -> KeyOutcome {
        let Some(key) = AddressKey::classify(raw) else {
            trace!(?raw, "key not on allow-list");
            return KeyOutcome::Ignored;
        };

        let outcome = match key {
            AddressKey::Clear => self.reset(),
            AddressKey::Backspace | AddressKey::Delete => self.delete_last(),
            AddressKey::Enter => self.commit(),
            AddressKey::Digit(digit) => self.append(digit),
            AddressKey::Period => self.append('.'),
        };

        debug!(?key, ?outcome, buffer = %self.buffer, "key handled");
        outcome
    }

    /// The clear button. Unlike the clear key it does nothing, and reports
    /// `false`, when both displays are already empty.
    pub fn clear(&mut self) -> bool {
        if self.buffer.is_empty() && self.binary.is_empty() {
            return false;
        }

        self.reset();
        true
    }

    fn reset(&mut self) -> KeyOutcome {
        self.buffer.clear();
        self.binary.clear();
        KeyOutcome::Updated
    }

    fn delete_last(&mut self) -> KeyOutcome {
        // removing the only character falls back to the placeholder
        match self.buffer.pop() {
            Some(_) => KeyOutcome::Updated,
            None => KeyOutcome::Ignored,
        }
    }

    fn append(&mut self, c: char) -> KeyOutcome {
        if self.digit_count() >= MAX_DIGITS {
            trace!(%c, "digit ceiling reached");
            return KeyOutcome::Ignored;
        }

        self.buffer.push(c);
        KeyOutcome::Updated
    }

    fn commit(&mut self) -> KeyOutcome {
        let result: ConversionResult = {
            let input = converter::prepare_commit(&self.buffer, self.mode);
            converter::convert(&input, self.mode)
        };

        self.buffer.clear();
        self.binary = result.as_display().to_string();

        KeyOutcome::Committed(result)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
