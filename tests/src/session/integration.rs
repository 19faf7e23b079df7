#![cfg(test)]
use ipconv_common::conversion::{ConversionMode, ConversionResult};
use ipconv_common::key::RawKey;
use ipconv_core::accumulator::{Accumulator, KeyOutcome, MAX_DIGITS, PLACEHOLDER};
use ipconv_core::converter;

/// Feeds a key script and returns every outcome in order.
fn run(acc: &mut Accumulator, script: &str) -> Vec<KeyOutcome> {
    let keys: Vec<RawKey> = RawKey::parse_sequence(script).expect("valid key script");
    keys.into_iter().map(|key| acc.handle_key(key)).collect()
}

/// Typing "1", "9", "2" and Enter converts the address and resets the prompt.
#[test]
fn typed_octet_is_committed() {
    let mut acc = Accumulator::default();
    let outcomes = run(&mut acc, "192<enter>");

    assert_eq!(
        outcomes.last(),
        Some(&KeyOutcome::Committed(ConversionResult::Success("11000000".into())))
    );
    assert_eq!(acc.binary_text(), "11000000");
    assert_eq!(acc.address_text(), PLACEHOLDER);
    assert_eq!(acc.buffer(), "");
}

#[test]
fn ignored_keys_are_idempotent() {
    let mut acc = Accumulator::default();
    run(&mut acc, "10.1<enter>172.16");
    let (address, binary) = (acc.address_text().to_string(), acc.binary_text().to_string());

    let outcomes = run(&mut acc, "xyz <other>-/+ab<other>");
    assert!(outcomes.iter().all(|o| *o == KeyOutcome::Ignored));
    assert_eq!(acc.address_text(), address);
    assert_eq!(acc.binary_text(), binary);
}

#[test]
fn clear_from_any_state() {
    for script in ["", "1", "1.2.3", "7<enter>", "7<enter>88", "<enter>", "..."] {
        let mut acc = Accumulator::default();
        run(&mut acc, script);
        run(&mut acc, "<clear>");

        assert_eq!(acc.buffer(), "", "after {script:?}");
        assert_eq!(acc.address_text(), PLACEHOLDER, "after {script:?}");
        assert_eq!(acc.binary_text(), "", "after {script:?}");
    }
}

#[test]
fn deleting_single_char_shows_placeholder() {
    for delete in ["<bs>", "<del>"] {
        let mut acc = Accumulator::default();
        run(&mut acc, "9");
        run(&mut acc, delete);
        assert_eq!(acc.address_text(), PLACEHOLDER);
        assert_ne!(acc.address_text(), "");
    }
}

#[test]
fn sixteenth_digit_is_rejected() {
    let mut acc = Accumulator::default();
    run(&mut acc, "255.255.255.255.123");
    assert_eq!(acc.digit_count(), MAX_DIGITS);

    let before = acc.buffer().to_string();
    let outcomes = run(&mut acc, "9.0");
    assert!(outcomes.iter().all(|o| *o == KeyOutcome::Ignored));
    assert_eq!(acc.buffer(), before);

    // deleting makes room again
    run(&mut acc, "<bs>4");
    assert_eq!(acc.buffer(), "255.255.255.255.124");
}

#[test]
fn commit_always_resets_buffer() {
    for script in ["1", "", "...", "1.2.3.4", "999999999999999", ".5"] {
        let mut acc = Accumulator::default();
        run(&mut acc, script);
        run(&mut acc, "<enter>");
        assert_eq!(acc.buffer(), "", "after {script:?}");
        assert_eq!(acc.address_text(), PLACEHOLDER, "after {script:?}");
    }
}

#[test]
fn failed_commit_shows_marker() {
    let mut acc = Accumulator::default();
    run(&mut acc, "..<enter>");
    assert_eq!(acc.binary_text(), "N/A");

    // a later success replaces the marker
    run(&mut acc, "3<enter>");
    assert_eq!(acc.binary_text(), "11");
}

/// The dotted address is read as one number once its separators are stripped.
#[test]
fn first_octet_mode_commit_of_full_address() {
    let mut acc = Accumulator::new(ConversionMode::FirstOctet);
    run(&mut acc, "192.168.1.1<enter>");
    assert_eq!(acc.binary_text(), format!("{:b}", 19_216_811u64));
}

#[test]
fn all_octets_mode_commit_of_full_address() {
    let mut acc = Accumulator::new(ConversionMode::AllOctets);
    run(&mut acc, "192.168.1.1<enter>");
    assert_eq!(acc.binary_text(), "11000000.10101000.00000001.00000001");

    run(&mut acc, "192.168.1.300<enter>");
    assert_eq!(acc.binary_text(), "N/A");
}

#[test]
fn converter_contract() {
    let first = ConversionMode::FirstOctet;
    assert_eq!(converter::convert("192", first).as_display(), "11000000");
    assert_eq!(converter::convert("192.168.1.1", first).as_display(), "11000000");
    assert_eq!(converter::convert("", first), ConversionResult::Failure);
    assert_eq!(converter::convert("abc", first), ConversionResult::Failure);
}

#[test]
fn edited_address_commits_what_is_shown() {
    let mut acc = Accumulator::new(ConversionMode::AllOctets);
    run(&mut acc, "10.0.0.12<bs><del>5");
    assert_eq!(acc.address_text(), "10.0.0.5");
    run(&mut acc, "<enter>");
    assert_eq!(acc.binary_text(), "00001010.00000000.00000000.00000101");
}
