//! # ipconv core
//!
//! The rules of the converter, free of any terminal code:
//!
//! * [`accumulator`]: turns key presses into an address buffer and the two
//!   display strings.
//! * [`converter`]: turns a committed address into binary.
//!
//! Front-ends feed [`RawKey`](ipconv_common::key::RawKey)s into an
//! [`Accumulator`](accumulator::Accumulator) and re-read
//! [`address_text`](accumulator::Accumulator::address_text) and
//! [`binary_text`](accumulator::Accumulator::binary_text) after every key.

pub mod accumulator;
pub mod converter;
