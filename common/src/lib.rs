//! # ipconv common
//!
//! Shared models for the IPv4-to-binary converter:
//!
//! * [`key`]: keys as the terminal reports them and the allow-listed keys the
//!   accumulator acts on.
//! * [`conversion`]: conversion modes and their outcome.
//! * [`config`]: runtime options assembled by the command line.
//! * [`error`]: typed errors for conversion and key script parsing.

pub mod config;
pub mod conversion;
pub mod error;
pub mod key;
pub mod log;

#[doc(hidden)]
pub use tracing as __tracing;
