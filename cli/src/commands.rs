pub mod convert;
pub mod interactive;
pub mod replay;

use clap::{ArgAction, Parser, Subcommand};
use ipconv_common::conversion::ConversionMode;

#[derive(Parser)]
#[command(name = "ipconv")]
#[command(about = "Type an IPv4 address, read it back in binary.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// How a committed address is converted: 'first-octet' or 'all-octets'
    #[arg(long, global = true, default_value = "first-octet")]
    pub mode: ConversionMode,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Print less; repeat to print results only
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Log more; repeat for trace output
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Type an address key by key
    #[command(alias = "i")]
    Interactive,
    /// Convert an address given on the command line
    #[command(alias = "c")]
    Convert { address: String },
    /// Feed a key script, e.g. "192.168<bs>8<enter>", through a fresh session
    #[command(alias = "r")]
    Replay {
        keys: String,
        /// Only show the state after the last key
        #[arg(long)]
        final_only: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
