mod commands;
mod terminal;

use commands::{CommandLine, Commands, convert, interactive, replay};
use ipconv_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        mode: commands.mode,
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Interactive => interactive::interactive(&cfg),
        Commands::Convert { address } => convert::convert(&address, &cfg),
        Commands::Replay { keys, final_only } => replay::replay(&keys, final_only, &cfg),
    };

    if result.is_ok() && cfg.quiet == 0 {
        print::end_of_program();
    }
    result
}
