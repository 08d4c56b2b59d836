mod commands;
mod terminal;

use commands::{CommandLine, Commands, info, render, stamp};
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.quiet, commands.verbose);

    match commands.command {
        Commands::Render { year, layout } => render::render(&year, &layout),
        Commands::Stamp { file, year, layout } => stamp::stamp(&file, &year, &layout),
        Commands::Info { year, layout } => info::info(&year, &layout, commands.quiet),
    }
}
