mod commands;
mod terminal;

use anyhow::Context;
use commands::CommandLine;
use starter_common::config::Config;
use starter_core::greeter;
use terminal::logging;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.to_config();

    logging::init_logging(&cfg)?;

    greeter::print().context("failed to write formatted output")
}
