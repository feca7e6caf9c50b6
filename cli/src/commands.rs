use clap::{ArgAction, Parser};
use starter_common::config::Config;

#[derive(Parser)]
#[command(name = "starter")]
#[command(version, about = "Prints a greeting and a formatted number.")]
pub struct CommandLine {
    /// Lower the log level; repeat to go further
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
    /// Raise the log level; repeat to go further
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Disable colored log output
    #[arg(long)]
    pub no_color: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        Config {
            quiet: self.quiet,
            verbose: self.verbose,
            no_color: self.no_color || no_color_env,
        }
    }
}
