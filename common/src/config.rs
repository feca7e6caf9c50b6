use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Each step lowers the log level by one, down to `off`.
    pub quiet: u8,
    /// Each step raises the log level by one, up to `trace`.
    pub verbose: u8,
    /// Disables ANSI colors in log output.
    pub no_color: bool,
}

impl Config {
    /// Log level derived from the quiet and verbose counts, starting at `info`.
    pub fn log_level(&self) -> LevelFilter {
        let step: i16 = i16::from(self.verbose) - i16::from(self.quiet);
        match step {
            i16::MIN..=-3 => LevelFilter::OFF,
            -2 => LevelFilter::ERROR,
            -1 => LevelFilter::WARN,
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}
