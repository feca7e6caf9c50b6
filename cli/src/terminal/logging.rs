use anyhow::anyhow;
use colored::*;
use starter_common::config::Config;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// Renders events as `<symbol> <fields>`, one per line.
pub struct StarterFormatter;

impl<S, N> FormatEvent<S, N> for StarterFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(writer, "{} ", level_symbol(event.metadata().level()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn level_symbol(level: &Level) -> ColoredString {
    let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *level {
        Level::TRACE => ("[ ]", |s| s.dimmed()),
        Level::DEBUG => ("[?]", |s| s.blue()),
        Level::INFO => ("[+]", |s| s.green().bold()),
        Level::WARN => ("[*]", |s| s.yellow().bold()),
        Level::ERROR => ("[-]", |s| s.red().bold()),
    };
    color_func(symbol.into())
}

/// `RUST_LOG` wins when set; otherwise the level comes from `cfg`.
fn env_filter(cfg: &Config) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(cfg.log_level().into())
        .from_env_lossy()
}

/// Installs the global subscriber. Logs go to stderr; stdout is left to the greeter.
pub fn init_logging(cfg: &Config) -> anyhow::Result<()> {
    if cfg.no_color {
        colored::control::set_override(false);
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(colored::control::SHOULD_COLORIZE.should_colorize())
        .with_env_filter(env_filter(cfg))
        .event_format(StarterFormatter)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
