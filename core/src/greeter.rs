use std::io::{self, Write};

use tracing::info;

pub const GREETING: &str = "Hello, Conan Starter Project!";
pub const ARBITRARY_NUMBER: i32 = 42;

/// Logs the greeting at `INFO`, then prints the formatted line to stdout.
pub fn print() -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    print_to(&mut handle)
}

/// Same as [`print`], with the formatted line going to `out`.
pub fn print_to<W: Write>(out: &mut W) -> io::Result<()> {
    info!("{GREETING}");
    writeln!(out, "Formatted output: {}", ARBITRARY_NUMBER)?;
    out.flush()
}
