use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use starter_core::greeter::{self, ARBITRARY_NUMBER, GREETING};

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Buffer {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

/// Runs `greeter::print_to` `n` times and returns (log output, formatted output).
fn run_times(n: usize) -> (String, String) {
    let logs = Buffer::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let mut out = Vec::new();
    tracing::subscriber::with_default(subscriber, || {
        for _ in 0..n {
            greeter::print_to(&mut out).unwrap();
        }
    });

    (logs.text(), String::from_utf8(out).unwrap())
}

#[test]
fn single_call_gives_one_log_line_and_one_output_line() {
    let (logs, out) = run_times(1);

    assert_eq!(logs.lines().count(), 1);
    assert!(logs.contains("INFO"));
    assert!(logs.contains(GREETING));
    assert_eq!(out, "Formatted output: 42\n");
}

#[test]
fn repeated_calls_repeat_the_same_lines() {
    let n = 5;
    let (logs, out) = run_times(n);

    let log_lines: Vec<&str> = logs.lines().collect();
    assert_eq!(log_lines.len(), n);
    assert!(log_lines.iter().all(|line| *line == log_lines[0]));
    assert!(log_lines[0].contains(GREETING));

    let out_lines: Vec<&str> = out.lines().collect();
    assert_eq!(out_lines.len(), n);
    assert!(out_lines.iter().all(|line| *line == "Formatted output: 42"));
}

#[test]
fn zero_calls_emit_nothing() {
    let (logs, out) = run_times(0);
    assert!(logs.is_empty());
    assert!(out.is_empty());
}

#[test]
fn embedded_number_is_forty_two() {
    assert_eq!(ARBITRARY_NUMBER, 42);
    let (_, out) = run_times(3);
    assert!(out.lines().all(|line| line.ends_with(": 42")));
}
