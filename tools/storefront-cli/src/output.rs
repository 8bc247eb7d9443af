//! Terminal output for the CLI.
//!
//! Human-readable lines are suppressed in `--json` mode; only [`Output::json`]
//! and errors reach the terminal then.

use console::{style, StyledObject};
use std::fmt::Display;

#[derive(Clone, Copy)]
enum Stream {
    Stdout,
    Stderr,
}

/// Printer shared by every command.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    fn emit(&self, stream: Stream, line: impl Display) {
        if self.json {
            return;
        }
        match stream {
            Stream::Stdout => println!("{line}"),
            Stream::Stderr => eprintln!("{line}"),
        }
    }

    fn tagged(&self, stream: Stream, tag: StyledObject<&str>, msg: impl Display) {
        self.emit(stream, format_args!("{tag} {msg}"));
    }

    pub fn info(&self, msg: &str) {
        self.tagged(Stream::Stdout, style("ℹ").cyan(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.tagged(Stream::Stdout, style("✓").green(), msg);
    }

    pub fn warn(&self, msg: &str) {
        self.tagged(Stream::Stderr, style("!").yellow().bold(), msg);
    }

    /// Errors are printed in both modes; JSON mode wraps them in an object.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            self.tagged(Stream::Stderr, style("✗").red(), style(msg).red());
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.tagged(Stream::Stderr, style("·").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, title: &str) {
        self.emit(Stream::Stdout, format_args!("\n{}", style(title).bold()));
    }

    pub fn kv(&self, key: &str, value: &str) {
        self.emit(Stream::Stdout, format_args!("  {}: {}", style(key).dim(), value));
    }

    pub fn list_item(&self, item: &str) {
        self.emit(Stream::Stdout, format_args!("  {} {}", style("-").dim(), item));
    }

    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        self.emit(Stream::Stdout, format_args!("  {}", pad_row(cols, widths)));
    }

    /// Pretty-printed JSON on stdout, regardless of mode.
    pub fn json<T: serde::Serialize>(&self, value: &T) {
        match serde_json::to_string_pretty(value) {
            Ok(text) => println!("{text}"),
            Err(e) => tracing::error!(error = %e, "could not serialize output"),
        }
    }
}

/// Left-align each column to its width. Columns beyond `widths` are not padded.
fn pad_row(cols: &[&str], widths: &[usize]) -> String {
    let mut row = String::new();
    for (i, col) in cols.iter().enumerate() {
        if i > 0 {
            row.push_str("  ");
        }
        let width = widths.get(i).copied().unwrap_or(0);
        row.push_str(&format!("{col:<width$}"));
    }
    row.trim_end().to_string()
}

pub fn availability_badge(is_available: bool) -> String {
    let badge = if is_available {
        style("in stock").green()
    } else {
        style("sold out").dim()
    };
    badge.to_string()
}

/// Major-unit price with two decimals, as listings show it.
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}
