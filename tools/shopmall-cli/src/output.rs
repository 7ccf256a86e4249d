//! Terminal output for the storefront.
//!
//! Every command writes through [`Output`]. In JSON mode stdout only carries
//! JSON documents: notices are dropped and errors go to stderr as objects.

use std::fmt::Display;
use std::io::Write as _;

use console::{style, StyledObject};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Styled,
    Json,
}

/// Output handler shared by all commands.
#[derive(Debug, Clone)]
pub struct Output {
    mode: Mode,
    verbose: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        let mode = if json { Mode::Json } else { Mode::Styled };
        Self { mode, verbose }
    }

    pub fn is_json(&self) -> bool {
        self.mode == Mode::Json
    }

    fn notice(&self, marker: StyledObject<&str>, msg: impl Display, stderr: bool) {
        if self.is_json() {
            return;
        }
        if stderr {
            eprintln!("{marker} {msg}");
        } else {
            println!("{marker} {msg}");
        }
    }

    pub fn info(&self, msg: &str) {
        self.notice(style("ℹ").blue(), msg, false);
    }

    pub fn success(&self, msg: &str) {
        self.notice(style("✓").green(), msg, false);
    }

    /// Shopper-facing problems that do not end the command, such as an
    /// unknown product id in a session.
    pub fn warn(&self, msg: &str) {
        self.notice(style("⚠").yellow(), msg, true);
    }

    /// Shown only with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose {
            self.notice(style("→").dim(), style(msg).dim(), true);
        }
    }

    pub fn error(&self, msg: &str) {
        match self.mode {
            Mode::Json => eprintln!("{}", serde_json::json!({ "error": msg })),
            Mode::Styled => eprintln!("{} {}", style("✗").red(), style(msg).red()),
        }
    }

    pub fn header(&self, title: &str) {
        if !self.is_json() {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// Print rendered storefront lines.
    pub fn page(&self, lines: &[String]) {
        if self.is_json() {
            return;
        }
        for line in lines {
            println!("{line}");
        }
    }

    /// Show a value: its JSON document in JSON mode, the rendered page otherwise.
    /// The page is only rendered when it will be printed.
    pub fn show<T: Serialize>(&self, value: &T, render: impl FnOnce() -> Vec<String>) {
        match self.mode {
            Mode::Json => self.json(value),
            Mode::Styled => self.page(&render()),
        }
    }

    /// Print a JSON document. Serialization failures are reported as errors.
    pub fn json<T: Serialize>(&self, value: &T) {
        match encode_json(value) {
            Ok(json) => println!("{json}"),
            Err(e) => self.error(&format!("Failed to encode output as JSON: {e}")),
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        self.page(&[format!("  {}: {}", style(key).dim(), value)]);
    }

    pub fn list_item(&self, item: &str) {
        self.page(&[format!("  {} {}", style("•").dim(), item)]);
    }

    /// Session input prompt, left on the current line.
    pub fn prompt(&self) {
        if self.is_json() {
            return;
        }
        print!("{} ", style(">").cyan().bold());
        let _ = std::io::stdout().flush();
    }
}

fn encode_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_mode_from_flags() {
        assert!(Output::new(false, true).is_json());
        assert!(!Output::new(true, false).is_json());
    }

    #[test]
    fn test_encode_json() {
        let json = encode_json(&serde_json::json!({ "totalItems": 2 })).unwrap();
        assert!(json.contains("\"totalItems\": 2"));
    }

    #[test]
    fn test_encode_json_reports_unencodable_values() {
        // JSON object keys must be strings.
        let mut value = BTreeMap::new();
        value.insert((1u8, 2u8), "pair");
        let err = encode_json(&value).unwrap_err();
        assert!(err.to_string().contains("key must be a string"));
    }

    #[test]
    fn test_show_skips_rendering_in_json_mode() {
        let output = Output::new(false, true);
        let mut rendered = false;
        output.show(&1, || {
            rendered = true;
            Vec::new()
        });
        assert!(!rendered);
    }
}
