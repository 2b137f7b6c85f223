//! Coloured one-line status messages for CLI commands.
//! Colours are dropped when `NO_COLOR` is set.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn colour(self) -> &'static str {
        match self {
            Tone::Info => "\x1b[34m",
            Tone::Success => "\x1b[32m",
            Tone::Warning => "\x1b[33m",
            Tone::Error => "\x1b[31m",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Tone::Info => "ℹ️",
            Tone::Success => "✅",
            Tone::Warning => "⚠️",
            Tone::Error => "❌",
        }
    }
}

fn paint<T: fmt::Display>(tone: Tone, msg: T) -> String {
    if std::env::var_os("NO_COLOR").is_some() {
        format!("{} {}", tone.icon(), msg)
    } else {
        format!("{}{}{} {}{}", tone.colour(), BOLD, tone.icon(), RESET, msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", paint(Tone::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", paint(Tone::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", paint(Tone::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", paint(Tone::Error, msg));
}
