//! Plain-text rendering of the stored items.
//!
//! The listing is a bracketed list of `(name, quantity, description)`
//! tuples, e.g. `[('Widget', 5, 'Small metal widget')]`.

use crate::models::item::Item;
use std::fmt::Write;

pub fn render(items: &[Item]) -> String {
    let mut out = String::from("[");
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let (name, quantity, description) = item.as_listing_tuple();
        let _ = write!(
            out,
            "({}, {}, {})",
            quote(name),
            quantity,
            quote(description)
        );
    }
    out.push(']');
    out
}

/// Quote a string literal. Single quotes are preferred; double quotes are
/// used when that avoids escaping an embedded single quote.
pub fn quote(s: &str) -> String {
    let delim = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(delim);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == delim => {
                out.push('\\');
                out.push(c);
            }
            c if !is_printable(c) => {
                let cp = c as u32;
                let _ = match cp {
                    0..=0xff => write!(out, "\\x{:02x}", cp),
                    0x100..=0xffff => write!(out, "\\u{:04x}", cp),
                    _ => write!(out, "\\U{:08x}", cp),
                };
            }
            c => out.push(c),
        }
    }
    out.push(delim);
    out
}

/// Printable means: not a control, separator (other than the plain space),
/// format or private-use character.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !matches!(
        c as u32,
        0x00a0
            | 0x00ad
            | 0x0600..=0x0605
            | 0x061c
            | 0x06dd
            | 0x070f
            | 0x0890..=0x0891
            | 0x08e2
            | 0x180e
            | 0x2000..=0x200f
            | 0x2028..=0x202f
            | 0x205f..=0x2064
            | 0x2066..=0x206f
            | 0x3000
            | 0xe000..=0xf8ff
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0x110bd
            | 0x110cd
            | 0x1bca0..=0x1bca3
            | 0x1d173..=0x1d17a
            | 0xe0001
            | 0xe0020..=0xe007f
            | 0xf0000..=0x10ffff
    )
}
