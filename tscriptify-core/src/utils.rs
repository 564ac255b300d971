//! Shared helpers for Go identifiers, literals and import paths.

use std::{fmt::Write, path::Path};

/// Whether a Go identifier is exported (starts with an upper-case letter).
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Render a string as a double-quoted Go string literal.
///
/// Escapes match Go's `%q`: named escapes where Go has one, `\xNN` for other
/// ASCII controls and `\uNNNN`/`\UNNNNNNNN` for non-printable Unicode.
pub fn go_string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if !is_go_printable(c) => {
                let _ = match c as u32 {
                    code @ ..0x10000 => write!(out, "\\u{code:04x}"),
                    code => write!(out, "\\U{code:08x}"),
                };
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Approximates Go's `unicode.IsPrint` for the non-ASCII range: controls,
/// separators other than the ASCII space and the common format characters
/// are not printable.
fn is_go_printable(c: char) -> bool {
    if c.is_ascii() {
        return !c.is_ascii_control();
    }
    !(c.is_control()
        || c.is_whitespace()
        || matches!(
            c,
            '\u{ad}'
                | '\u{600}'..='\u{605}'
                | '\u{61c}'
                | '\u{180e}'
                | '\u{200b}'..='\u{200f}'
                | '\u{202a}'..='\u{202e}'
                | '\u{2060}'..='\u{2064}'
                | '\u{2066}'..='\u{206f}'
                | '\u{feff}'
                | '\u{fff9}'..='\u{fffb}'
                | '\u{e000}'..='\u{f8ff}'
                | '\u{f0000}'..='\u{10ffff}'
        ))
}

/// Import path of the directory holding `file` once joined under `root`.
///
/// Mirrors `dir(clean(root + "/" + file))` with forward slashes, so an
/// absolute `file` is still nested under `root`.
pub fn join_import_path(root: &str, file: &Path) -> String {
    let file = file.to_string_lossy();
    let absolute = root.starts_with('/');
    let mut parts: Vec<&str> = Vec::new();

    for part in root
        .split(['/', '\\'])
        .chain(file.split(['/', std::path::MAIN_SEPARATOR]))
    {
        match part {
            "" | "." => {}
            ".." => match parts.last() {
                Some(last) if *last != ".." => {
                    parts.pop();
                }
                _ if absolute => {}
                _ => parts.push(".."),
            },
            part => parts.push(part),
        }
    }

    // drop the file name itself
    parts.pop();

    let joined = parts.join("/");
    match (absolute, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}
