//! Render roll results as text or HTML.
//!
//! The short form lists each die, the modifier and the total, e.g. `3 + 2 + 3 + 4 (+4) = 16`.
//! The full form echoes the roll first: `4d4+4: 3 + 2 + 3 + 4 (+4) = 16`.

use crate::roll;
use itertools::Itertools;
use std::fmt::Write;

const SEPARATOR: &str = ": ";

fn render(result: &roll::Result, full: bool) -> String {
    let mut output = String::new();
    if full {
        output.push_str(&result.source.to_lowercase());
        output.push_str(SEPARATOR);
    }
    // writing to a String can't fail
    let _ = write!(output, "{}", result.rolls.iter().format(" + "));
    match result.modifier {
        m if m > 0 => {
            let _ = write!(output, " (+{m})");
        }
        m if m < 0 => {
            let _ = write!(output, " (-{})", m.unsigned_abs());
        }
        _ => (),
    }
    if !result.is_bare() {
        let _ = write!(output, " = {}", result.total);
    }
    output
}

/// Wrap a rendered result in HTML
///
/// `a: b` becomes `<strong>a:</strong> <em>b</em>`, anything else is wrapped in `<strong>`.
pub fn html(rendered: &str) -> String {
    match rendered.split_once(SEPARATOR) {
        Some((left, right)) => format!("<strong>{left}:</strong> <em>{right}</em>"),
        None => format!("<strong>{rendered}</strong>"),
    }
}

pub fn prettify_one(result: &roll::Result) -> String {
    render(result, false)
}

pub fn prettify_one_full(result: &roll::Result) -> String {
    render(result, true)
}

pub fn prettify(results: &[roll::Result]) -> Vec<String> {
    results.iter().map(prettify_one).collect()
}

pub fn prettify_full(results: &[roll::Result]) -> Vec<String> {
    results.iter().map(prettify_one_full).collect()
}

pub fn prettify_html(results: &[roll::Result]) -> Vec<String> {
    results.iter().map(|r| html(&prettify_one(r))).collect()
}

pub fn prettify_html_full(results: &[roll::Result]) -> Vec<String> {
    results.iter().map(|r| html(&prettify_one_full(r))).collect()
}
