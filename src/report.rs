//! Diagnostic rendering for command-line consumers
//!
//! The parser only produces a [`ParseError`]; turning it into something a
//! person reads (offending line plus a caret under the column) happens here.

use crate::parser::error::ParseError;

/// Format `error` against the source it came from.
///
/// ```text
/// syntax error: expecting ':' after parameter name, found ')'
///  --> demo.mypl:1:14
///   |
/// 1 | fun int f( x ) end
///   |              ^
/// ```
pub fn format_diagnostic(source: &str, origin: &str, error: &ParseError) -> String {
    let line_no = error.line();
    let gutter = line_no.to_string().len();
    let pad = " ".repeat(gutter);

    let mut out = format!(
        "{} error: {}\n{}--> {}:{}:{}\n",
        error.kind.to_string().to_lowercase(),
        error.message,
        pad,
        origin,
        line_no,
        error.column()
    );

    // EOS errors can point one line past the last one
    if let Some(text) = source.lines().nth(line_no.saturating_sub(1)) {
        let caret_pad: String = text
            .chars()
            .take(error.column().saturating_sub(1))
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        out.push_str(&format!("{pad} |\n"));
        out.push_str(&format!("{line_no} | {text}\n"));
        out.push_str(&format!("{pad} | {caret_pad}^\n"));
    }

    out
}
