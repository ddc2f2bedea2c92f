//! Human-readable rendering of parse failures.
//!
//! Errors carry raw ids so they stay cheap to build and compare; rendering
//! resolves those ids to the table's symbol labels for logging or CLI layers.

use crate::error::{ParseError, SyntaxError};
use crate::table::ParserData;
use std::fmt::Write;

impl SyntaxError {
    /// Renders the error using the labels of `data`:
    ///
    /// ```text
    /// syntax error at 0:2: found `c`, expected `b`
    ///   stack: <0> <2>
    /// ```
    pub fn render<D: ParserData>(&self, data: &D) -> String {
        let mut out = String::from("syntax error");
        if let Some(span) = self.span {
            let _ = write!(out, " at {}:{}", span.start.line, span.start.column);
        }
        let _ = write!(out, ": found `{}`", data.terminal_label(self.found));
        match self.expected.as_slice() {
            [] => out.push_str(", no terminal is acceptable here"),
            [one] => {
                let _ = write!(out, ", expected `{}`", data.terminal_label(*one));
            }
            many => {
                out.push_str(", expected one of ");
                for (i, t) in many.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    let _ = write!(out, "`{}`", data.terminal_label(*t));
                }
            }
        }
        out.push_str("\n  stack:");
        for state in &self.states {
            let _ = write!(out, " <{}>", state);
        }
        out
    }
}

impl ParseError {
    /// Renders any parse error; syntax errors get the labelled form from
    /// [`SyntaxError::render`], everything else its `Display` text.
    pub fn render<D: ParserData>(&self, data: &D) -> String {
        match self {
            ParseError::Syntax(err) => err.render(data),
            ParseError::UnexpectedEndOfStream { states, .. } => {
                let mut out = self.to_string();
                out.push_str("\n  stack:");
                for state in states {
                    let _ = write!(out, " <{}>", state);
                }
                out
            }
            other => other.to_string(),
        }
    }
}
