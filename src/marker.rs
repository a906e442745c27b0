//! Comment marker recognition.
//!
//! A span is delimited by two HTML comments on their own lines:
//!
//! ```text
//! <!-- begin hello.rs -->
//! ...
//! <!-- end hello.rs -->
//! ```
//!
//! The name after `begin` selects what gets spliced into the span. The name
//! after `end` is optional and only informational.

use crate::error::SpliceError;

const BEGIN: &str = "<!-- begin";
const END: &str = "<!-- end";
const COMMENT_CLOSE: &str = "-->";

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    /// Opens a span named by the token after `begin`
    Begin(&'a str),
    /// Closes the current span
    End(Option<&'a str>),
    /// Plain content
    Text,
}

impl<'a> Marker<'a> {
    /// Classify `line`, which may still carry its line terminator.
    ///
    /// `line_number` is 1-based and only used for error reporting.
    pub fn parse(line: &'a str, line_number: usize) -> Result<Self, SpliceError> {
        if let Some(rest) = after_keyword(line, BEGIN) {
            let name = marker_name(rest).ok_or_else(|| SpliceError::MissingName {
                line: line_number,
                text: line.trim_end().to_string(),
            })?;
            return Ok(Marker::Begin(name));
        }

        if let Some(rest) = after_keyword(line, END) {
            return Ok(Marker::End(marker_name(rest)));
        }

        Ok(Marker::Text)
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Marker::End(_))
    }
}

/// Text following `keyword`, provided the keyword stands alone
/// (`<!-- beginning -->` is not a begin marker).
fn after_keyword<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = &line[line.find(keyword)? + keyword.len()..];
    if rest.is_empty() || rest.starts_with(char::is_whitespace) || rest.starts_with(COMMENT_CLOSE) {
        Some(rest)
    } else {
        None
    }
}

/// First whitespace-delimited token after the keyword, unless it is the
/// closing `-->` of the comment.
fn marker_name(rest: &str) -> Option<&str> {
    rest.split_whitespace()
        .next()
        .filter(|token| *token != COMMENT_CLOSE)
        .map(|token| token.strip_suffix(COMMENT_CLOSE).unwrap_or(token))
        .filter(|token| !token.is_empty())
}
