//! Streaming JSON5 parsing for shape documents
//!
//! Supports both single-line JSONL and multi-line JSON5 formats.
//! JSON5 adds support for comments, trailing commas, and unquoted keys.

use std::io::{BufRead, BufReader, Read};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shape::Shape;

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
}

/// A problem found while reading a document, tied to the line the offending
/// object starts on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Warning {
    pub message: String,
    pub line: usize,
}

/// Result of parsing a shape stream.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    pub shapes: Vec<Shape>,
    pub warnings: Vec<Warning>,
}

/// Parse a single JSON5 object into a shape.
pub fn parse_line(line: &str, line_number: usize) -> Result<Shape, ParseError> {
    json5::from_str(line).map_err(|e| ParseError { message: e.to_string(), line: line_number })
}

/// Parse a stream of JSON5 shape objects.
///
/// Objects may sit one per line or span several lines. Parsing stops at the
/// first object that fails to parse, since the next object boundary cannot be
/// found reliably after a syntax error; the failure is reported as a warning
/// and the shapes read so far are kept.
pub fn parse_stream<R: Read>(reader: R) -> ParseResult {
    let mut result = ParseResult::default();
    let mut scanner = ObjectScanner::default();
    let mut current_line = 1;

    for line in BufReader::new(reader).lines() {
        let Ok(line) = line else {
            result.warnings.push(Warning { message: "unreadable input".to_string(), line: current_line });
            return result;
        };

        if let Some((text, start_line)) = scanner.push(&line, current_line) {
            match parse_line(&text, start_line) {
                Ok(shape) => result.shapes.push(shape),
                Err(e) => {
                    result.warnings.push(Warning { message: e.message, line: e.line });
                    return result;
                }
            }
        }
        current_line += 1;
    }

    if let Some((text, start_line)) = scanner.finish() {
        match parse_line(&text, start_line) {
            Ok(shape) => result.shapes.push(shape),
            Err(e) => result.warnings.push(Warning { message: e.message, line: e.line }),
        }
    }

    result
}

/// Accumulates lines until an object has opened and its braces and
/// brackets balance again. Comment lines before an object travel with it.
///
/// Delimiters inside strings (either quote style) and inside `//` or
/// `/* */` comments are not counted.
#[derive(Debug, Default)]
struct ObjectScanner {
    text: String,
    start_line: usize,
    opened: bool,
    brace_depth: i32,
    bracket_depth: i32,
    quote: Option<char>,
    escape_next: bool,
    in_block_comment: bool,
}

impl ObjectScanner {
    fn push(&mut self, line: &str, line_number: usize) -> Option<(String, usize)> {
        if self.text.is_empty() {
            if line.trim().is_empty() {
                return None;
            }
            self.start_line = line_number;
        } else {
            self.text.push('\n');
        }
        self.text.push_str(line);

        let mut chars = line.chars().peekable();
        while let Some(ch) = chars.next() {
            if self.escape_next {
                self.escape_next = false;
                continue;
            }
            if self.in_block_comment {
                if ch == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    self.in_block_comment = false;
                }
                continue;
            }
            match (self.quote, ch) {
                (Some(_), '\\') => self.escape_next = true,
                (Some(quote), _) if ch == quote => self.quote = None,
                (Some(_), _) => {}
                (None, '"' | '\'') => self.quote = Some(ch),
                (None, '/') if chars.peek() == Some(&'/') => break,
                (None, '/') if chars.peek() == Some(&'*') => {
                    chars.next();
                    self.in_block_comment = true;
                }
                (None, '{') => {
                    self.opened = true;
                    self.brace_depth += 1;
                }
                (None, '}') => self.brace_depth -= 1,
                (None, '[') => self.bracket_depth += 1,
                (None, ']') => self.bracket_depth -= 1,
                _ => {}
            }
        }
        // A backslash at the end of a line continues the string; it escapes
        // the line break, not the next line's first character.
        self.escape_next = false;

        if self.opened && !self.in_block_comment && self.brace_depth == 0 && self.bracket_depth == 0 {
            return self.finish();
        }
        None
    }

    fn finish(&mut self) -> Option<(String, usize)> {
        let text = std::mem::take(&mut self.text);
        self.opened = false;
        self.brace_depth = 0;
        self.bracket_depth = 0;
        self.quote = None;
        self.escape_next = false;
        self.in_block_comment = false;
        if text.trim().is_empty() {
            None
        } else {
            Some((text, self.start_line))
        }
    }
}
