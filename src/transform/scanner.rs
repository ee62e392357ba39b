//! Locates class strings inside component sources.
//!
//! Two kinds of locations are recognized:
//!
//! - `class` / `className` attributes whose value is a string literal, either
//!   directly (`class="..."`) or wrapped in an expression (`className={"..."}`).
//! - String literal arguments of the class builders `cn`, `clsx`, `cva` and
//!   `tv`. For `cn` and `clsx` these are the direct arguments (ternary branches
//!   included). For `cva` and `tv` the base string and every value nested under
//!   a `variants` property count as well; `defaultVariants` values are variant
//!   names, not classes, and are skipped.
//!
//! Template literals are only considered when they contain no `${`
//! interpolation. The result is a list of byte ranges covering literal
//! contents (quotes excluded), sorted and non-overlapping.

use regex::Regex;
use std::ops::Range;

use crate::constants::CLASS_BUILDER_FUNCTIONS;
use crate::core::{Result, SyncError};

/// Builders whose nested `variants` values hold classes.
const VARIANT_BUILDERS: &[&str] = &["cva", "tv"];

pub struct ClassScanner {
    attribute: Regex,
    builder: Regex,
}

impl ClassScanner {
    pub fn new() -> Result<Self> {
        let attribute = compile(r#"(?:^|[^\w:.@-])(?:class|className)\s*=\s*(?:\{\s*)?(["'`])"#)?;
        let builder = compile(&format!(r"\b({})\s*\(", CLASS_BUILDER_FUNCTIONS.join("|")))?;
        Ok(Self { attribute, builder })
    }

    /// Content ranges of every class string in `source`.
    #[must_use]
    pub fn class_ranges(&self, source: &str) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();

        for captures in self.attribute.captures_iter(source) {
            if let Some(quote) = captures.get(1) {
                if let Some(range) = literal_content(source, quote.start()) {
                    ranges.push(range);
                }
            }
        }

        for captures in self.builder.captures_iter(source) {
            let (Some(name), Some(call)) = (captures.get(1), captures.get(0)) else {
                continue;
            };
            let nested_variants = VARIANT_BUILDERS.contains(&name.as_str());
            ranges.extend(builder_arguments(source, call.end(), nested_variants));
        }

        ranges.sort_by_key(|range| (range.start, range.end));
        let mut disjoint: Vec<Range<usize>> = Vec::with_capacity(ranges.len());
        for range in ranges {
            match disjoint.last() {
                Some(previous) if range.start < previous.end => {}
                _ => disjoint.push(range),
            }
        }
        disjoint
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| SyncError::Other {
        message: format!("Invalid class pattern: {e}"),
    })
}

/// End offset (exclusive of the closing quote) of the literal opening at `start`.
fn literal_end(source: &str, start: usize) -> Option<usize> {
    let bytes = source.as_bytes();
    let quote = *bytes.get(start)?;
    let mut index = start + 1;
    while index < bytes.len() {
        match bytes[index] {
            b'\\' => index += 2,
            b if b == quote => return Some(index),
            b'\n' if quote != b'`' => return None,
            _ => index += 1,
        }
    }
    None
}

/// Content range of the literal opening at `start`, unless it is interpolated.
fn literal_content(source: &str, start: usize) -> Option<Range<usize>> {
    let end = literal_end(source, start)?;
    let range = start + 1..end;
    if source.as_bytes()[start] == b'`' && source[range.clone()].contains("${") {
        return None;
    }
    Some(range)
}

struct Frame {
    closer: u8,
    in_variants: bool,
}

/// Class string ranges among the arguments of a call whose `(` ends at `open`.
fn builder_arguments(source: &str, open: usize, nested_variants: bool) -> Vec<Range<usize>> {
    let bytes = source.as_bytes();
    let mut ranges = Vec::new();
    let mut frames = vec![Frame {
        closer: b')',
        in_variants: false,
    }];
    let mut previous: u8 = b'(';
    let mut word = String::new();
    let mut word_broken = false;
    let mut pending_key: Option<String> = None;
    let mut index = open;

    while index < bytes.len() {
        let byte = bytes[index];
        match byte {
            b'"' | b'\'' | b'`' => {
                let Some(end) = literal_end(source, index) else {
                    return ranges;
                };
                let next = next_significant(bytes, end + 1);
                let is_key = next == Some(b':') && matches!(previous, b'{' | b',');
                let top_level = frames.len() == 1;
                let in_variants = frames.last().is_some_and(|f| f.in_variants);

                if is_key {
                    pending_key = Some(source[index + 1..end].to_string());
                } else if top_level || in_variants {
                    if let Some(range) = literal_content(source, index) {
                        ranges.push(range);
                    }
                }
                previous = byte;
                index = end + 1;
                continue;
            }
            b'/' if bytes.get(index + 1) == Some(&b'/') => {
                index = source[index..].find('\n').map_or(bytes.len(), |n| index + n);
                continue;
            }
            b'/' if bytes.get(index + 1) == Some(&b'*') => {
                index = source[index + 2..].find("*/").map_or(bytes.len(), |n| index + n + 4);
                continue;
            }
            b'(' | b'[' | b'{' => {
                let parent_variants = frames.last().is_some_and(|f| f.in_variants);
                let opens_variants = byte == b'{'
                    && nested_variants
                    && pending_key.as_deref() == Some("variants");
                frames.push(Frame {
                    closer: match byte {
                        b'(' => b')',
                        b'[' => b']',
                        _ => b'}',
                    },
                    in_variants: parent_variants || opens_variants,
                });
                pending_key = None;
            }
            b')' | b']' | b'}' => {
                if frames.last().is_some_and(|f| f.closer == byte) {
                    frames.pop();
                }
                if frames.is_empty() {
                    return ranges;
                }
            }
            b':' => {
                if !word.is_empty() {
                    pending_key = Some(std::mem::take(&mut word));
                }
            }
            b',' => pending_key = None,
            _ => {}
        }

        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$' {
            if word_broken {
                word.clear();
                word_broken = false;
            }
            word.push(char::from(byte));
        } else if byte.is_ascii_whitespace() {
            word_broken = true;
        } else {
            word.clear();
        }
        if !byte.is_ascii_whitespace() {
            previous = byte;
        }
        index += 1;
    }

    ranges
}

fn next_significant(bytes: &[u8], from: usize) -> Option<u8> {
    bytes.get(from..)?.iter().copied().find(|b| !b.is_ascii_whitespace())
}
