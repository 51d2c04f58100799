//! Finds placeholders in a query template.
//!
//! A placeholder is the sigil followed by the longest run of alphanumeric
//! characters (possibly none). Text inside `'...'` or `"..."` is literal: a
//! quote opens or closes its own kind of span only while the other kind is not
//! open, so `"it's"` is one double-quoted span.

use std::iter::Peekable;
use std::ops::Range;
use std::str::CharIndices;

/// The sigil used when none is configured.
pub const DEFAULT_SIGIL: char = '$';

/// Location of one placeholder in the original template, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placeholder {
    /// Offset of the sigil.
    pub start: usize,
    /// Length including the sigil.
    pub len: usize,
}

impl Placeholder {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn span(&self) -> Range<usize> {
        self.start..self.end()
    }

    /// The identifier after the sigil. Empty for a bare sigil, `None` when
    /// the span does not fall on char boundaries of `template`.
    pub fn name<'t>(&self, template: &'t str) -> Option<&'t str> {
        let mut chars = template.get(self.span())?.chars();
        chars.next()?;
        Some(chars.as_str())
    }
}

/// Lazy placeholder scanner over a template.
#[derive(Debug, Clone)]
pub struct Placeholders<'t> {
    chars: Peekable<CharIndices<'t>>,
    sigil: char,
    in_single: bool,
    in_double: bool,
}

impl<'t> Placeholders<'t> {
    pub fn new(template: &'t str, sigil: char) -> Self {
        Self {
            chars: template.char_indices().peekable(),
            sigil,
            in_single: false,
            in_double: false,
        }
    }

    /// True while the scanner is inside a quoted span.
    pub fn in_literal(&self) -> bool {
        self.in_single || self.in_double
    }
}

impl Iterator for Placeholders<'_> {
    type Item = Placeholder;

    fn next(&mut self) -> Option<Placeholder> {
        while let Some((offset, c)) = self.chars.next() {
            match c {
                '\'' if !self.in_double => self.in_single = !self.in_single,
                '"' if !self.in_single => self.in_double = !self.in_double,
                c if c == self.sigil && !self.in_literal() => {
                    let mut end = offset + c.len_utf8();
                    // The terminating character stays in the stream so a quote
                    // or another sigil right after the name is still scanned.
                    while let Some(&(at, next)) = self.chars.peek() {
                        if !next.is_alphanumeric() {
                            break;
                        }
                        end = at + next.len_utf8();
                        self.chars.next();
                    }
                    return Some(Placeholder {
                        start: offset,
                        len: end - offset,
                    });
                }
                _ => {}
            }
        }
        None
    }
}

/// Collects every placeholder of `template`, left to right.
pub fn scan_placeholders(template: &str, sigil: char) -> Vec<Placeholder> {
    Placeholders::new(template, sigil).collect()
}
