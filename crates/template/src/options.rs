//! Configuration for placeholder scanning and argument rendering.

use crate::error::TemplateError;
use crate::scanner::DEFAULT_SIGIL;
use serde::{Deserialize, Serialize};

/// How a caller-supplied argument is turned into a query literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentQuoting {
    /// Strip leading/trailing `'` and `"` and wrap the rest in double quotes.
    /// Quotes inside the value are copied as-is, so an argument containing `"`
    /// yields a broken literal.
    #[default]
    Strip,
    /// Remove one matching pair of surrounding quotes if the caller supplied
    /// one, then produce a well-formed XPath 1.0 string literal: double
    /// quotes, single quotes if the value contains `"`, or a `concat()` call if
    /// it contains both. Any other quote belongs to the value and is kept.
    Escape,
}

impl ArgumentQuoting {
    /// Appends the literal for `argument` to `out`.
    pub fn render_into(self, argument: &str, out: &mut String) {
        let value = match self {
            ArgumentQuoting::Strip => strip_quotes(argument),
            ArgumentQuoting::Escape => unwrap_quoted(argument),
        };
        match self {
            ArgumentQuoting::Strip => push_quoted(out, value, '"'),
            ArgumentQuoting::Escape if !value.contains('"') => push_quoted(out, value, '"'),
            ArgumentQuoting::Escape if !value.contains('\'') => push_quoted(out, value, '\''),
            ArgumentQuoting::Escape => {
                out.push_str("concat(");
                for (i, part) in value.split('"').enumerate() {
                    if i > 0 {
                        out.push_str(", '\"', ");
                    }
                    push_quoted(out, part, '"');
                }
                out.push(')');
            }
        }
    }

    pub fn render(self, argument: &str) -> String {
        let mut out = String::with_capacity(argument.len() + 2);
        self.render_into(argument, &mut out);
        out
    }
}

fn strip_quotes(argument: &str) -> &str {
    argument.trim_matches(|c| c == '"' || c == '\'')
}

/// Drops one enclosing `'...'` or `"..."` pair, if present.
fn unwrap_quoted(argument: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|q| argument.strip_prefix(q)?.strip_suffix(q))
        .unwrap_or(argument)
}

fn push_quoted(out: &mut String, value: &str, quote: char) {
    out.push(quote);
    out.push_str(value);
    out.push(quote);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateOptions {
    /// Character that introduces a placeholder.
    pub sigil: char,
    pub quoting: ArgumentQuoting,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            sigil: DEFAULT_SIGIL,
            quoting: ArgumentQuoting::default(),
        }
    }
}

impl TemplateOptions {
    pub fn with_sigil(mut self, sigil: char) -> Self {
        self.sigil = sigil;
        self
    }

    pub fn with_quoting(mut self, quoting: ArgumentQuoting) -> Self {
        self.quoting = quoting;
        self
    }

    /// A sigil that could be part of a literal or an identifier can never be
    /// told apart from ordinary query text.
    pub fn validate(&self) -> Result<(), TemplateError> {
        let c = self.sigil;
        if c == '\'' || c == '"' || c.is_alphanumeric() || c.is_whitespace() {
            return Err(TemplateError::InvalidSigil(c));
        }
        Ok(())
    }
}
