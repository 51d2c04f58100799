//! Positional substitution of arguments into a query template.

use crate::error::TemplateError;
use crate::options::TemplateOptions;
use crate::scanner::{Placeholder, Placeholders};
use std::fmt;

/// A query template whose placeholders have been located once and can be
/// rendered with many argument lists.
///
/// Placeholders are filled by position: the first one found takes
/// `arguments[0]`, the second `arguments[1]`, and so on. Their names are only
/// informative. Surplus arguments are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTemplate<'t> {
    source: &'t str,
    placeholders: Vec<Placeholder>,
    options: TemplateOptions,
}

impl<'t> QueryTemplate<'t> {
    /// Scans `source` with the default `$` sigil and [`ArgumentQuoting::Strip`](crate::ArgumentQuoting::Strip).
    pub fn parse(source: &'t str) -> Self {
        Self::scan(source, TemplateOptions::default())
    }

    pub fn with_options(source: &'t str, options: TemplateOptions) -> Result<Self, TemplateError> {
        options.validate()?;
        Ok(Self::scan(source, options))
    }

    fn scan(source: &'t str, options: TemplateOptions) -> Self {
        let placeholders = Placeholders::new(source, options.sigil).collect();
        Self {
            source,
            placeholders,
            options,
        }
    }

    pub fn as_str(&self) -> &'t str {
        self.source
    }

    pub fn options(&self) -> &TemplateOptions {
        &self.options
    }

    pub fn placeholders(&self) -> &[Placeholder] {
        &self.placeholders
    }

    pub fn placeholder_count(&self) -> usize {
        self.placeholders.len()
    }

    pub fn placeholder_names(&self) -> impl Iterator<Item = &'t str> + '_ {
        let source = self.source;
        self.placeholders.iter().filter_map(move |p| p.name(source))
    }

    /// Produces the concrete query. Fails without producing any output when
    /// there are fewer arguments than placeholders.
    pub fn render<S: AsRef<str>>(&self, arguments: &[S]) -> Result<String, TemplateError> {
        let required = self.placeholders.len();
        if arguments.len() < required {
            return Err(TemplateError::ArgumentError {
                required,
                supplied: arguments.len(),
            });
        }
        if required == 0 {
            return Ok(self.source.to_string());
        }

        let extra: usize = arguments[..required]
            .iter()
            .map(|a| a.as_ref().len() + 2)
            .sum();
        let mut out = String::with_capacity(self.source.len() + extra);
        let mut copied = 0;
        for (placeholder, argument) in self.placeholders.iter().zip(arguments) {
            out.push_str(&self.source[copied..placeholder.start]);
            self.options.quoting.render_into(argument.as_ref(), &mut out);
            copied = placeholder.end();
        }
        out.push_str(&self.source[copied..]);

        log::debug!("Rendered query template '{}' as '{}'", self.source, out);
        Ok(out)
    }
}

impl fmt::Display for QueryTemplate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source)
    }
}

/// Substitutes `arguments` into the placeholders of `template` using the
/// default options.
pub fn substitute<S: AsRef<str>>(template: &str, arguments: &[S]) -> Result<String, TemplateError> {
    QueryTemplate::parse(template).render(arguments)
}

pub fn substitute_with<S: AsRef<str>>(
    template: &str,
    arguments: &[S],
    options: &TemplateOptions,
) -> Result<String, TemplateError> {
    QueryTemplate::with_options(template, *options)?.render(arguments)
}
