//! Selector configuration.

use crate::error::GrovepathError;
use grovepath_template::TemplateOptions;
use serde::{Deserialize, Serialize};

/// Configuration for a [`Selector`](crate::Selector).
///
/// ```
/// use grovepath_core::SelectorConfig;
/// use grovepath_template::ArgumentQuoting;
///
/// let config = SelectorConfig::from_json(r#"{ "template": { "quoting": "escape" } }"#).unwrap();
/// assert_eq!(config.template.quoting, ArgumentQuoting::Escape);
/// assert!(!config.substitute_without_arguments);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Placeholder sigil and argument quoting.
    pub template: TemplateOptions,
    /// When false (the default), a query given with no arguments is handed to
    /// the executor untouched, so `$name` stays available for the executor's
    /// own variable binding. When true, such a query must be placeholder-free.
    pub substitute_without_arguments: bool,
}

impl SelectorConfig {
    pub fn from_json(json: &str) -> Result<Self, GrovepathError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GrovepathError> {
        self.template.validate()?;
        Ok(())
    }
}
