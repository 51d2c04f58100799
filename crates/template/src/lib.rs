//! Placeholder templating for path queries.
//!
//! A template such as `//PersVeh[@id = $veh]/Coverage` is scanned once for
//! placeholders (sigil plus identifier, outside quoted literals) and then
//! rendered by splicing quoted arguments in by position.
//!
//! ```
//! use grovepath_template::substitute;
//!
//! let query = substitute("A[@id = $id and text() = '$literal']", &["7"]).unwrap();
//! assert_eq!(query, r#"A[@id = "7" and text() = '$literal']"#);
//! ```

pub mod error;
pub mod options;
pub mod scanner;
pub mod template;

pub use error::TemplateError;
pub use options::{ArgumentQuoting, TemplateOptions};
pub use scanner::{DEFAULT_SIGIL, Placeholder, Placeholders, scan_placeholders};
pub use template::{QueryTemplate, substitute, substitute_with};
