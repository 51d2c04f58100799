//! # grovepath
//!
//! Read-side helpers for tree-shaped documents:
//!
//! - **traverse**: a non-recursive, document-order (children before parent)
//!   walk with node category filtering, safe on arbitrarily deep trees.
//! - **template**: quote-aware substitution of positional arguments into path
//!   queries such as `//PersVeh[@id = $veh]/Coverage`.
//! - **core**: [`Selector`], which renders a template and runs it through a
//!   caller-supplied [`QueryExecutor`].
//! - **xml**: a `roxmltree`-backed [`XmlDocument`] implementing [`DocumentNode`].
//!
//! ```
//! use grovepath::{DocumentNode, NodeCategory, TraverseExt, XmlDocument, substitute};
//!
//! let doc = XmlDocument::parse(r#"<PersVeh id="Veh1"><Coverage>BI</Coverage></PersVeh>"#).unwrap();
//! let texts: Vec<String> = doc
//!     .root()
//!     .traverse(NodeCategory::Text)
//!     .map(|n| n.string_value())
//!     .collect();
//! assert_eq!(texts, ["BI"]);
//!
//! let query = substitute("//PersVeh[@id = $veh]/Coverage", &["Veh1"]).unwrap();
//! assert_eq!(query, r#"//PersVeh[@id = "Veh1"]/Coverage"#);
//! ```

// Re-export workspace crates
pub use grovepath_core as core;
pub use grovepath_template as template;
pub use grovepath_traverse as traverse;
pub use grovepath_types as types;
pub use grovepath_xml as xml;

pub use grovepath_core::{ExecutorError, GrovepathError, QueryExecutor, Selector, SelectorConfig};
pub use grovepath_template::{
    ArgumentQuoting, Placeholder, QueryTemplate, TemplateError, TemplateOptions, scan_placeholders,
    substitute, substitute_with,
};
pub use grovepath_traverse::{CategoryFilter, Traversal, TraverseExt, child_elements, traverse};
pub use grovepath_types::{DocumentNode, NodeCategory, QName};
pub use grovepath_xml::{XmlDocument, XmlError, XmlNode};
