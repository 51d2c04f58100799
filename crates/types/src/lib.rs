//! Foundation types shared across the grovepath crates.
//!
//! The traversal engine and the query selector are written exclusively against
//! [`DocumentNode`], so any tree (an XML DOM, an arena, a JSON view) can be
//! walked once it implements that trait.

pub mod node;

pub use node::{DocumentNode, NodeCategory, QName};
