//! Document-order traversal over any [`DocumentNode`] tree.
//!
//! ```
//! use grovepath_traverse::{CategoryFilter, traverse};
//! use grovepath_types::tests::MockTree;
//! use grovepath_types::{DocumentNode, NodeCategory};
//!
//! let mut tree = MockTree::new();
//! let root = tree.element(None, "root");
//! let item = tree.element(Some(root), "item");
//! tree.attribute(item, "id", "7");
//!
//! let names: Vec<String> = traverse(Some(tree.node(root)), CategoryFilter::all())
//!     .filter_map(|n| n.name().map(|q| q.to_string()))
//!     .collect();
//! assert_eq!(names, ["item", "root"]);
//!
//! let attrs = traverse(Some(tree.node(root)), NodeCategory::Attribute).count();
//! assert_eq!(attrs, 1);
//! ```

pub mod filter;
pub mod traversal;

pub use filter::CategoryFilter;
pub use traversal::{Traversal, TraverseExt, child_elements, traverse};
