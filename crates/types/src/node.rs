//! Defines the core abstraction for a navigable, read-only document tree.
use std::fmt;
use std::hash::Hash;

/// A qualified name, consisting of an optional prefix and a local part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QName<'a> {
    pub prefix: Option<&'a str>,
    pub local_part: &'a str,
}

impl fmt::Display for QName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.prefix {
            Some(prefix) => write!(f, "{}:{}", prefix, self.local_part),
            None => f.write_str(self.local_part),
        }
    }
}

/// The kind of a node in the document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeCategory {
    /// The wrapper above the top-level element.
    Document,
    Element,
    Attribute,
    Text,
    Comment,
    ProcessingInstruction,
}

impl NodeCategory {
    /// Every category, in declaration order.
    pub const ALL: [NodeCategory; 6] = [
        NodeCategory::Document,
        NodeCategory::Element,
        NodeCategory::Attribute,
        NodeCategory::Text,
        NodeCategory::Comment,
        NodeCategory::ProcessingInstruction,
    ];

    /// Position of the category in [`NodeCategory::ALL`]. Stable, used for bit sets.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The contract a tree implementation fulfils so that traversal and query
/// selection can run over it without knowing how nodes are stored.
///
/// Equality and hashing must be *identity*: two structurally identical nodes at
/// different positions in the tree compare unequal.
///
/// `'a` is the lifetime of the underlying tree storage.
pub trait DocumentNode<'a>: fmt::Debug + Clone + Copy + PartialEq + Eq + Hash {
    /// The category of the node (Element, Text, Attribute, etc.).
    fn category(&self) -> NodeCategory;

    /// The qualified name of the node. `None` for unnamed nodes such as text or
    /// the document. For a processing instruction this is its target.
    fn name(&self) -> Option<QName<'a>>;

    /// The string value of the node.
    /// - For a text node, this is its content.
    /// - For an element or document, the concatenated text of its descendants.
    /// - For an attribute, this is its value.
    fn string_value(&self) -> String;

    /// The attribute nodes of this node, in declaration order.
    /// Empty for anything that is not an element.
    fn attributes(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    /// The child nodes of this node, in document order. Never yields attributes.
    fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    /// The parent node. `None` for the document node or a detached root.
    fn parent(&self) -> Option<Self>;

    /// For a document node, its single top-level element.
    fn document_element(&self) -> Option<Self> {
        if self.category() != NodeCategory::Document {
            return None;
        }
        self.children()
            .find(|child| child.category() == NodeCategory::Element)
    }

    /// Convenience check against the local part of [`DocumentNode::name`].
    fn has_local_name(&self, local_name: &str) -> bool {
        self.name().is_some_and(|q| q.local_part == local_name)
    }
}
