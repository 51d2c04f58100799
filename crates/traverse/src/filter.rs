//! Category filters for the traversal engine.

use grovepath_types::NodeCategory;
use std::fmt;

/// A set of node categories a traversal should emit.
///
/// The empty set means "unfiltered": every node except attributes. Asking for
/// [`NodeCategory::Attribute`] makes every visited element emit its attribute
/// nodes, whether or not [`NodeCategory::Element`] is in the set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CategoryFilter {
    mask: u8,
}

impl CategoryFilter {
    /// The unfiltered traversal.
    pub const fn all() -> Self {
        Self { mask: 0 }
    }

    /// A filter that emits only the given categories.
    pub fn only(categories: impl IntoIterator<Item = NodeCategory>) -> Self {
        categories.into_iter().collect()
    }

    /// Adds a category to the filter.
    pub const fn with(self, category: NodeCategory) -> Self {
        Self {
            mask: self.mask | (1 << category.index()),
        }
    }

    pub const fn contains(&self, category: NodeCategory) -> bool {
        self.mask & (1 << category.index()) != 0
    }

    pub const fn is_unfiltered(&self) -> bool {
        self.mask == 0
    }

    /// True when elements should emit their attribute nodes as they are visited.
    pub const fn emits_attributes(&self) -> bool {
        self.contains(NodeCategory::Attribute)
    }

    /// Whether a visited node of `category` is itself emitted.
    pub const fn admits(&self, category: NodeCategory) -> bool {
        if self.is_unfiltered() {
            !matches!(category, NodeCategory::Attribute)
        } else {
            self.contains(category)
        }
    }

    pub fn categories(self) -> impl Iterator<Item = NodeCategory> {
        NodeCategory::ALL
            .into_iter()
            .filter(move |category| self.contains(*category))
    }
}

impl FromIterator<NodeCategory> for CategoryFilter {
    fn from_iter<I: IntoIterator<Item = NodeCategory>>(iter: I) -> Self {
        iter.into_iter().fold(Self::all(), Self::with)
    }
}

impl From<NodeCategory> for CategoryFilter {
    fn from(category: NodeCategory) -> Self {
        Self::all().with(category)
    }
}

impl From<&[NodeCategory]> for CategoryFilter {
    fn from(categories: &[NodeCategory]) -> Self {
        categories.iter().copied().collect()
    }
}

impl<const N: usize> From<[NodeCategory; N]> for CategoryFilter {
    fn from(categories: [NodeCategory; N]) -> Self {
        categories.into_iter().collect()
    }
}

impl fmt::Debug for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unfiltered() {
            return f.write_str("CategoryFilter(all)");
        }
        f.debug_set().entries(self.categories()).finish()
    }
}
