//! The document-order traversal engine.
//!
//! The walk is driven by an explicit stack of frames rather than native
//! recursion, so trees of any depth can be enumerated without growing the call
//! stack.

use crate::filter::CategoryFilter;
use grovepath_types::{DocumentNode, NodeCategory};
use std::iter::FusedIterator;

type NodeIter<'a, N> = Box<dyn Iterator<Item = N> + 'a>;

/// A node whose children are still being walked. `pending` is the cursor into
/// the node's child sequence; it only ever moves forward.
struct Frame<'a, N> {
    node: N,
    pending: NodeIter<'a, N>,
}

/// A lazy, single-pass iterator over a subtree in document order.
///
/// Every node is yielded after all of its descendants, left to right. Created
/// by [`traverse`] or [`TraverseExt::traverse`].
///
/// The tree must not be structurally modified while a traversal over it is in
/// progress. The engine holds child cursors into the tree, and what an
/// adapter's cursors do under mutation is outside this crate's control.
pub struct Traversal<'a, N: DocumentNode<'a>> {
    frames: Vec<Frame<'a, N>>,
    current: Option<N>,
    attributes: Option<NodeIter<'a, N>>,
    filter: CategoryFilter,
}

impl<'a, N: DocumentNode<'a>> Traversal<'a, N> {
    fn new(root: Option<N>, filter: CategoryFilter) -> Self {
        let start = root.and_then(|node| match node.category() {
            NodeCategory::Document => node.document_element(),
            _ => Some(node),
        });
        if let Some(node) = &start {
            log::trace!(
                "Starting traversal at {:?} node {:?} with filter {:?}",
                node.category(),
                node.name(),
                filter
            );
        }
        Self {
            frames: Vec::new(),
            current: start,
            attributes: None,
            filter,
        }
    }

    /// The filter this traversal was created with.
    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Number of ancestors of the node currently being walked. Zero once the
    /// traversal is exhausted.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Applies the emission rule to a node whose subtree is fully walked.
    /// Returns the node itself if it passes the filter; queues its attributes
    /// when they were requested.
    fn visit(&mut self, node: N) -> Option<N> {
        let category = node.category();
        if category == NodeCategory::Element && self.filter.emits_attributes() {
            self.attributes = Some(node.attributes());
        }
        self.filter.admits(category).then_some(node)
    }
}

impl<'a, N: DocumentNode<'a>> Iterator for Traversal<'a, N> {
    type Item = N;

    fn next(&mut self) -> Option<N> {
        loop {
            // Attributes of the element visited last go out before the walk resumes.
            if let Some(attributes) = self.attributes.as_mut() {
                match attributes.next() {
                    Some(attribute) => return Some(attribute),
                    None => self.attributes = None,
                }
            }

            // Descend: the current node becomes a frame and its first child is sought.
            if let Some(node) = self.current.take() {
                self.frames.push(Frame {
                    pending: node.children(),
                    node,
                });
                continue;
            }

            let frame = self.frames.last_mut()?;
            if let Some(child) = frame.pending.next() {
                self.current = Some(child);
                continue;
            }

            // No children left: the node is fully visited. Popping hands control
            // back to the parent frame, whose cursor is already past this node.
            let Frame { node, .. } = self.frames.pop()?;
            if let Some(emitted) = self.visit(node) {
                return Some(emitted);
            }
        }
    }
}

impl<'a, N: DocumentNode<'a>> FusedIterator for Traversal<'a, N> {}

/// Walks the subtree under `root` in document order, emitting the nodes the
/// filter admits.
///
/// - A document root is entered at its document element, never emitted itself.
/// - An absent root yields nothing.
/// - An unfiltered traversal never emits attributes; a filter containing
///   [`NodeCategory::Attribute`] emits each visited element's attributes right
///   after the element's own slot.
///
/// Mutating the tree while the returned iterator is alive is a caller error
/// with unspecified results.
pub fn traverse<'a, N: DocumentNode<'a>>(
    root: Option<N>,
    filter: impl Into<CategoryFilter>,
) -> Traversal<'a, N> {
    Traversal::new(root, filter.into())
}

/// Traversal entry points available on every [`DocumentNode`].
pub trait TraverseExt<'a>: DocumentNode<'a> {
    fn traverse(self, filter: impl Into<CategoryFilter>) -> Traversal<'a, Self> {
        traverse(Some(self), filter)
    }

    /// Unfiltered traversal: every node of the subtree except attributes.
    fn descendants(self) -> Traversal<'a, Self> {
        traverse(Some(self), CategoryFilter::all())
    }
}

impl<'a, N: DocumentNode<'a>> TraverseExt<'a> for N {}

/// The direct element children of `node`, optionally restricted to a local name.
pub fn child_elements<'a, 'n, N: DocumentNode<'a>>(
    node: Option<N>,
    local_name: Option<&'n str>,
) -> impl Iterator<Item = N> {
    node.into_iter()
        .flat_map(|node| node.children())
        .filter(move |child| {
            child.category() == NodeCategory::Element
                && local_name.is_none_or(|name| child.has_local_name(name))
        })
}
