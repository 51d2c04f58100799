//! The contract for whatever evaluates a concrete query against a tree.

use grovepath_types::DocumentNode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutorError {
    #[error("Invalid query '{query}': {message}")]
    InvalidQuery { query: String, message: String },
    #[error("Unsupported query feature: {0}")]
    Unsupported(String),
}

/// Evaluates a fully substituted query relative to a context node.
///
/// Implementations return the matching nodes in the order their query
/// language defines (document order for XPath node-sets).
pub trait QueryExecutor<'a, N: DocumentNode<'a>> {
    fn select_nodes(&self, context: N, query: &str) -> Result<Vec<N>, ExecutorError>;
}

impl<'a, N, F> QueryExecutor<'a, N> for F
where
    N: DocumentNode<'a>,
    F: Fn(N, &str) -> Result<Vec<N>, ExecutorError>,
{
    fn select_nodes(&self, context: N, query: &str) -> Result<Vec<N>, ExecutorError> {
        self(context, query)
    }
}
