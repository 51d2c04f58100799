//! # grovepath-core
//!
//! Integration layer: turns a query template plus arguments into a concrete
//! query and hands it to a [`QueryExecutor`] supplied by the tree's owner.
//!
//! This crate evaluates no query language itself. Any engine that can answer
//! "which nodes does this query select from this context node" plugs in by
//! implementing [`QueryExecutor`], or by being a plain function of that shape.

// Re-export foundation and algorithm crates
pub use grovepath_template as template;
pub use grovepath_types as types;

pub mod config;
pub mod error;
pub mod executor;
pub mod selector;

pub use config::SelectorConfig;
pub use error::GrovepathError;
pub use executor::{ExecutorError, QueryExecutor};
pub use selector::Selector;
