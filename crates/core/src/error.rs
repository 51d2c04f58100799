// src/error.rs
//! Defines the unified error type for selection operations.

use crate::executor::ExecutorError;
use grovepath_template::TemplateError;
use thiserror::Error;

/// The main error enum for all high-level operations.
#[derive(Error, Debug)]
pub enum GrovepathError {
    #[error("Query template error: {0}")]
    Template(#[from] TemplateError),
    #[error("Query execution error: {0}")]
    Executor(#[from] ExecutorError),
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}
