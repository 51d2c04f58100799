use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error(
        "Query template has {required} placeholder(s) but only {supplied} argument(s) were supplied"
    )]
    ArgumentError { required: usize, supplied: usize },

    #[error("Invalid placeholder sigil {0:?}: must not be a quote, whitespace or alphanumeric")]
    InvalidSigil(char),
}
