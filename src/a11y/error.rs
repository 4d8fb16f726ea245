use miette::Diagnostic;
use thiserror::Error;

/// A role or text query that did not match exactly one element.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unable to find an element with {target}")]
    #[diagnostic(
        code(ai_tutor::a11y::not_found),
        help("Elements inside aria-hidden or hidden subtrees are not queryable")
    )]
    NotFound { target: String },

    #[error("Found {count} elements with {target}, expected exactly one")]
    #[diagnostic(
        code(ai_tutor::a11y::multiple_found),
        help("Narrow the query with an accessible name, or use a query_all_* variant")
    )]
    MultipleFound { target: String, count: usize },

    #[error("Invalid text pattern /{pattern}/i: {message}")]
    #[diagnostic(code(ai_tutor::a11y::invalid_pattern))]
    InvalidPattern { pattern: String, message: String },
}

pub type QueryResult<T> = Result<T, QueryError>;
