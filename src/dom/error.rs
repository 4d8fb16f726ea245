//! HTML parse errors.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while turning rendered HTML into a [`Document`](super::Document).
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unexpected end of input while reading {context} at byte {offset}")]
    #[diagnostic(code(ai_tutor::dom::unexpected_eof))]
    UnexpectedEof { context: &'static str, offset: usize },

    #[error("Mismatched closing tag: expected </{expected}>, found </{found}> at byte {offset}")]
    #[diagnostic(code(ai_tutor::dom::mismatched_tag))]
    MismatchedTag {
        expected: String,
        found: String,
        offset: usize,
    },

    #[error("Closing tag </{tag}> at byte {offset} has no matching opening tag")]
    #[diagnostic(code(ai_tutor::dom::unexpected_closing_tag))]
    UnexpectedClosingTag { tag: String, offset: usize },

    #[error("Element <{tag}> was never closed")]
    #[diagnostic(
        code(ai_tutor::dom::unclosed_tag),
        help("Every non-void element needs a matching closing tag")
    )]
    UnclosedTag { tag: String },

    #[error("Invalid tag at byte {offset}")]
    #[diagnostic(code(ai_tutor::dom::invalid_tag))]
    InvalidTag { offset: usize },
}
