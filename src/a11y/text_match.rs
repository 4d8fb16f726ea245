use std::fmt;

use regex::{Regex, RegexBuilder};

use super::error::{QueryError, QueryResult};
use super::role::normalize_whitespace;

/// How a query compares text against an element's name or content.
#[derive(Debug, Clone)]
pub enum TextMatch {
    /// Equal after whitespace normalization.
    Exact(String),
    /// Case-insensitive regex, like a `/pattern/i` literal.
    Pattern(Regex),
}

impl TextMatch {
    pub fn exact(text: impl Into<String>) -> Self {
        TextMatch::Exact(text.into())
    }

    /// Compile `source` as a case-insensitive regex.
    pub fn pattern(source: &str) -> QueryResult<Self> {
        RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map(TextMatch::Pattern)
            .map_err(|err| QueryError::InvalidPattern {
                pattern: source.to_string(),
                message: err.to_string(),
            })
    }

    pub fn matches(&self, candidate: &str) -> bool {
        let candidate = normalize_whitespace(candidate);
        match self {
            TextMatch::Exact(text) => candidate == normalize_whitespace(text),
            TextMatch::Pattern(regex) => regex.is_match(&candidate),
        }
    }
}

impl PartialEq for TextMatch {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TextMatch::Exact(a), TextMatch::Exact(b)) => a == b,
            (TextMatch::Pattern(a), TextMatch::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl Eq for TextMatch {}

impl From<&str> for TextMatch {
    fn from(text: &str) -> Self {
        TextMatch::exact(text)
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextMatch::Exact(text) => write!(f, "\"{}\"", text),
            TextMatch::Pattern(regex) => write!(f, "/{}/i", regex.as_str()),
        }
    }
}
