//! Accessibility queries over rendered markup.
//!
//! Elements are found the way assistive technology sees them: by ARIA role
//! and accessible name, or by visible text. Anything under `aria-hidden`
//! or `hidden` is invisible to every query.

mod error;
mod role;
#[cfg(test)]
mod role_test;
mod screen;
mod text_match;

pub use error::{QueryError, QueryResult};
pub use role::{Role, accessible_name, heading_level, is_hidden, normalize_whitespace};
pub use screen::{AccessibleNode, Screen};
pub use text_match::TextMatch;
