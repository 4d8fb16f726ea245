//! Server-side rendering of views into queryable screens.

use leptos::prelude::*;
use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

use crate::a11y::Screen;
use crate::dom::ParseError;

#[derive(Error, Diagnostic, Debug)]
pub enum RenderError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),
}

/// Render a view to HTML under a fresh reactive owner.
pub fn render_to_string<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| view().into_view().to_html())
}

/// Render a view and parse the result into a [`Screen`].
///
/// Every call builds its own owner and document; nothing is shared between
/// renders.
pub fn render<F, V>(view: F) -> Result<Screen, RenderError>
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let html = render_to_string(view);
    debug!(bytes = html.len(), "rendered view");
    Ok(Screen::from_html(html)?)
}
