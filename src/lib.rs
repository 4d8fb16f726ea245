//! AI Tutor Platform web frontend.
//!
//! - [`pages`]: Leptos page components
//! - [`dom`], [`a11y`]: a parsed DOM and accessibility queries over it
//! - [`render`]: server-side rendering into a queryable [`a11y::Screen`]

pub mod a11y;
pub mod dom;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod render;
