use std::fmt;

use crate::dom::{Element, Node};

/// ARIA roles the queries understand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Banner,
    Button,
    ContentInfo,
    Heading,
    Link,
    List,
    ListItem,
    Main,
    Navigation,
    Paragraph,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Banner => "banner",
            Role::Button => "button",
            Role::ContentInfo => "contentinfo",
            Role::Heading => "heading",
            Role::Link => "link",
            Role::List => "list",
            Role::ListItem => "listitem",
            Role::Main => "main",
            Role::Navigation => "navigation",
            Role::Paragraph => "paragraph",
        }
    }

    /// Parse a single role token as written in a `role` attribute.
    pub fn parse(token: &str) -> Option<Role> {
        let role = match token.to_ascii_lowercase().as_str() {
            "banner" => Role::Banner,
            "button" => Role::Button,
            "contentinfo" => Role::ContentInfo,
            "heading" => Role::Heading,
            "link" => Role::Link,
            "list" => Role::List,
            "listitem" => Role::ListItem,
            "main" => Role::Main,
            "navigation" => Role::Navigation,
            "paragraph" => Role::Paragraph,
            _ => return None,
        };
        Some(role)
    }

    /// Whether the role takes its name from descendant text.
    pub fn name_from_content(&self) -> bool {
        matches!(
            self,
            Role::Button | Role::Heading | Role::Link | Role::ListItem
        )
    }

    /// Role implied by the element's tag and attributes.
    pub fn implicit(element: &Element) -> Option<Role> {
        let role = match element.tag.as_str() {
            "main" => Role::Main,
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => Role::Heading,
            "a" if element.attribute("href").is_some() => Role::Link,
            "nav" => Role::Navigation,
            "button" => Role::Button,
            "ul" | "ol" => Role::List,
            "li" => Role::ListItem,
            "header" => Role::Banner,
            "footer" => Role::ContentInfo,
            "p" => Role::Paragraph,
            _ => return None,
        };
        Some(role)
    }

    /// Effective role: the first recognised token of an explicit `role`
    /// attribute, falling back to the implicit role.
    pub fn of(element: &Element) -> Option<Role> {
        match element.attribute("role") {
            Some(explicit) => explicit
                .split_whitespace()
                .find_map(Role::parse)
                .or_else(|| Role::implicit(element)),
            None => Role::implicit(element),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the element removes itself and its subtree from the
/// accessibility tree.
pub fn is_hidden(element: &Element) -> bool {
    element.has_attribute("aria-hidden", "true") || element.attribute("hidden").is_some()
}

/// Heading level from `aria-level` or the `h1`..`h6` tag. Levels outside
/// 1..=6 are ignored.
pub fn heading_level(element: &Element) -> Option<u8> {
    let valid = |n: &u8| (1..=6).contains(n);
    element
        .attribute("aria-level")
        .and_then(|l| l.trim().parse().ok())
        .filter(valid)
        .or_else(|| {
            element
                .tag
                .strip_prefix('h')
                .and_then(|n| n.parse().ok())
                .filter(valid)
        })
}

/// Accessible name: `aria-label` when set, otherwise the visible text of
/// the subtree with hidden descendants left out. Roles that are only named
/// by the author get an empty name without `aria-label`.
pub fn accessible_name(element: &Element) -> String {
    if let Some(label) = element.attribute("aria-label") {
        let label = normalize_whitespace(label);
        if !label.is_empty() {
            return label;
        }
    }

    if !Role::of(element).is_some_and(|role| role.name_from_content()) {
        return String::new();
    }

    let mut text = String::new();
    visible_text(&element.children, &mut text);
    normalize_whitespace(&text)
}

fn visible_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) if !is_hidden(element) => visible_text(&element.children, out),
            Node::Element(_) => {}
        }
    }
}

/// Collapse whitespace runs to single spaces and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
