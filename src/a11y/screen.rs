use tracing::debug;

use super::error::{QueryError, QueryResult};
use super::role::{Role, accessible_name, is_hidden};
use super::text_match::TextMatch;
use crate::dom::{self, Document, Element, Node, ParseError};

/// One entry of the accessibility tree: an element that exposes a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibleNode {
    pub role: Role,
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

/// A rendered document plus the queries tests run against it.
#[derive(Debug, Clone)]
pub struct Screen {
    html: String,
    document: Document,
}

impl Screen {
    pub fn from_html(html: impl Into<String>) -> Result<Self, ParseError> {
        let html = html.into();
        let document = dom::parse(&html)?;
        Ok(Self { html, document })
    }

    /// The markup the screen was parsed from.
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// All elements with `role`, regardless of name.
    pub fn query_all_by_role(&self, role: Role) -> Vec<&Element> {
        self.visible_elements()
            .into_iter()
            .filter(|element| Role::of(element) == Some(role))
            .collect()
    }

    /// All elements with `role` whose accessible name matches `name`.
    pub fn query_all_by_role_named(&self, role: Role, name: &TextMatch) -> Vec<&Element> {
        self.query_all_by_role(role)
            .into_iter()
            .filter(|element| name.matches(&accessible_name(element)))
            .collect()
    }

    /// All elements whose own text matches `text`.
    pub fn query_all_by_text(&self, text: &TextMatch) -> Vec<&Element> {
        self.visible_elements()
            .into_iter()
            .filter(|element| {
                let own = element.own_text();
                !own.trim().is_empty() && text.matches(&own)
            })
            .collect()
    }

    /// The single element with `role`.
    pub fn get_by_role(&self, role: Role) -> QueryResult<&Element> {
        exactly_one(self.query_all_by_role(role), || format!("role \"{}\"", role))
    }

    /// The single element with `role` and a matching accessible name.
    pub fn get_by_role_named(&self, role: Role, name: &TextMatch) -> QueryResult<&Element> {
        exactly_one(self.query_all_by_role_named(role, name), || {
            format!("role \"{}\" and name {}", role, name)
        })
    }

    /// The single element whose own text matches `text`.
    pub fn get_by_text(&self, text: &TextMatch) -> QueryResult<&Element> {
        exactly_one(self.query_all_by_text(text), || format!("text {}", text))
    }

    /// Flattened accessibility tree in document order.
    pub fn accessibility_tree(&self) -> Vec<AccessibleNode> {
        self.visible_elements()
            .into_iter()
            .filter_map(|element| {
                Role::of(element).map(|role| AccessibleNode {
                    role,
                    name: accessible_name(element),
                    attributes: element.attributes.clone(),
                })
            })
            .collect()
    }

    fn visible_elements(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        for node in &self.document.children {
            collect_visible(node, &mut out);
        }
        out
    }
}

fn collect_visible<'a>(node: &'a Node, out: &mut Vec<&'a Element>) {
    if let Node::Element(element) = node {
        if is_hidden(element) {
            return;
        }
        out.push(element);
        for child in &element.children {
            collect_visible(child, out);
        }
    }
}

fn exactly_one<'a>(
    mut matches: Vec<&'a Element>,
    target: impl FnOnce() -> String,
) -> QueryResult<&'a Element> {
    match matches.len() {
        1 => Ok(matches.remove(0)),
        0 => {
            let target = target();
            debug!(%target, "query matched nothing");
            Err(QueryError::NotFound { target })
        }
        count => {
            let target = target();
            debug!(%target, count, "query matched more than one element");
            Err(QueryError::MultipleFound { target, count })
        }
    }
}
