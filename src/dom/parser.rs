//! Tokenizer for the well-formed HTML produced by server-side rendering.
//!
//! Handles:
//! - elements with quoted, unquoted and boolean attributes
//! - void and self-closing elements
//! - comments, doctypes and Leptos `<!>` hydration markers (skipped)
//! - named and numeric character references

use tracing::trace;

use super::{Document, Element, Node, ParseError};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Parse an HTML fragment into a [`Document`].
pub fn parse(html: &str) -> Result<Document, ParseError> {
    let mut parser = Parser { input: html, pos: 0 };
    let mut stack: Vec<Element> = Vec::new();
    let mut document = Document::default();

    while !parser.at_end() {
        let rest = parser.rest();
        if let Some(body) = rest.strip_prefix("<!--") {
            let end = body.find("-->").ok_or(ParseError::UnexpectedEof {
                context: "comment",
                offset: parser.pos,
            })?;
            parser.pos += 4 + end + 3;
        } else if rest.starts_with("<!") {
            let end = rest.find('>').ok_or(ParseError::UnexpectedEof {
                context: "markup declaration",
                offset: parser.pos,
            })?;
            parser.pos += end + 1;
        } else if rest.starts_with("</") {
            let offset = parser.pos;
            let end = rest.find('>').ok_or(ParseError::UnexpectedEof {
                context: "closing tag",
                offset,
            })?;
            let tag = rest[2..end].trim().to_ascii_lowercase();
            parser.pos += end + 1;

            let open = stack
                .pop()
                .ok_or_else(|| ParseError::UnexpectedClosingTag {
                    tag: tag.clone(),
                    offset,
                })?;
            if open.tag != tag {
                return Err(ParseError::MismatchedTag {
                    expected: open.tag,
                    found: tag,
                    offset,
                });
            }
            trace!(tag = %open.tag, "closed element");
            append(&mut stack, &mut document, Node::Element(open));
        } else if rest.starts_with('<') {
            let (element, self_closing) = parser.open_tag()?;
            if self_closing || VOID_ELEMENTS.contains(&element.tag.as_str()) {
                append(&mut stack, &mut document, Node::Element(element));
            } else {
                trace!(tag = %element.tag, "opened element");
                stack.push(element);
            }
        } else {
            let end = rest.find('<').unwrap_or(rest.len());
            let text = decode_entities(&rest[..end]);
            parser.pos += end;
            append(&mut stack, &mut document, Node::Text(text));
        }
    }

    match stack.pop() {
        Some(open) => Err(ParseError::UnclosedTag { tag: open.tag }),
        None => Ok(document),
    }
}

fn append(stack: &mut [Element], document: &mut Document, node: Node) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => document.children.push(node),
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let end = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += end;
        &rest[..end]
    }

    fn skip_whitespace(&mut self) {
        self.take_while(char::is_whitespace);
    }

    fn eof(&self, context: &'static str) -> ParseError {
        ParseError::UnexpectedEof {
            context,
            offset: self.pos,
        }
    }

    /// Reads `<tag attr="value" ...>` starting at `<`. Returns the element and
    /// whether it was written as self-closing.
    fn open_tag(&mut self) -> Result<(Element, bool), ParseError> {
        let offset = self.pos;
        self.pos += 1;

        let tag = self.take_while(|c| c.is_ascii_alphanumeric() || c == '-');
        if tag.is_empty() {
            return Err(ParseError::InvalidTag { offset });
        }
        let mut element = Element::new(tag.to_ascii_lowercase());

        loop {
            self.skip_whitespace();
            let rest = self.rest();
            if rest.is_empty() {
                return Err(self.eof("opening tag"));
            }
            if rest.starts_with("/>") {
                self.pos += 2;
                return Ok((element, true));
            }
            if rest.starts_with('>') {
                self.pos += 1;
                return Ok((element, false));
            }

            let name = self.take_while(|c| !c.is_whitespace() && !matches!(c, '=' | '>' | '/'));
            if name.is_empty() {
                // stray '/' inside the tag
                self.pos += 1;
                continue;
            }
            let name = name.to_ascii_lowercase();

            self.skip_whitespace();
            let value = if self.peek() == Some('=') {
                self.pos += 1;
                self.skip_whitespace();
                self.attribute_value()?
            } else {
                String::new()
            };
            element.attributes.push((name, value));
        }
    }

    fn attribute_value(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.pos += 1;
                let rest = self.rest();
                let end = rest.find(quote).ok_or_else(|| self.eof("attribute value"))?;
                self.pos += end + 1;
                Ok(decode_entities(&rest[..end]))
            }
            Some(_) => {
                let raw = self.take_while(|c| !c.is_whitespace() && c != '>');
                Ok(decode_entities(raw))
            }
            None => Err(self.eof("attribute value")),
        }
    }
}

/// Replace character references with the characters they stand for.
/// Unknown references are kept verbatim.
pub(crate) fn decode_entities(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];

        let decoded = rest
            .find(';')
            .and_then(|semi| decode_reference(&rest[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &rest[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn is_digits(s: &str, radix: u32) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_digit(radix))
}

fn decode_reference(name: &str) -> Option<char> {
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) if is_digits(hex, 16) => u64::from_str_radix(hex, 16).unwrap_or(u64::MAX),
            None if is_digits(number, 10) => number.parse().unwrap_or(u64::MAX),
            _ => return None,
        };
        // NUL, surrogates and out-of-range code points become U+FFFD
        return Some(
            u32::try_from(code)
                .ok()
                .and_then(char::from_u32)
                .filter(|c| *c != '\0')
                .unwrap_or('\u{fffd}'),
        );
    }

    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        "rarr" => Some('→'),
        "larr" => Some('←'),
        _ => None,
    }
}
