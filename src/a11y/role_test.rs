use crate::a11y::*;
use crate::dom::{Element, Node, parse};

fn element(html: &str) -> Element {
    match parse(html).unwrap().children.into_iter().next() {
        Some(Node::Element(element)) => element,
        other => panic!("expected an element, got {:?}", other),
    }
}

#[test]
fn test_implicit_roles() {
    assert_eq!(Role::of(&element("<main></main>")), Some(Role::Main));
    assert_eq!(Role::of(&element("<h3>x</h3>")), Some(Role::Heading));
    assert_eq!(Role::of(&element("<a href=\"/\">x</a>")), Some(Role::Link));
    assert_eq!(Role::of(&element("<nav></nav>")), Some(Role::Navigation));
    assert_eq!(Role::of(&element("<footer></footer>")), Some(Role::ContentInfo));
    assert_eq!(Role::of(&element("<div></div>")), None);
}

#[test]
fn test_anchor_without_href_is_not_a_link() {
    assert_eq!(Role::of(&element("<a name=\"top\">x</a>")), None);
}

#[test]
fn test_explicit_role_overrides_implicit() {
    assert_eq!(
        Role::of(&element("<div role=\"main\"></div>")),
        Some(Role::Main)
    );
    assert_eq!(
        Role::of(&element("<a href=\"/\" role=\"bogus button\">x</a>")),
        Some(Role::Button)
    );
    // unknown explicit roles fall back to the tag
    assert_eq!(
        Role::of(&element("<h2 role=\"bogus\">x</h2>")),
        Some(Role::Heading)
    );
}

#[test]
fn test_heading_level() {
    assert_eq!(heading_level(&element("<h1>x</h1>")), Some(1));
    assert_eq!(heading_level(&element("<h6>x</h6>")), Some(6));
    assert_eq!(
        heading_level(&element("<div role=\"heading\" aria-level=\"4\">x</div>")),
        Some(4)
    );
    assert_eq!(heading_level(&element("<header></header>")), None);
}

#[test]
fn test_heading_level_ignores_out_of_range_aria_level() {
    assert_eq!(heading_level(&element("<h2 aria-level=\"0\">x</h2>")), Some(2));
    assert_eq!(heading_level(&element("<h3 aria-level=\"7\">x</h3>")), Some(3));
    assert_eq!(
        heading_level(&element("<div role=\"heading\" aria-level=\"0\">x</div>")),
        None
    );
}

#[test]
fn test_name_from_content_roles() {
    assert!(Role::Link.name_from_content());
    assert!(Role::Heading.name_from_content());
    assert!(Role::Button.name_from_content());
    assert!(Role::ListItem.name_from_content());
    assert!(!Role::Main.name_from_content());
    assert!(!Role::Paragraph.name_from_content());
    assert!(!Role::Banner.name_from_content());
}

#[test]
fn test_author_named_roles_ignore_content() {
    assert_eq!(accessible_name(&element("<p>hello</p>")), "");
    assert_eq!(accessible_name(&element("<main><h1>Title</h1></main>")), "");
    assert_eq!(accessible_name(&element("<ul><li>one</li></ul>")), "");
    assert_eq!(
        accessible_name(&element("<main aria-label=\"Landing\"><h1>Title</h1></main>")),
        "Landing"
    );
    assert_eq!(accessible_name(&element("<span>loose</span>")), "");
}

#[test]
fn test_accessible_name_skips_hidden_descendants() {
    let link = element("<a href=\"/login\">Log in <span aria-hidden=\"true\">→</span></a>");
    assert_eq!(accessible_name(&link), "Log in");
}

#[test]
fn test_accessible_name_prefers_aria_label() {
    let link = element("<a href=\"/\" aria-label=\"  Go   home \">⌂</a>");
    assert_eq!(accessible_name(&link), "Go home");

    let blank_label = element("<a href=\"/\" aria-label=\" \">Home</a>");
    assert_eq!(accessible_name(&blank_label), "Home");
}

#[test]
fn test_accessible_name_normalizes_whitespace() {
    let heading = element("<h1>\n    AI Tutor\n    Platform\n</h1>");
    assert_eq!(accessible_name(&heading), "AI Tutor Platform");
}

#[test]
fn test_is_hidden() {
    assert!(is_hidden(&element("<span aria-hidden=\"true\"></span>")));
    assert!(is_hidden(&element("<div hidden></div>")));
    assert!(!is_hidden(&element("<span aria-hidden=\"false\"></span>")));
}

#[test]
fn test_role_display_round_trips_through_parse() {
    assert_eq!(Role::ContentInfo.to_string(), "contentinfo");
    assert_eq!(Role::parse("LINK"), Some(Role::Link));
    assert_eq!(Role::parse("spinbutton"), None);
}
