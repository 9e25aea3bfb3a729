use std::collections::HashSet;

use crate::HtmlTag;

#[test]
fn lookup_is_case_insensitive() {
    assert_eq!(HtmlTag::from_name("div"), Some(HtmlTag::Div));
    assert_eq!(HtmlTag::from_name("DIV"), Some(HtmlTag::Div));
    assert_eq!(HtmlTag::from_name("Span"), Some(HtmlTag::Span));
    assert_eq!(HtmlTag::from_name("h1"), Some(HtmlTag::Heading1));
}

#[test]
fn unknown_names_are_rejected() {
    assert_eq!(HtmlTag::from_name("mod"), None);
    assert_eq!(HtmlTag::from_name(""), None);
    assert_eq!(HtmlTag::from_name("div "), None);
    assert_eq!(HtmlTag::from_name("br/"), None);
    assert!(!HtmlTag::is_tag_name("select"));
}

#[test]
fn every_name_round_trips() {
    for &tag in HtmlTag::ALL {
        assert_eq!(HtmlTag::from_name(tag.name()), Some(tag));
        assert_eq!(tag.name(), tag.name().to_ascii_lowercase());
    }
}

#[test]
fn names_are_unique() {
    let names: HashSet<_> = HtmlTag::ALL.iter().map(|t| t.name()).collect();
    assert_eq!(names.len(), HtmlTag::ALL.len());
}

#[test]
fn from_str_reports_unknown_name() {
    let err = "blink".parse::<HtmlTag>().unwrap_err();
    assert_eq!(err.to_string(), "`blink` is not a recognized HTML tag");
    assert_eq!("a".parse::<HtmlTag>(), Ok(HtmlTag::Anchor));
}

#[test]
fn serializes_as_name() {
    let json = serde_json::to_string(&[HtmlTag::Anchor, HtmlTag::Style]).unwrap();
    assert_eq!(json, r#"["a","style"]"#);
}
