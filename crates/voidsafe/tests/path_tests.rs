//! Integration tests for path expressions over decoded JSON payloads

#![cfg(feature = "json")]

use pretty_assertions::assert_eq;
use serde_json::json;
use voidsafe::*;

fn cat_facts() -> Value {
    Value::from(json!({
        "current_page": 1,
        "data": [
            { "fact": "Cats sleep 70% of their lives.", "length": 30 },
            { "fact": "A group of cats is called a clowder.", "length": 36 }
        ],
        "next_page_url": null,
        "links": [
            { "url": null, "label": "Previous", "active": false },
            { "url": "https://catfact.ninja/facts?page=1", "label": "1", "active": true }
        ]
    }))
}

fn follow(root: &Value, src: &str) -> SafeProxy {
    let path: Path = src.parse().unwrap();
    wrap(root).follow(&path)
}

#[test]
fn test_follow_present_values() {
    let facts = cat_facts();
    assert_eq!(follow(&facts, "current_page").value(), Value::Int(1));
    assert_eq!(follow(&facts, r#"data[1]["length"]"#).value(), Value::Int(36));
    assert_eq!(follow(&facts, "data[-1].length").value(), Value::Int(36));
    assert_eq!(
        follow(&facts, "links[1].label").value(),
        Value::from("1")
    );
}

#[test]
fn test_follow_explicit_null_stays_null() {
    let facts = cat_facts();
    assert!(follow(&facts, "next_page_url").value().is_null());
    assert!(follow(&facts, "links[0].url").value().is_null());
}

#[test]
fn test_follow_missing_parts_are_undefined() {
    let facts = cat_facts();
    for src in [
        "last_page",
        "data[5].fact",
        "data[0].source.name",
        "next_page_url.host",
        "links[0].url.upper()",
        r#"_["data"]["0"]"#,
    ] {
        assert!(follow(&facts, src).value().is_undefined(), "{}", src);
    }
}

#[test]
fn test_follow_calls_builtin_methods() {
    let facts = cat_facts();
    assert_eq!(follow(&facts, "data.len()").value(), Value::Int(2));
    assert_eq!(
        follow(&facts, r#"data[0].fact.starts_with("Cats")"#).value(),
        Value::Bool(true)
    );
    assert_eq!(follow(&facts, "links[1].label.upper()").value(), Value::from("1"));
}

#[test]
fn test_coalesce_over_followed_path() {
    let facts = cat_facts();
    let next = follow(&facts, "next_page_url").coalesce(Coalesce::IfVoid, "none left");
    assert_eq!(next, Value::from("none left"));

    let last = follow(&facts, "last_page").coalesce(Coalesce::IfNone, 9i64);
    assert!(last.is_undefined());
}

#[test]
fn test_assign_through_followed_path() {
    let facts = cat_facts();
    let outcome = follow(&facts, "data[0].source")
        .assign(Coalesce::IfNdef, "catfact.ninja")
        .unwrap();
    assert_eq!(outcome, AssignOutcome::Assigned);
    assert_eq!(
        follow(&facts, "data[0].source").value(),
        Value::from("catfact.ninja")
    );

    let json = facts.to_json().unwrap();
    assert_eq!(json["data"][0]["source"], json!("catfact.ninja"));
    assert_eq!(json["data"][1].get("source"), None);
}

#[test]
fn test_builder_path_matches_parsed_path() {
    let built = Path::new().member("data").element(0i64).member("fact");
    let parsed: Path = "data[0].fact".parse().unwrap();
    assert_eq!(built, parsed);
    assert_eq!(built.to_string(), "_.data[0].fact");
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        Path::parse("a + b"),
        Err(VoidSafeError::InvalidPath(_))
    ));
    assert!(matches!(
        Path::parse("a[b]"),
        Err(VoidSafeError::InvalidPath(_))
    ));
    assert!(matches!(Path::parse("a.("), Err(VoidSafeError::Syntax(_))));
    assert!(matches!(
        Path::parse_with("a.b.c.d", &ParseContext::with_max_depth(2)),
        Err(VoidSafeError::PathTooDeep { max: 2 })
    ));
}
