#![allow(clippy::panic_in_result_fn)]
#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::indexing_slicing)]

use lexparse::json::{Config, Parser};
use lexparse::{parse_array, parse_value, ErrorKind, Object, Value, Whitespace};

fn object(entries: Vec<(&str, Value)>) -> Value {
    Value::Object(
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect::<Object>(),
    )
}

fn strings(items: &[&str]) -> Value {
    items.iter().map(|s| Value::from(*s)).collect::<Vec<_>>().into()
}

#[test]
fn test_parse_simple_object() -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_value(r#"{"name": "Alice", "age": 30, "active": true, "bio": null}"#)?;
    let expected = object(vec![
        ("name", Value::from("Alice")),
        ("age", Value::Integer(30)),
        ("active", Value::Bool(true)),
        ("bio", Value::Null),
    ]);
    assert_eq!(value, expected);
    Ok(())
}

#[test]
fn test_parse_nested_object() -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_value(r#"{"user": {"name": "Alice", "age": 30}}"#)?;
    let expected = object(vec![(
        "user",
        object(vec![("name", Value::from("Alice")), ("age", Value::Integer(30))]),
    )]);
    assert_eq!(value, expected);
    Ok(())
}

#[test]
fn test_parse_array_value() -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_value(r#"{"tags": ["python", "json", "parser"]}"#)?;
    assert_eq!(value, object(vec![("tags", strings(&["python", "json", "parser"]))]));
    Ok(())
}

#[test]
fn test_parse_nested_object_with_array() -> Result<(), Box<dyn std::error::Error>> {
    let input = r#"
    {
        "user": {
            "name": "Alice",
            "languages": ["Python", "JavaScript"]
        },
        "active": true
    }
    "#;
    let value = parse_value(input)?;
    let expected = object(vec![
        (
            "user",
            object(vec![
                ("name", Value::from("Alice")),
                ("languages", strings(&["Python", "JavaScript"])),
            ]),
        ),
        ("active", Value::Bool(true)),
    ]);
    assert_eq!(value, expected);
    Ok(())
}

#[test]
fn test_key_order_is_preserved() -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_value(r#"{"z": 1, "a": 2, "m": 3}"#)?;
    let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
    Ok(())
}

#[test]
fn test_duplicate_key_last_write_wins() -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_value(r#"{"a": 1, "b": 2, "a": 3}"#)?;
    assert_eq!(
        value,
        object(vec![("a", Value::Integer(3)), ("b", Value::Integer(2))])
    );
    Ok(())
}

#[test]
fn test_literals_are_case_insensitive() -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_value(r#"{"a": True, "b": FALSE, "c": Null, "d": nil}"#)?;
    assert_eq!(value["a"], Value::Bool(true));
    assert_eq!(value["b"], Value::Bool(false));
    assert_eq!(value["c"], Value::Null);
    assert_eq!(value["d"], Value::from("nil"));
    Ok(())
}

#[test]
fn test_unquoted_keys_and_values_are_accepted() -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_value("{name: Alice, count: 2}")?;
    assert_eq!(
        value,
        object(vec![("name", Value::from("Alice")), ("count", Value::Integer(2))])
    );
    Ok(())
}

#[test]
fn test_unbalanced_quotes_are_tolerated() -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_value(r#"{"name: "Alice"", "age: 30}"#)?;
    assert_eq!(
        value,
        object(vec![("name", Value::from("Alice")), ("age", Value::Integer(30))])
    );
    Ok(())
}

#[test]
fn test_numbers_are_unsigned_integers() -> Result<(), Box<dyn std::error::Error>> {
    // "-" becomes a string value, then "5" is left as a dangling key
    let value = parse_value(r#"{"n": -5}"#)?;
    assert_eq!(value, object(vec![("n", Value::from("-"))]));

    // "3" is the value, "." the next key and "14" its value
    let value = parse_value(r#"{"pi": 3.14}"#)?;
    assert_eq!(
        value,
        object(vec![("pi", Value::Integer(3)), (".", Value::Integer(14))])
    );
    Ok(())
}

#[test]
fn test_truncated_input_closes_silently() -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_value(r#"{"user": {"name": "Alice", "tags": ["x""#)?;
    assert_eq!(value["user"]["name"], Value::from("Alice"));
    assert_eq!(value["user"]["tags"], strings(&["x"]));
    Ok(())
}

#[test]
fn test_trailing_content_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_value(r#"{"a": 1} {"b": 2}"#)?;
    assert_eq!(value, object(vec![("a", Value::Integer(1))]));
    Ok(())
}

#[test]
fn test_missing_root_object() {
    for input in ["", "   ", "[1, 2]", "42", r#""text""#, "x {}"] {
        let err = parse_value(input).unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::MissingRootObject, "input {input:?}");
    }
}

#[test]
fn test_missing_root_array() {
    let err = parse_array(r#"{"a": 1}"#).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MissingRootArray);
    assert!(err.to_string().contains("missing root array"));
}

#[test]
fn test_parse_root_array() -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_array(r#"["a", 1, {"k": null}, []]"#)?;
    let expected: Value = vec![
        Value::from("a"),
        Value::Integer(1),
        object(vec![("k", Value::Null)]),
        Value::Array(Default::default()),
    ]
    .into();
    assert_eq!(value, expected);
    Ok(())
}

#[test]
fn test_significant_whitespace_matches_skip() -> Result<(), Box<dyn std::error::Error>> {
    let input = "\n\t{ \"user\" : { \"age\" : 30 } ,\n \"tags\" : [ \"a\" , \"b\" ] }\n";
    let skipped = parse_value(input)?;
    let config = Config::default().with_whitespace(Whitespace::Significant);
    let significant = Parser::with_config(input, config).parse()?;
    assert_eq!(skipped, significant);
    Ok(())
}

#[test]
fn test_depth_limit() {
    let deep = format!("{}{}", "{a:".repeat(200), "}".repeat(200));
    let err = parse_value(&deep).unwrap_err();
    assert_eq!(err.kind(), &ErrorKind::MaxDepthExceeded { max: 128 });

    let shallow = format!("{}1{}", "{a:".repeat(100), "}".repeat(100));
    assert!(parse_value(&shallow).is_ok());
}

#[test]
fn test_fresh_parsers_are_independent() -> Result<(), Box<dyn std::error::Error>> {
    let input = r#"{"user": {"name": "Alice"}, "tags": [1, 2]}"#;
    let first = parse_value(input)?;
    let second = Parser::new(input).parse()?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_display_renders_json() -> Result<(), Box<dyn std::error::Error>> {
    let value = parse_value(r#"{"name": "Alice", "tags": ["x", 1, true, null]}"#)?;
    assert_eq!(value.to_string(), r#"{"name":"Alice","tags":["x",1,true,null]}"#);
    Ok(())
}
