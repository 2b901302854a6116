//! Integration tests for the public formatting API

use std::io::Cursor;

use pretty_assertions::assert_eq;

use statement_formatter::{
    count_matches, count_placeholders, decode_buffer, format, format_with, statement, Charset,
    Formatter, FormatterConfig, NullBytePolicy, Value,
};

fn texts(args: &[&str]) -> Vec<Value> {
    args.iter().map(|a| Value::from(*a)).collect()
}

#[test]
fn test_template_without_placeholders_is_unchanged() {
    let templates = ["", "plain", "select 1", "a\\b", "  spaced  ", "日本語"];
    for template in templates {
        assert_eq!(format(Some(template), &texts(&["a", "b"])), template);
    }
}

#[test]
fn test_absent_template_is_null() {
    assert_eq!(format(None, &[]), "null");
    assert_eq!(format(None, &texts(&["a", "b", "c"])), "null");
}

#[test]
fn test_no_args_is_identity() {
    for template in ["", "?", r"\?", "a ? b ? c", "   "] {
        assert_eq!(format(Some(template), &[]), template);
    }
}

#[test]
fn test_escaping_laws() {
    let args = texts(&["a", "b"]);
    assert_eq!(format(Some("this is ? for ?"), &args), "this is a for b");
    assert_eq!(format(Some("this is \\? for ?"), &args), "this is ? for a");
    assert_eq!(format(Some("this is \\\\? for ?"), &args), "this is \\a for b");
}

#[test]
fn test_substitution_count_invariant() {
    // Values are distinct markers so each consumed argument is visible
    let args = texts(&["<0>", "<1>", "<2>", "<3>"]);
    let cases = [
        ("? ? ?", 3),
        (r"? \? ?", 2),
        (r"\? \? \?", 0),
        (r"\\? ?", 2),
        ("? ? ? ? ? ?", 4),
        ("none", 0),
    ];
    for (template, expected) in cases {
        let out = format(Some(template), &args);
        let consumed = (0..args.len())
            .filter(|i| out.contains(&format!("<{}>", i)))
            .count();
        assert_eq!(consumed, expected, "template {:?} gave {:?}", template, out);
    }
}

#[test]
fn test_arguments_consumed_in_order() {
    let out = format(Some("?,?,?"), &texts(&["1", "2", "3"]));
    assert_eq!(out, "1,2,3");
}

#[test]
fn test_sql_like_statement() {
    let out = format(
        Some("select * from users where note = 'why\\?' and id = ? and name = '?'"),
        &[Value::from(42), Value::from("bob")],
    );
    assert_eq!(
        out,
        "select * from users where note = 'why?' and id = 42 and name = 'bob'"
    );
}

#[test]
fn test_mixed_value_kinds() {
    let mut buffer = Cursor::new(b"..tail".to_vec());
    buffer.set_position(2);
    let args = vec![
        Value::Null,
        Value::from(b"raw".to_vec()),
        Value::Buffer(buffer),
        Value::list(["x", "y"]),
        Value::from(2.5f64),
    ];
    let out = format(Some("? ? ? ? ?"), &args);
    assert_eq!(out, "null raw tail {x,y} 2.5");
}

#[test]
fn test_format_with_custom_token() {
    let out = format_with("insert into t values (:v, :v)", ":v", &texts(&["1", "2"]));
    assert_eq!(out, "insert into t values (1, 2)");
    assert_eq!(count_matches("insert into t values (:v, :v)", ":v"), 2);
}

#[test]
fn test_count_placeholders() {
    assert_eq!(count_placeholders("a?b?c"), 2);
    assert_eq!(count_matches("a?b?c", "$1"), 0);
    assert_eq!(count_placeholders(r"\?\\?"), 2);
}

#[test]
fn test_formatter_from_toml_config() {
    let config = FormatterConfig::from_toml(
        r#"
placeholder = "{}"
charset = "ISO-8859-1"
null_bytes = { substitute = 63 }
"#,
    )
    .expect("Should parse");
    let formatter = Formatter::new(config);

    let args = [
        Value::Bytes(vec![0x63, 0x61, 0x66, 0xE9]),
        Value::NullableBytes(vec![Some(b'a' as i8), None]),
    ];
    assert_eq!(formatter.format(Some("{} / {} / ?"), &args), "caf\u{e9} / a? / ?");
}

#[test]
fn test_charset_round_trip_through_formatter() {
    let text = "Hello, World! 0123 ~";
    for charset in Charset::ALL {
        let formatter = Formatter::new(FormatterConfig::new().with_charset(charset));
        let bytes = charset.encode(text);
        assert_eq!(
            formatter.format(Some("?"), &[Value::Bytes(bytes)]),
            text,
            "charset {}",
            charset
        );
    }
}

#[test]
fn test_decode_buffer_consumes_bytes() {
    let mut buffer = Cursor::new(Charset::Utf16Le.encode("hi"));
    assert_eq!(decode_buffer(&mut buffer, Some(Charset::Utf16Le)), "hi");
    assert_eq!(Value::Buffer(buffer).to_string(), "");
}

#[test]
fn test_null_byte_skip_policy() {
    let formatter =
        Formatter::new(FormatterConfig::new().with_null_bytes(NullBytePolicy::Skip));
    let value = Value::NullableBytes(vec![None, Some(b'o' as i8), None, Some(b'k' as i8)]);
    assert_eq!(formatter.format(Some("?"), &[value]), "ok");
}

#[test]
fn test_statement_macro_snapshot() {
    let sql = statement!(
        r"update t set a = ?, b = ?, c = '\?' where d = \\?",
        1,
        Some("two"),
        None::<i64>,
    );
    insta::assert_snapshot!(sql, @r"update t set a = 1, b = two, c = '?' where d = \null");
}

#[test]
fn test_formatter_is_shareable_across_threads() {
    let formatter = std::sync::Arc::new(Formatter::default());
    let handles: Vec<_> = (0..4i32)
        .map(|i| {
            let formatter = formatter.clone();
            std::thread::spawn(move || formatter.format(Some("n=?"), &[Value::from(i)]))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), format!("n={}", i));
    }
}
