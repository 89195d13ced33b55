use json_tree::{parse, to_string, to_string_pretty, Object, Value};
use rstest::rstest;

/// Structural equality with a tolerance on numbers; string escaping is
/// normalized by construction, since both sides went through the parser.
fn assert_close(a: &Value, b: &Value) {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let scale = x.abs().max(y.abs()).max(1.0);
            assert!((x - y).abs() <= scale * 1e-12, "{x} != {y}");
        }
        (Value::Array(xs), Value::Array(ys)) => {
            assert_eq!(xs.len(), ys.len());
            for (x, y) in xs.iter().zip(ys) {
                assert_close(x, y);
            }
        }
        (Value::Object(xs), Value::Object(ys)) => {
            assert_eq!(xs.len(), ys.len());
            for ((xk, xv), (yk, yv)) in xs.iter().zip(ys) {
                assert_eq!(xk, yk);
                assert_close(xv, yv);
            }
        }
        _ => assert_eq!(a, b),
    }
}

fn sample_tree() -> Value {
    let mut inner = Object::new();
    inner.insert("z".to_string(), Value::Number(0.125));
    inner.insert("a".to_string(), Value::String("two\nlines".to_string()));
    inner.insert("grin".to_string(), Value::String("\u{1F600}".to_string()));

    let mut root = Object::new();
    root.insert("numbers".to_string(), Value::Array(vec![
        Value::Number(1.0),
        Value::Number(-17.5),
        Value::Number(1e-3),
        Value::Number(123456789.0),
    ]));
    root.insert("flags".to_string(), Value::Array(vec![
        Value::Bool(true),
        Value::Bool(false),
        Value::Null,
    ]));
    root.insert("nested".to_string(), Value::Object(inner));
    root.insert("empty".to_string(), Value::Array(vec![]));
    Value::Object(root)
}

#[rstest]
fn terse_round_trip_preserves_structure() {
    let original = sample_tree();
    let reparsed = parse(&to_string(&original)).unwrap();
    assert_close(&original, &reparsed);
}

#[rstest]
fn pretty_round_trip_preserves_structure() {
    let original = sample_tree();
    let reparsed = parse(&to_string_pretty(&original)).unwrap();
    assert_close(&original, &reparsed);
}

#[rstest]
fn pretty_serialization_is_idempotent() {
    // Numbers chosen to re-parse to the same double exactly.
    let mut obj = Object::new();
    obj.insert("count".to_string(), Value::Number(42.0));
    obj.insert("half".to_string(), Value::Number(2.5));
    obj.insert("label".to_string(), Value::String("a\tb \"c\"".to_string()));
    obj.insert("on".to_string(), Value::Bool(true));
    obj.insert("items".to_string(), Value::Array(vec![Value::Null, Value::Number(-7.0)]));
    let original = Value::Object(obj);

    let once = to_string_pretty(&original);
    let twice = to_string_pretty(&parse(&once).unwrap());
    assert_eq!(once, twice);
}

#[rstest]
#[case("[1,2.5,\"a\\nb\",true,null]")]
#[case("{\"b\":1,\"a\":2}")]
#[case("\"\\uD83D\\uDE00\"")]
#[case("[[[[0]]]]")]
#[case("-0")]
#[case("{}")]
#[case("[]")]
fn terse_text_is_a_fixed_point(#[case] text: &str) {
    let value = parse(text).unwrap();
    assert_eq!(to_string(&value), text);
}

#[rstest]
fn malformed_inputs_never_yield_a_value() {
    let cases = [
        "", "[", "{", "[1,", "{\"a\"", "{\"a\":", "nul", "trve", "-",
        "1.", "1e", "\"open", "\"\\u41\"", "[1 2]", "{\"a\" 1}", "{'a': 1}", "@",
    ];
    for case in cases {
        assert!(parse(case).is_err(), "expected failure for {case:?}");
    }
}
