//! A recursive-descent JSON parser and serializer around an owned,
//! insertion-ordered value tree.
//!
//! [`parse`] turns JSON text into a [`Value`]; [`to_string`] and
//! [`to_string_pretty`] turn a [`Value`] back into compact or two-space
//! indented text. Parsing either yields a fully owned tree or a single
//! [`ParseError`] pinpointing the failing byte offset; nothing partial
//! ever escapes.
//!
//! ```
//! use json_tree::{parse, to_string, Value};
//!
//! let value = parse("  [1, 2.5, \"a\\nb\", true, null]  ").unwrap();
//! assert_eq!(value.get_index(2).and_then(Value::as_str), Some("a\nb"));
//! assert_eq!(to_string(&value), "[1,2.5,\"a\\nb\",true,null]");
//! ```
//!
//! Two boundary behaviors are part of the contract rather than accidents:
//! trailing content after a complete value is not validated (use
//! [`parse_prefix`] when parsing one value out of a longer stream), and
//! duplicate object keys overwrite silently, last write winning, with the
//! key's first insertion position kept.
//!
//! Parsing recurses once per nesting level, so stack depth is bounded by
//! the nesting depth of the input; pathologically deep documents can
//! exhaust the stack. There is no built-in depth cap.

mod decode;
mod encode;
pub mod error;
mod text;
mod value;

#[cfg(feature = "serde")]
mod serde_impl;

pub use error::ParseError;
pub use value::{Object, Value};

pub type Result<T> = std::result::Result<T, ParseError>;

/// Parses one JSON value, tolerating whitespace around it.
///
/// Content after the value is left unexamined; `parse("1 garbage")`
/// succeeds with `Number(1.0)`.
pub fn parse(input: &str) -> Result<Value> {
    decode::parse(input)
}

/// Parses raw bytes, checking them for valid UTF-8 first.
pub fn parse_slice(input: &[u8]) -> Result<Value> {
    decode::parse_slice(input)
}

/// Parses one JSON value and returns it together with the number of
/// bytes consumed (value plus surrounding whitespace), so the caller can
/// continue scanning a longer stream.
///
/// ```
/// use json_tree::parse_prefix;
///
/// let (value, consumed) = parse_prefix("42 ,rest").unwrap();
/// assert_eq!(value.as_f64(), Some(42.0));
/// assert_eq!(&"42 ,rest"[consumed..], ",rest");
/// ```
pub fn parse_prefix(input: &str) -> Result<(Value, usize)> {
    decode::parse_prefix(input)
}

/// Serializes a value tree to compact JSON text. Serialization cannot
/// fail: every tree renders, with non-finite numbers printed as `null`.
pub fn to_string(value: &Value) -> String {
    encode::to_string(value, true)
}

/// Serializes with two-space indentation and newlines.
pub fn to_string_pretty(value: &Value) -> String {
    encode::to_string(value, false)
}

pub fn to_vec(value: &Value) -> Vec<u8> {
    encode::to_vec(value, true)
}

pub fn to_vec_pretty(value: &Value) -> Vec<u8> {
    encode::to_vec(value, false)
}
