//! Recursive-descent parser from JSON text to a [`Value`] tree.

mod number;
mod string;

use crate::error::ParseError;
use crate::value::{Object, Value};
use crate::Result;

/// Parses one value from `input`, tolerating surrounding `[ \t\r\n]`
/// whitespace. Content after the value and the trailing whitespace is not
/// validated; use [`parse_prefix`] to find out where the value ended.
pub(crate) fn parse(input: &str) -> Result<Value> {
    let (value, _) = parse_prefix(input)?;
    Ok(value)
}

/// Like [`parse`], but also returns the number of input bytes consumed
/// (the value plus the whitespace around it), so a caller can keep
/// scanning a longer stream.
pub(crate) fn parse_prefix(input: &str) -> Result<(Value, usize)> {
    let mut parser = Parser::new(input.as_bytes());
    parser.skip_whitespace();
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    Ok((value, parser.pos))
}

pub(crate) fn parse_slice(input: &[u8]) -> Result<Value> {
    let text = std::str::from_utf8(input)?;
    parse(text)
}

/// A byte cursor over the input. Reading past the end yields `0x00`, so
/// end-of-input inside a value surfaces as `unexpected character (0x00)`.
pub(crate) struct Parser<'a> {
    pub(crate) bytes: &'a [u8],
    pub(crate) pos: usize,
}

impl<'a> Parser<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub(crate) fn peek(&self) -> u8 {
        self.bytes.get(self.pos).copied().unwrap_or(0)
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while matches!(self.peek(), b' ' | b'\t' | b'\r' | b'\n') {
            self.pos += 1;
        }
    }

    /// Dispatch on the first byte. Assumes no leading whitespace; leaves
    /// the cursor just past the parsed value.
    fn parse_value(&mut self) -> Result<Value> {
        match self.peek() {
            b'-' | b'0'..=b'9' => self.parse_number().map(Value::Number),
            b'"' => {
                self.pos += 1;
                self.parse_string().map(Value::String)
            }
            b'[' => self.parse_array(),
            b'{' => self.parse_object(),
            b'f' => self.parse_literal("false", Value::Bool(false)),
            b't' => self.parse_literal("true", Value::Bool(true)),
            b'n' => self.parse_literal("null", Value::Null),
            byte => Err(ParseError::UnexpectedCharacter {
                byte,
                index: self.pos,
            }),
        }
    }

    fn parse_array(&mut self) -> Result<Value> {
        self.pos += 1; // '['
        self.skip_whitespace();

        let mut items = Vec::new();
        while self.peek() != b']' {
            if !items.is_empty() {
                if self.peek() != b',' {
                    return Err(ParseError::ExpectedArraySeparator { index: self.pos });
                }
                self.pos += 1;
                self.skip_whitespace();
            }
            // A failing element drops the partial array via `?`.
            items.push(self.parse_value()?);
            self.skip_whitespace();
        }
        self.pos += 1; // ']'
        Ok(Value::Array(items))
    }

    fn parse_object(&mut self) -> Result<Value> {
        self.pos += 1; // '{'
        self.skip_whitespace();

        let mut entries = Object::new();
        while self.peek() != b'}' {
            if !entries.is_empty() {
                if self.peek() != b',' {
                    return Err(ParseError::ExpectedObjectSeparator { index: self.pos });
                }
                self.pos += 1;
                self.skip_whitespace();
            }

            if self.peek() != b'"' {
                return Err(ParseError::ExpectedQuote { index: self.pos });
            }
            self.pos += 1;
            let key = self.parse_string()?;

            self.skip_whitespace();
            if self.peek() != b':' {
                return Err(ParseError::ExpectedColon { index: self.pos });
            }
            self.pos += 1;
            self.skip_whitespace();

            let value = self.parse_value()?;
            // A repeated key overwrites in place: last write wins, first
            // insertion position kept.
            entries.insert(key, value);
            self.skip_whitespace();
        }
        self.pos += 1; // '}'
        Ok(Value::Object(entries))
    }

    /// Byte-for-byte comparison against the literal spelling selected by
    /// the dispatch. The error index points at the literal's first byte.
    fn parse_literal(&mut self, literal: &'static str, value: Value) -> Result<Value> {
        if self.bytes[self.pos..].starts_with(literal.as_bytes()) {
            self.pos += literal.len();
            Ok(value)
        } else {
            Err(ParseError::ExpectedLiteral {
                literal,
                index: self.pos,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ParseError;
    use crate::value::Value;

    use super::{parse, parse_prefix, parse_slice};

    #[rstest::rstest]
    fn test_parse_skips_surrounding_whitespace() {
        let value = parse(" \t\r\n true \n").unwrap();
        assert_eq!(value, Value::Bool(true));
    }

    #[rstest::rstest]
    fn test_parse_prefix_reports_consumed_length() {
        let (value, consumed) = parse_prefix("  null  more").unwrap();
        assert_eq!(value, Value::Null);
        assert_eq!(consumed, 8);
        assert_eq!(&"  null  more"[consumed..], "more");
    }

    #[rstest::rstest]
    fn test_leading_zero_stops_the_number() {
        // "01" is a complete 0 followed by unconsumed trailing content.
        let (value, consumed) = parse_prefix("01").unwrap();
        assert_eq!(value, Value::Number(0.0));
        assert_eq!(consumed, 1);
    }

    #[rstest::rstest]
    fn test_trailing_content_is_not_validated() {
        let value = parse("1 garbage").unwrap();
        assert_eq!(value, Value::Number(1.0));
    }

    #[rstest::rstest]
    fn test_empty_input_is_unexpected_nul() {
        assert_eq!(
            parse(""),
            Err(ParseError::UnexpectedCharacter { byte: 0, index: 0 })
        );
        assert_eq!(
            parse("   "),
            Err(ParseError::UnexpectedCharacter { byte: 0, index: 3 })
        );
    }

    #[rstest::rstest]
    fn test_parse_slice_rejects_invalid_utf8() {
        assert!(matches!(
            parse_slice(b"\"a\xFFb\""),
            Err(ParseError::InvalidUtf8(_))
        ));
        assert_eq!(parse_slice(b"[true]").unwrap(), Value::Array(vec![Value::Bool(true)]));
    }

    #[rstest::rstest]
    #[case("tru", "true", 0)]
    #[case("falsy", "false", 0)]
    #[case("[nul]", "null", 1)]
    fn test_literal_mismatch(#[case] input: &str, #[case] literal: &str, #[case] index: usize) {
        let err = parse(input).unwrap_err();
        assert_eq!(
            err,
            ParseError::ExpectedLiteral {
                literal: match literal {
                    "true" => "true",
                    "false" => "false",
                    _ => "null",
                },
                index,
            }
        );
    }
}
