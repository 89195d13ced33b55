//! String literal parsing: escape decoding and surrogate-pair joining.

use memchr::memchr2;

use crate::error::ParseError;
use crate::text::escape::decode_short_escape;
use crate::text::utf8::{encode_code_point, SurrogatePairing};
use crate::Result;

use super::Parser;

impl Parser<'_> {
    /// Parses the body of a string literal. The cursor must sit just past
    /// the opening quote; on success it is left just past the closing one.
    ///
    /// Verbatim runs are copied wholesale up to the next `"` or `\`.
    /// Escapes decode through the fixed short-escape table or, for `\u`,
    /// through the UTF-16 surrogate rule before being re-encoded as UTF-8.
    /// A surrogate half stays pending across any intervening content until
    /// the next `\u` unit joins it; one left hanging at the closing quote
    /// is dropped.
    pub(crate) fn parse_string(&mut self) -> Result<String> {
        let mut buf: Vec<u8> = Vec::with_capacity(16);
        let mut pairing = SurrogatePairing::default();
        loop {
            let rest = &self.bytes[self.pos.min(self.bytes.len())..];
            let Some(offset) = memchr2(b'"', b'\\', rest) else {
                // Ran off the end of the buffer without a closing quote.
                return Err(ParseError::UnclosedString);
            };
            if offset > 0 {
                buf.extend_from_slice(&rest[..offset]);
                self.pos += offset;
            }

            if self.bytes[self.pos] == b'"' {
                self.pos += 1;
                break;
            }

            // Escape sequence.
            self.pos += 1;
            match self.bytes.get(self.pos) {
                None => return Err(ParseError::UnclosedString),
                Some(b'u') => {
                    self.pos += 1;
                    let unit = self.read_hex_unit();
                    if let Some(code) = pairing.push(unit) {
                        encode_code_point(&mut buf, code);
                    }
                }
                Some(&byte) => {
                    buf.push(decode_short_escape(byte).unwrap_or(byte));
                    self.pos += 1;
                }
            }
        }

        debug_assert!(std::str::from_utf8(&buf).is_ok());
        Ok(String::from_utf8(buf).expect("decoded string is valid UTF-8"))
    }

    /// Reads up to four hex digits of a `\u` escape. A non-hex byte ends
    /// the run early and is consumed along with it, even when that byte
    /// is the string's closing quote.
    fn read_hex_unit(&mut self) -> u16 {
        let mut value = 0u16;
        for _ in 0..4 {
            let Some(&byte) = self.bytes.get(self.pos) else {
                break;
            };
            self.pos += 1;
            let Some(digit) = hex_digit(byte) else {
                break;
            };
            value = (value << 4) | u16::from(digit);
        }
        value
    }
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
