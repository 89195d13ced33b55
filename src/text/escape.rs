//! The fixed short-escape tables and the serialize-direction escaper.

use super::utf8::{decode_code_point, split_into_surrogates};

// Parallel tables: ENCODED[i] is the character after the backslash,
// DECODED[i] the byte it stands for.
const ENCODED: &[u8; 7] = b"bfnrt\"\\";
const DECODED: &[u8; 7] = b"\x08\x0C\n\r\t\"\\";

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Maps the character of a two-character escape (`\n`, `\t`, ...) to the
/// byte it denotes. `None` for characters outside the seven-entry table.
pub(crate) fn decode_short_escape(byte: u8) -> Option<u8> {
    DECODED
        .iter()
        .zip(ENCODED)
        .find_map(|(&decoded, &encoded)| (encoded == byte).then_some(decoded))
}

fn encode_short_escape(code: u32) -> Option<u8> {
    if code > 0x7F {
        return None;
    }
    ENCODED
        .iter()
        .zip(DECODED)
        .find_map(|(&encoded, &decoded)| (u32::from(decoded) == code).then_some(encoded))
}

/// Escapes `s` for quoted JSON output, without the surrounding quotes.
///
/// Each decoded code point becomes one of the seven short escapes, a
/// verbatim ASCII byte, or an uppercase `\uXXXX` escape (two of them for
/// code points above 0xFFFF). The output is pure ASCII.
pub(crate) fn escape_into(out: &mut Vec<u8>, s: &str) {
    let bytes = s.as_bytes();
    let mut pos = 0;
    while pos < bytes.len() {
        let code = decode_code_point(bytes, &mut pos);
        if let Some(short) = encode_short_escape(code) {
            out.push(b'\\');
            out.push(short);
        } else if code < 0x80 {
            out.push(code as u8);
        } else if let Some((high, low)) = split_into_surrogates(code) {
            push_unicode_escape(out, high);
            push_unicode_escape(out, low);
        } else {
            push_unicode_escape(out, code as u16);
        }
    }
}

fn push_unicode_escape(out: &mut Vec<u8>, unit: u16) {
    out.extend_from_slice(b"\\u");
    for shift in [12, 8, 4, 0] {
        out.push(HEX_UPPER[usize::from((unit >> shift) & 0xF)]);
    }
}
