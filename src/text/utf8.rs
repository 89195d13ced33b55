//! UTF-8 code point codec and the UTF-16 surrogate split/join rules.
//!
//! Shared by string parsing (which encodes `\uXXXX` escapes into UTF-8)
//! and string escaping (which decodes stored bytes back into code points).

/// Reads one UTF-8 sequence starting at `*pos` and advances `*pos` past it.
///
/// The count of leading 1-bits in the first byte selects the sequence
/// length; each continuation byte contributes 6 bits. Truncated sequences
/// at the end of the input stop early rather than read out of bounds.
pub(crate) fn decode_code_point(bytes: &[u8], pos: &mut usize) -> u32 {
    let first = bytes[*pos];
    *pos += 1;
    let len = first.leading_ones() as usize;
    let mut value = u32::from(first) & (0xFF >> len);
    let mut remaining = len.saturating_sub(1);
    while remaining > 0 {
        let Some(&byte) = bytes.get(*pos) else { break };
        value = (value << 6) | (u32::from(byte) & 0x3F);
        *pos += 1;
        remaining -= 1;
    }
    value
}

/// Appends the 1-4 byte UTF-8 encoding of `code` to `out`.
///
/// Sequence length follows the standard range thresholds (0x80, 0x800,
/// 0x10000). `code` must be at most 0x10FFFF.
pub(crate) fn encode_code_point(out: &mut Vec<u8>, code: u32) {
    if code < 0x80 {
        out.push(code as u8);
    } else if code < 0x800 {
        out.push(0xC0 | (code >> 6) as u8);
        out.push(0x80 | (code & 0x3F) as u8);
    } else if code < 0x10000 {
        out.push(0xE0 | (code >> 12) as u8);
        out.push(0x80 | ((code >> 6) & 0x3F) as u8);
        out.push(0x80 | (code & 0x3F) as u8);
    } else {
        out.push(0xF0 | (code >> 18) as u8);
        out.push(0x80 | ((code >> 12) & 0x3F) as u8);
        out.push(0x80 | ((code >> 6) & 0x3F) as u8);
        out.push(0x80 | (code & 0x3F) as u8);
    }
}

/// Splits a code point above 0xFFFF into its UTF-16 surrogate pair.
/// Returns `None` when no split is needed.
pub(crate) fn split_into_surrogates(code: u32) -> Option<(u16, u16)> {
    if code <= 0xFFFF {
        return None;
    }
    let offset = code - 0x10000;
    let high = 0xD800 | (offset >> 10) as u16;
    let low = 0xDC00 | (offset & 0x3FF) as u16;
    Some((high, low))
}

/// The inverse of [`split_into_surrogates`], stateful across the whole
/// string: a unit carrying the surrogate bit pattern is held pending and
/// fused with the next `\u` unit, whatever comes between them. A unit
/// still pending when the string ends is dropped.
#[derive(Default)]
pub(crate) struct SurrogatePairing {
    pending: u32,
}

impl SurrogatePairing {
    /// Feeds one 16-bit code unit. Returns the completed code point, or
    /// `None` while the unit is held as half of a pair.
    pub(crate) fn push(&mut self, unit: u16) -> Option<u32> {
        let mut code = u32::from(unit);
        if self.pending != 0 {
            // (x + 0x40) << 10 is 0x10000 + (x << 10).
            code = (((self.pending & 0x3FF) + 0x40) << 10) + (code & 0x3FF);
        }
        // Low surrogates are held too; a lone one never reaches the output.
        if (code & 0xD800) == 0xD800 {
            self.pending = code;
            None
        } else {
            self.pending = 0;
            Some(code)
        }
    }
}
