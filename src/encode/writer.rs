use crate::text::escape::escape_into;

/// Accumulates serializer output and caches indent prefixes per depth.
pub(crate) struct Writer {
    buffer: Vec<u8>,
    indent_cache: Vec<String>,
}

const INDENT_UNIT: &str = "  ";

impl Writer {
    pub fn new() -> Self {
        Self {
            buffer: Vec::new(),
            indent_cache: vec![String::new()],
        }
    }

    pub fn finish(self) -> String {
        String::from_utf8(self.buffer).expect("writer output must be valid UTF-8")
    }

    pub fn finish_bytes(self) -> Vec<u8> {
        self.buffer
    }

    pub fn write_str(&mut self, s: &str) {
        self.buffer.extend_from_slice(s.as_bytes());
    }

    pub fn write_byte(&mut self, byte: u8) {
        self.buffer.push(byte);
    }

    pub fn write_newline(&mut self) {
        self.buffer.push(b'\n');
    }

    pub fn write_indent(&mut self, depth: usize) {
        if depth == 0 {
            return;
        }
        if depth >= self.indent_cache.len() {
            self.extend_indent_cache(depth);
        }
        self.buffer
            .extend_from_slice(self.indent_cache[depth].as_bytes());
    }

    pub fn write_quoted(&mut self, s: &str) {
        self.buffer.push(b'"');
        escape_into(&mut self.buffer, s);
        self.buffer.push(b'"');
    }

    /// General floating-point formatting: integral values within i64 range
    /// print without a fractional part, everything else goes through the
    /// shortest round-trip form. Non-finite values print `null`, which is
    /// the only spelling the grammar has for them.
    pub fn write_number(&mut self, value: f64) {
        if !value.is_finite() {
            self.write_str("null");
            return;
        }
        let integral = value as i64;
        if integral as f64 == value {
            // itoa would lose the sign of a negative zero.
            if integral == 0 && value.is_sign_negative() {
                self.write_byte(b'-');
            }
            let mut buf = itoa::Buffer::new();
            self.write_str(buf.format(integral));
            return;
        }
        let mut buf = ryu::Buffer::new();
        self.write_str(buf.format(value));
    }

    fn extend_indent_cache(&mut self, depth: usize) {
        while self.indent_cache.len() <= depth {
            let mut next = self
                .indent_cache
                .last()
                .cloned()
                .unwrap_or_default();
            next.push_str(INDENT_UNIT);
            self.indent_cache.push(next);
        }
    }
}
