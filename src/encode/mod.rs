//! Serialization from a [`Value`] tree back to JSON text.

mod writer;

use crate::value::Value;

use writer::Writer;

pub(crate) fn to_string(value: &Value, terse: bool) -> String {
    print_tree(value, terse).finish()
}

pub(crate) fn to_vec(value: &Value, terse: bool) -> Vec<u8> {
    print_tree(value, terse).finish_bytes()
}

fn print_tree(value: &Value, terse: bool) -> Writer {
    let mut printer = Printer {
        writer: Writer::new(),
        terse,
    };
    printer.write_value(value, 0);
    printer.writer
}

struct Printer {
    writer: Writer,
    terse: bool,
}

impl Printer {
    /// Recursive printing, one `depth` per nesting level. Terse mode
    /// drops all inter-token whitespace; indented mode nests two spaces
    /// per level and breaks before each element and the closing bracket.
    fn write_value(&mut self, value: &Value, depth: usize) {
        match value {
            Value::Null => self.writer.write_str("null"),
            Value::Bool(true) => self.writer.write_str("true"),
            Value::Bool(false) => self.writer.write_str("false"),
            Value::Number(n) => self.writer.write_number(*n),
            Value::String(s) => self.writer.write_quoted(s),
            Value::Array(items) => self.write_array(items, depth),
            Value::Object(entries) => self.write_object(entries, depth),
        }
    }

    fn write_array(&mut self, items: &[Value], depth: usize) {
        self.writer.write_byte(b'[');
        // Empty containers print as [] in both modes.
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.writer.write_byte(b',');
            }
            self.break_line(depth + 1);
            self.write_value(item, depth + 1);
        }
        if !items.is_empty() {
            self.break_line(depth);
        }
        self.writer.write_byte(b']');
    }

    fn write_object(&mut self, entries: &crate::value::Object, depth: usize) {
        self.writer.write_byte(b'{');
        // Keys print in insertion order, never sorted.
        for (i, (key, value)) in entries.iter().enumerate() {
            if i > 0 {
                self.writer.write_byte(b',');
            }
            self.break_line(depth + 1);
            self.writer.write_quoted(key);
            self.writer.write_byte(b':');
            if !self.terse {
                self.writer.write_byte(b' ');
            }
            self.write_value(value, depth + 1);
        }
        if !entries.is_empty() {
            self.break_line(depth);
        }
        self.writer.write_byte(b'}');
    }

    fn break_line(&mut self, depth: usize) {
        if self.terse {
            return;
        }
        self.writer.write_newline();
        self.writer.write_indent(depth);
    }
}
