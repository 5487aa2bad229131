use std::fmt::Write;

use crate::cfgtypes::{ConfigTable, Value};

/// Renders the table as TOML: one `key = value` line per entry, in insertion order.
///
/// Keys are bare TOML keys (the dialect only allows `[_a-z]+`). Strings become basic strings,
/// so quotes, backslashes and control characters are escaped.
pub fn to_toml(table: &ConfigTable) -> String {
    let mut outstr = String::with_capacity(table.len() * 16);
    for (key, val) in table {
        outstr.push_str(key);
        outstr.push_str(" = ");
        push_value(&mut outstr, val);
        outstr.push('\n');
    }
    outstr
}

fn push_value(outstr: &mut String, val: &Value) {
    match val {
        Value::Int(n) => outstr.push_str(n.to_string().as_str()),
        Value::Bool(b) => outstr.push_str(b.to_string().as_str()),
        Value::Str(s) => push_basic_string(outstr, s),
    }
}

// REFERENCE: https://toml.io/en/v1.0.0#string
fn push_basic_string(outstr: &mut String, s: &str) {
    outstr.push('"');
    for ch in s.chars() {
        match ch {
            '"' => outstr.push_str("\\\""),
            '\\' => outstr.push_str("\\\\"),
            '\u{0008}' => outstr.push_str("\\b"),
            '\t' => outstr.push_str("\\t"),
            '\n' => outstr.push_str("\\n"),
            '\u{000C}' => outstr.push_str("\\f"),
            '\r' => outstr.push_str("\\r"),
            c if c.is_control() => {
                // writing into a String cannot fail
                let _ = write!(outstr, "\\u{:04X}", c as u32);
            }
            c => outstr.push(c),
        }
    }
    outstr.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_insertion_order() {
        let mut table = ConfigTable::new();
        table.insert("host".into(), Value::from("localhost"));
        table.insert("port".into(), Value::Int(8080));
        table.insert("debug".into(), Value::Bool(true));

        assert_eq!(
            to_toml(&table),
            "host = \"localhost\"\nport = 8080\ndebug = true\n"
        );
    }

    #[test]
    fn empty_table_renders_nothing() {
        assert_eq!(to_toml(&ConfigTable::new()), "");
    }

    #[test]
    fn strings_are_escaped() {
        let mut table = ConfigTable::new();
        table.insert("path".into(), Value::from("C:\\temp"));
        table.insert("quote".into(), Value::from("say \"hi\""));
        table.insert("tab".into(), Value::from("a\tb"));
        table.insert("bell".into(), Value::from("\u{7}"));
        table.insert("unicode".into(), Value::from("привет"));

        assert_eq!(
            to_toml(&table),
            concat!(
                "path = \"C:\\\\temp\"\n",
                "quote = \"say \\\"hi\\\"\"\n",
                "tab = \"a\\tb\"\n",
                "bell = \"\\u0007\"\n",
                "unicode = \"привет\"\n",
            )
        );
    }
}
