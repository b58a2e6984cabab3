//! Config record serialization
//!
//! Theme archives carry small metadata records (`info.cfg`, `styles.cfg`)
//! in the libconfig text grammar the firmware links against: a named group
//! of `key = value;` settings, strings double-quoted, integers bare.

/// A scalar setting value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    Int(i64),
}

/// A named, ordered group of settings
#[derive(Debug, Clone)]
pub struct Record {
    name: String,
    settings: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record with the given group name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            settings: Vec::new(),
        }
    }

    /// Appends a string setting
    pub fn set_str(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.settings.push((key.into(), Value::Str(value.into())));
    }

    /// Appends an integer setting
    pub fn set_int(&mut self, key: impl Into<String>, value: i64) {
        self.settings.push((key.into(), Value::Int(value)));
    }

    /// Returns true if the record holds no settings
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    /// Renders the record as libconfig text
    pub fn render(&self) -> String {
        let mut out = String::new();

        out.push_str(&self.name);
        out.push_str(":\n{\n");

        for (key, value) in &self.settings {
            out.push_str("    ");
            out.push_str(key);
            out.push_str(" = ");
            match value {
                Value::Str(s) => {
                    out.push('"');
                    out.push_str(&escape(s));
                    out.push('"');
                }
                Value::Int(i) => out.push_str(&i.to_string()),
            }
            out.push_str(";\n");
        }

        out.push_str("};\n");
        out
    }
}

fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            _ => escaped.push(c),
        }
    }
    escaped
}
