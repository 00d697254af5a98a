//! Ordered YAML document model with two serialization strategies.
//!
//! The daemon config must keep its keys in a fixed order, so the model uses
//! insertion-ordered entry lists rather than maps. Serialization goes through
//! `serde_yaml` when the `yaml` feature is on (the default); the built-in
//! block emitter below is the fallback for hosts where the library cannot be
//! shipped, and is kept compiled and tested either way.

/// A YAML document fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum YamlValue {
    Str(String),
    Bool(bool),
    /// Key/value entries in insertion order.
    Mapping(Vec<(String, YamlValue)>),
    Sequence(Vec<YamlValue>),
}

impl YamlValue {
    /// Shorthand for a string scalar.
    pub fn str(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    fn is_scalar(&self) -> bool {
        matches!(self, Self::Str(_) | Self::Bool(_))
    }
}

impl From<&str> for YamlValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<bool> for YamlValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(feature = "yaml")]
impl serde::Serialize for YamlValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        match self {
            Self::Str(value) => serializer.serialize_str(value),
            Self::Bool(value) => serializer.serialize_bool(*value),
            Self::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Self::Sequence(items) => serializer.collect_seq(items),
        }
    }
}

/// Render a document to YAML text using the selected strategy.
#[cfg(feature = "yaml")]
pub fn render(doc: &YamlValue) -> String {
    serde_yaml::to_string(doc).unwrap_or_else(|_| emit(doc))
}

/// Render a document to YAML text using the selected strategy.
#[cfg(not(feature = "yaml"))]
pub fn render(doc: &YamlValue) -> String {
    emit(doc)
}

/// Built-in block-style YAML emitter.
///
/// Supports nested mappings, sequences, and scalars; two-space indentation;
/// minimal scalar quoting. Output always ends with a newline.
pub fn emit(doc: &YamlValue) -> String {
    let mut out = String::new();
    emit_value(&mut out, doc, 0);
    out
}

fn emit_value(out: &mut String, value: &YamlValue, indent: usize) {
    let pad = "  ".repeat(indent);
    match value {
        YamlValue::Str(_) | YamlValue::Bool(_) => {
            out.push_str(&pad);
            out.push_str(&scalar_text(value));
            out.push('\n');
        }
        YamlValue::Mapping(entries) => {
            for (key, entry) in entries {
                emit_entry(out, &pad, key, entry, indent + 1);
            }
        }
        YamlValue::Sequence(items) => emit_sequence(out, items, indent),
    }
}

/// Emit one `key: value` entry with the given line prefix.
fn emit_entry(out: &mut String, prefix: &str, key: &str, value: &YamlValue, child_indent: usize) {
    match value {
        _ if value.is_scalar() => {
            out.push_str(prefix);
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&scalar_text(value));
            out.push('\n');
        }
        YamlValue::Mapping(entries) if entries.is_empty() => {
            out.push_str(&format!("{prefix}{key}: {{}}\n"));
        }
        YamlValue::Sequence(items) if items.is_empty() => {
            out.push_str(&format!("{prefix}{key}: []\n"));
        }
        _ => {
            out.push_str(&format!("{prefix}{key}:\n"));
            emit_value(out, value, child_indent);
        }
    }
}

fn emit_sequence(out: &mut String, items: &[YamlValue], indent: usize) {
    let pad = "  ".repeat(indent);
    for item in items {
        match item {
            YamlValue::Str(_) | YamlValue::Bool(_) => {
                out.push_str(&format!("{pad}- {}\n", scalar_text(item)));
            }
            YamlValue::Mapping(entries) if entries.is_empty() => {
                out.push_str(&format!("{pad}- {{}}\n"));
            }
            YamlValue::Mapping(entries) => {
                // First entry shares the dash line; the rest align under it.
                for (index, (key, value)) in entries.iter().enumerate() {
                    let lead = if index == 0 { "- " } else { "  " };
                    emit_entry(out, &format!("{pad}{lead}"), key, value, indent + 2);
                }
            }
            YamlValue::Sequence(inner) if inner.is_empty() => {
                out.push_str(&format!("{pad}- []\n"));
            }
            YamlValue::Sequence(inner) => {
                out.push_str(&format!("{pad}-\n"));
                emit_sequence(out, inner, indent + 1);
            }
        }
    }
}

fn scalar_text(value: &YamlValue) -> String {
    match value {
        YamlValue::Bool(true) => "true".to_string(),
        YamlValue::Bool(false) => "false".to_string(),
        YamlValue::Str(s) if needs_quoting(s) => {
            format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
        }
        YamlValue::Str(s) => s.clone(),
        YamlValue::Mapping(_) | YamlValue::Sequence(_) => unreachable!("not a scalar"),
    }
}

/// Plain scalars that YAML would reinterpret must be double-quoted.
fn needs_quoting(s: &str) -> bool {
    if s.is_empty() || s != s.trim() {
        return true;
    }
    if matches!(s, "true" | "false" | "null" | "~" | "yes" | "no" | "on" | "off") {
        return true;
    }
    if s.parse::<f64>().is_ok() {
        return true;
    }
    if s.contains(": ") || s.ends_with(':') || s.contains(" #") || s.contains('\n') {
        return true;
    }
    let first = s.chars().next().unwrap_or(' ');
    "-?:,[]{}#&*!|>'\"%@`".contains(first)
}
