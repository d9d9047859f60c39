use serde_json::{Map, Value};

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Format a person's full name as "First Last".
pub fn format_name(first: &str, last: &str) -> String {
    format!("{} {}", capitalize(first), capitalize(last))
}

/// Collect the `name` field of every record that has one.
/// String names are taken verbatim; any other JSON value is rendered as JSON text.
pub fn process_data(data: &[Map<String, Value>]) -> Vec<String> {
    data.iter()
        .filter_map(|item| item.get("name"))
        .map(|name| match name {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect()
}
