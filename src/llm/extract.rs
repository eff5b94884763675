//! Pull a JSON object out of free-form model output.

use serde_json::{json, Map, Value};
use tracing::warn;

/// Reply used when the model's text holds no usable object.
pub fn could_not_parse() -> Value {
    json!({"error": "could not parse"})
}

/// First balanced `{...}` span in `text`, honoring string literals and
/// escapes so braces inside strings do not count.
pub fn first_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parse model output into a JSON object, falling back to
/// [`could_not_parse`] instead of failing.
pub fn parse_model_output(text: &str) -> Value {
    let Some(candidate) = first_json_object(text) else {
        warn!("Model output holds no JSON object");
        return could_not_parse();
    };
    match serde_json::from_str::<Map<String, Value>>(candidate) {
        Ok(object) => Value::Object(object),
        Err(e) => {
            warn!("Error parsing model output: {}", e);
            could_not_parse()
        }
    }
}
