//! CSV cell to JSON scalar conversion.

use serde_json::{Number, Value};

/// Convert a raw CSV cell into a JSON value.
///
/// Empty cells and the literal `null` (any case) become `null`. Thousands
/// separators and percent signs are dropped before parsing; a decimal point
/// selects a float, otherwise an integer is parsed. Anything that does not
/// parse is kept as the cleaned string.
pub fn convert_value(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::Null;
    }

    let value = strip_enclosing_quotes(raw.trim());
    if value.is_empty() || value.eq_ignore_ascii_case("null") {
        return Value::Null;
    }

    let numeric: String = value.chars().filter(|c| *c != ',' && *c != '%').collect();
    let numeric = numeric.trim();
    let parsed = if numeric.contains('.') { parse_float(numeric) } else { parse_int(numeric) };

    parsed.unwrap_or_else(|| {
        tracing::debug!("Keeping non-numeric value {:?} as a string", value);
        Value::String(value.to_string())
    })
}

/// Remove one layer of matching single or double quotes.
fn strip_enclosing_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value.strip_prefix(quote).and_then(|v| v.strip_suffix(quote)) {
            return inner;
        }
    }
    value
}

fn parse_int(text: &str) -> Option<Value> {
    if let Ok(n) = text.parse::<i64>() {
        return Some(Value::Number(n.into()));
    }
    text.parse::<u64>().ok().map(|n| Value::Number(n.into()))
}

fn parse_float(text: &str) -> Option<Value> {
    // `f64::from_str` also takes "inf"/"NaN" spellings; JSON has no place for them.
    let n = text.parse::<f64>().ok()?;
    Number::from_f64(n).map(Value::Number)
}
