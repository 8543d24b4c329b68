//! Browser-compatible number reading
//!
//! Saved documents were produced by a web front end that stored whatever the
//! input fields held: numbers, numeric strings, empty strings, `null`. This
//! module reads a [`serde_json::Value`] the way JavaScript's `Number()`
//! does, so a document means the same thing here as it did there.
//!
//! | value                  | result   |
//! |------------------------|----------|
//! | `12.5`                 | 12.5     |
//! | `" 12.5 "`             | 12.5     |
//! | `""`, `"   "`, `null`  | 0        |
//! | `true` / `false`       | 1 / 0    |
//! | `"12abc"`, `{}`        | NaN      |

use serde_json::Value;

/// `Number(value)`; NaN is returned as `None`
pub fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Null => Some(0.0),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(text) => parse_numeric_str(text),
        Value::Array(items) => match items.as_slice() {
            [] => Some(0.0),
            [single] if !single.is_array() && !single.is_object() => number(single),
            _ => None,
        },
        Value::Object(_) => None,
    }
}

fn parse_numeric_str(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    // Rust accepts "inf" and "nan" spellings that Number() rejects
    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// `Number(value) || fallback`: NaN and 0 both take the fallback
pub fn number_or(value: Option<&Value>, fallback: f64) -> f64 {
    match value.and_then(number) {
        Some(n) if n != 0.0 => n,
        _ => fallback,
    }
}

/// `Number(value) || 0`, additionally reporting whether the value was unreadable
///
/// An absent field is not malformed; a present field that reads as NaN is.
pub fn number_or_zero(value: Option<&Value>) -> (f64, bool) {
    match value {
        None => (0.0, false),
        Some(v) => match number(v) {
            Some(n) => (n, false),
            None => (0.0, true),
        },
    }
}

/// JavaScript truthiness
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(n)) => n.as_f64().map_or(false, |f| f != 0.0 && !f.is_nan()),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Non-empty string field
pub fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_like_number() {
        assert_eq!(number(&json!(12.5)), Some(12.5));
        assert_eq!(number(&json!(" 7 ")), Some(7.0));
        assert_eq!(number(&json!("1e2")), Some(100.0));
        assert_eq!(number(&json!("")), Some(0.0));
        assert_eq!(number(&json!(null)), Some(0.0));
        assert_eq!(number(&json!(true)), Some(1.0));
        assert_eq!(number(&json!([3])), Some(3.0));
        assert_eq!(number(&json!("12abc")), None);
        assert_eq!(number(&json!("nan")), None);
        assert_eq!(number(&json!({})), None);
        assert_eq!(number(&json!([1, 2])), None);
    }

    #[test]
    fn fallback_on_zero_and_nan() {
        assert_eq!(number_or(Some(&json!(0)), 10.0), 10.0);
        assert_eq!(number_or(Some(&json!("abc")), 10.0), 10.0);
        assert_eq!(number_or(None, 10.0), 10.0);
        assert_eq!(number_or(Some(&json!("-5")), 10.0), -5.0);
    }

    #[test]
    fn zero_default_flags_garbage() {
        assert_eq!(number_or_zero(None), (0.0, false));
        assert_eq!(number_or_zero(Some(&json!("4.5"))), (4.5, false));
        assert_eq!(number_or_zero(Some(&json!("lots"))), (0.0, true));
    }

    #[test]
    fn truthiness() {
        assert!(truthy(Some(&json!(true))));
        assert!(truthy(Some(&json!(1))));
        assert!(truthy(Some(&json!("no"))));
        assert!(!truthy(Some(&json!(0))));
        assert!(!truthy(Some(&json!(""))));
        assert!(!truthy(None));
    }
}
