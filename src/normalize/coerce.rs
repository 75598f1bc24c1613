//! Scalar coercion helpers for raw claim fields
//!
//! Each helper maps one loosely typed JSON value to a canonical scalar and
//! degrades to a neutral default on anything unexpected. Downstream code
//! only ever sees the canonical forms.

use serde_json::Value;

use crate::models::Gender;

/// Coerce a raw identifier or code field to a trimmed string
///
/// Numeric ids are stringified; empty strings become `None`.
#[must_use]
pub fn coerce_string(value: Option<&Value>) -> Option<String> {
    let s = match value? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if s.is_empty() { None } else { Some(s) }
}

/// Canonical form of a provider identifier: uppercased and trimmed
#[must_use]
pub fn canonical_provider_id(id: &str) -> String {
    id.trim().to_uppercase()
}

/// Coerce a raw provider field to its canonical identifier
#[must_use]
pub fn coerce_provider_id(value: Option<&Value>) -> Option<String> {
    coerce_string(value).map(|s| canonical_provider_id(&s))
}

/// Coerce a raw amount field to a finite number
///
/// Accepts JSON numbers and numeric strings; non-finite values are
/// rejected so a single bad amount cannot poison the aggregates.
#[must_use]
pub fn coerce_amount(value: Option<&Value>) -> Option<f64> {
    let amount = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    amount.is_finite().then_some(amount)
}

/// Coerce a raw gender field to the tagged enumeration
#[must_use]
pub fn coerce_gender(value: Option<&Value>) -> Gender {
    match value {
        Some(Value::String(s)) => Gender::from(s.as_str()),
        Some(Value::Number(n)) => n.as_i64().map_or(Gender::Unknown, Gender::from),
        _ => Gender::Unknown,
    }
}

/// Coerce a raw chronic-condition indicator to 1 or 0
///
/// Truthy markers are `1`, `"1"`, and anything containing "yes"; explicit
/// falsy markers and everything unrecognized map to 0.
#[must_use]
pub fn coerce_chronic_flag(value: Option<&Value>) -> u8 {
    match value {
        Some(Value::Number(n)) => u8::from(n.as_i64() == Some(1)),
        Some(Value::String(s)) => {
            let s = s.trim().to_lowercase();
            u8::from(s == "1" || s.contains("yes"))
        }
        Some(Value::Bool(b)) => u8::from(*b),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_amount_guards() {
        assert_eq!(coerce_amount(Some(&json!(120.5))), Some(120.5));
        assert_eq!(coerce_amount(Some(&json!("99.25"))), Some(99.25));
        assert_eq!(coerce_amount(Some(&json!("abc"))), None);
        assert_eq!(coerce_amount(Some(&json!(null))), None);
        assert_eq!(coerce_amount(None), None);
    }

    #[test]
    fn test_coerce_chronic_flag_markers() {
        assert_eq!(coerce_chronic_flag(Some(&json!(1))), 1);
        assert_eq!(coerce_chronic_flag(Some(&json!("1"))), 1);
        assert_eq!(coerce_chronic_flag(Some(&json!("Yes"))), 1);
        assert_eq!(coerce_chronic_flag(Some(&json!("Yes (1)"))), 1);
        assert_eq!(coerce_chronic_flag(Some(&json!("No"))), 0);
        assert_eq!(coerce_chronic_flag(Some(&json!(0))), 0);
        assert_eq!(coerce_chronic_flag(Some(&json!(2))), 0);
        assert_eq!(coerce_chronic_flag(Some(&json!("garbage"))), 0);
        assert_eq!(coerce_chronic_flag(None), 0);
    }

    #[test]
    fn test_provider_ids_are_canonicalized() {
        assert_eq!(
            coerce_provider_id(Some(&json!("  prv5141 "))),
            Some("PRV5141".to_string())
        );
        assert_eq!(coerce_provider_id(Some(&json!(""))), None);
    }

    #[test]
    fn test_numeric_ids_are_stringified() {
        assert_eq!(coerce_string(Some(&json!(11001))), Some("11001".to_string()));
    }
}
