//! Submitted field values and their text/emptiness semantics.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Separator used when a multi-valued field is flattened to text.
pub const LIST_SEPARATOR: &str = ";";

/// A value submitted for a single form field.
///
/// Length checks and pattern rules operate on the [`fmt::Display`] form of
/// the value; `not_empty` uses [`FieldValue::is_empty`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Permissive emptiness: null, `false`, zero, `""`, `"0"` and an empty
    /// list all count as empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Int(i) => *i == 0,
            Self::Float(f) => *f == 0.0,
            Self::Text(s) => s.is_empty() || s == "0",
            Self::List(items) => items.is_empty(),
        }
    }

    /// Byte length of the textual form.
    pub fn text_len(&self) -> usize {
        match self {
            Self::Text(s) => s.len(),
            other => other.to_string().len(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null | Self::Bool(false) => Ok(()),
            Self::Bool(true) => f.write_str("1"),
            Self::Int(i) => write!(f, "{i}"),
            // f64's Display already drops the fraction of integral values.
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join(LIST_SEPARATOR)),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        Self::Text(s.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        Self::Int(i.into())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        Self::Int(i.into())
    }
}

impl From<usize> for FieldValue {
    fn from(i: usize) -> Self {
        match i64::try_from(i) {
            Ok(i) => Self::Int(i),
            Err(_) => Self::Text(i.to_string()),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<&Value> for FieldValue {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Self::Int(i),
                (None, Some(x)) => Self::Float(x),
                (None, None) => Self::Text(n.to_string()),
            },
            Value::String(s) => Self::Text(s.clone()),
            Value::Array(items) => Self::List(
                items
                    .iter()
                    .map(|item| Self::from(item).to_string())
                    .collect(),
            ),
            Value::Object(_) => Self::Text(v.to_string()),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(v: Value) -> Self {
        Self::from(&v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_and_false_stringify_to_empty() {
        assert_eq!(FieldValue::Null.to_string(), "");
        assert_eq!(FieldValue::Bool(false).to_string(), "");
        assert_eq!(FieldValue::Bool(true).to_string(), "1");
    }

    #[test]
    fn integral_floats_drop_fraction() {
        assert_eq!(FieldValue::Float(3.0).to_string(), "3");
        assert_eq!(FieldValue::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn lists_join_with_separator() {
        let v = FieldValue::from(vec!["a.png".to_string(), "b.png".to_string()]);
        assert_eq!(v.to_string(), "a.png;b.png");
        assert_eq!(v.text_len(), 11);
    }

    #[test]
    fn permissive_emptiness() {
        assert!(FieldValue::Null.is_empty());
        assert!(FieldValue::Bool(false).is_empty());
        assert!(FieldValue::Int(0).is_empty());
        assert!(FieldValue::Float(0.0).is_empty());
        assert!(FieldValue::from("").is_empty());
        assert!(FieldValue::from("0").is_empty());
        assert!(FieldValue::List(Vec::new()).is_empty());
    }

    #[test]
    fn non_empty_values() {
        assert!(!FieldValue::from("0x").is_empty());
        assert!(!FieldValue::from(" ").is_empty());
        assert!(!FieldValue::from("0.0").is_empty());
        assert!(!FieldValue::Int(-1).is_empty());
        assert!(!FieldValue::Bool(true).is_empty());
    }

    #[test]
    fn converts_from_json() {
        assert_eq!(FieldValue::from(json!(null)), FieldValue::Null);
        assert_eq!(FieldValue::from(json!(42)), FieldValue::Int(42));
        assert_eq!(FieldValue::from(json!(1.5)), FieldValue::Float(1.5));
        assert_eq!(FieldValue::from(json!("x")), FieldValue::from("x"));
        assert_eq!(
            FieldValue::from(json!(["a", 1])),
            FieldValue::List(vec!["a".to_string(), "1".to_string()])
        );
    }

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(FieldValue::from(None::<String>), FieldValue::Null);
        assert_eq!(FieldValue::from(Some(7i64)), FieldValue::Int(7));
    }
}
